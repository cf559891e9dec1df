//! Error banner and response panel

use advisor_shared::DISCLAIMER;
use leptos::prelude::*;

use crate::state::AdvisorState;

#[component]
pub fn ErrorBanner(state: ReadSignal<AdvisorState>) -> impl IntoView {
    let error = move || state.with(|s| s.has_error().then(|| s.error.clone()));

    view! {
        {move || error().map(|message| view! {
            <div class="result error">
                <p>{message}</p>
            </div>
        })}
    }
}

#[component]
pub fn ResponsePanel(state: ReadSignal<AdvisorState>) -> impl IntoView {
    view! {
        {move || state.with(|s| s.response.clone()).map(|response| {
            let text = response.text().to_string();
            let rows = response.metadata();
            let has_rows = !rows.is_empty();

            view! {
                <div class="card response-section">
                    <h3>"Response"</h3>
                    <div class="response-content">
                        <p>{text}</p>
                        {has_rows.then(|| view! {
                            <div class="metadata">
                                {rows
                                    .into_iter()
                                    .map(|row| view! {
                                        <p><strong>{row.label}":"</strong>" "{row.value}</p>
                                    })
                                    .collect_view()}
                            </div>
                        })}
                    </div>
                    // every answer carries the disclaimer
                    <div class="disclaimer">
                        <p><strong>"Disclaimer:"</strong>" "{DISCLAIMER}</p>
                    </div>
                </div>
            }
        })}
    }
}
