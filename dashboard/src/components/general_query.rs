//! General query tab component

use advisor_shared::EXAMPLE_QUERIES;
use leptos::prelude::*;

use super::submit_general_query;
use crate::state::AdvisorState;

#[component]
pub fn GeneralQueryTab(
    state: ReadSignal<AdvisorState>,
    set_state: WriteSignal<AdvisorState>,
) -> impl IntoView {
    view! {
        <div class="card query-section">
            <h2>"Ask About Medications"</h2>

            <div class="input-group">
                <input
                    type="text"
                    placeholder="e.g., What are the side effects of metformin?"
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_state.update(|s| s.query = value);
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit_general_query(set_state);
                        }
                    }
                />
                <button
                    on:click=move |_| submit_general_query(set_state)
                    disabled=move || state.with(|s| s.loading)
                >
                    {move || if state.with(|s| s.loading) {
                        view! { <span class="spinner"></span> " Searching..." }.into_any()
                    } else {
                        view! { "Ask" }.into_any()
                    }}
                </button>
            </div>

            // clicking an example fills the input
            <div class="examples">
                <p>"Example queries:"</p>
                <ul>
                    {EXAMPLE_QUERIES
                        .into_iter()
                        .map(|example| view! {
                            <li on:click=move |_| set_state.update(|s| s.query = example.to_string())>
                                {example}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
