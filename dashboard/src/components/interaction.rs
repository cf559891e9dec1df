//! Drug interaction tab component

use leptos::prelude::*;

use super::submit_interaction_check;
use crate::state::AdvisorState;

#[component]
pub fn InteractionTab(
    state: ReadSignal<AdvisorState>,
    set_state: WriteSignal<AdvisorState>,
) -> impl IntoView {
    view! {
        <div class="card interaction-section">
            <h2>"Check Drug Interactions"</h2>

            <div class="interaction-inputs">
                <input
                    type="text"
                    placeholder="First drug (e.g., ibuprofen)"
                    prop:value=move || state.with(|s| s.drug1.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_state.update(|s| s.drug1 = value);
                    }
                />
                <span class="and">"AND"</span>
                <input
                    type="text"
                    placeholder="Second drug (e.g., amoxicillin)"
                    prop:value=move || state.with(|s| s.drug2.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_state.update(|s| s.drug2 = value);
                    }
                />
                <button
                    on:click=move |_| submit_interaction_check(set_state)
                    disabled=move || state.with(|s| s.loading)
                >
                    {move || if state.with(|s| s.loading) {
                        view! { <span class="spinner"></span> " Checking..." }.into_any()
                    } else {
                        view! { "Check Interaction" }.into_any()
                    }}
                </button>
            </div>
        </div>
    }
}
