//! Header component with backend health badge

use leptos::logging::warn;
use leptos::prelude::*;

use crate::api;

#[component]
pub fn Header() -> impl IntoView {
    // None until the probe settles
    let (online, set_online) = signal::<Option<bool>>(None);

    // probe the backend once on mount
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let healthy = match api::check_health().await {
                Ok(health) => health.is_healthy(),
                Err(e) => {
                    warn!("health check failed: {}", e);
                    false
                }
            };
            set_online.set(Some(healthy));
        });
    });

    view! {
        <header class="header">
            <div>
                <h1>"Medicine & Drug Interaction Advisor"</h1>
                <p class="subtitle">"Get instant answers about medications, interactions, and side effects"</p>
            </div>
            {move || match online.get() {
                None => view! { <span class="badge">"Checking API..."</span> }.into_any(),
                Some(true) => view! { <span class="badge">"API online"</span> }.into_any(),
                Some(false) => view! { <span class="badge offline">"API offline"</span> }.into_any(),
            }}
        </header>
    }
}
