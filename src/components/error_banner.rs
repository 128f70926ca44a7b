//! Form-wide error banner.

use leptos::prelude::*;

/// Shows `message` in an alert box; renders nothing while it is `None`.
#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="error-banner" role="alert">
                <span class="error-banner__icon" aria-hidden="true">
                    "⚠"
                </span>
                <p class="error-banner__title">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
