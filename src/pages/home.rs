//! Landing route reached after a successful sign-in.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <img src="/logo.svg" alt="logo" class="home-page__logo"/>
            <h1>"Meet.AI"</h1>
        </div>
    }
}
