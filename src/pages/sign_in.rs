//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `SignInForm` signal for its lifetime. Submitting runs the schema
//! synchronously; a dispatched submission is handed to `SubmissionHandler` on
//! a local task, which resolves the form and navigates home on success.
//! The Google/Github buttons are placeholders with no handler.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::form::controller::{SignInForm, SubmitOutcome};
use crate::form::submission::SubmissionHandler;
use crate::net::auth_client::HttpAuthClient;
use crate::util::lifetime::Lifetime;

#[component]
pub fn SignInPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let form = RwSignal::new(SignInForm::default());
    let navigate = use_navigate();

    let lifetime = Lifetime::new();
    lifetime.end_on_cleanup();

    let home_route = config.home_route.clone();
    let sign_up_route = config.sign_up_route.clone();
    let client = HttpAuthClient::new(&config);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = form.try_update(SignInForm::submit).unwrap_or(SubmitOutcome::Blocked);
        let SubmitOutcome::Dispatched(credentials) = outcome else {
            return;
        };

        let navigate = navigate.clone();
        let handler = SubmissionHandler::new(
            client.clone(),
            move |path: &str| navigate(path, NavigateOptions::default()),
            home_route.clone(),
        );
        let lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            handler
                .handle(credentials, &lifetime, |result| {
                    if form.try_update(|f| f.resolve(result)).is_none() {
                        log::debug!("sign-in form signal already disposed");
                    }
                })
                .await;
        });
    };

    let email = Signal::derive(move || form.with(|f| f.email().to_owned()));
    let password = Signal::derive(move || form.with(|f| f.password().to_owned()));
    let email_error = Signal::derive(move || form.with(|f| f.field_errors().email.clone()));
    let password_error = Signal::derive(move || form.with(|f| f.field_errors().password.clone()));
    let banner = Signal::derive(move || form.with(|f| f.global_error().map(str::to_owned)));
    let on_email = Callback::new(move |value: String| form.update(|f| f.set_email(value)));
    let on_password = Callback::new(move |value: String| form.update(|f| f.set_password(value)));
    let pending = move || form.with(SignInForm::is_pending);
    let submit_disabled = move || !form.with(SignInForm::accepts_submit);

    view! {
        <div class="sign-in-page">
            <div class="sign-in-card">
                <form class="sign-in-form" on:submit=on_submit novalidate>
                    <div class="sign-in-form__header">
                        <h1>"Welcome back"</h1>
                        <p class="sign-in-form__subtitle">"Login to your account"</p>
                    </div>
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="m@gmail.com"
                        value=email
                        on_input=on_email
                        error=email_error
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="********"
                        value=password
                        on_input=on_password
                        error=password_error
                    />
                    <ErrorBanner message=banner/>
                    <button class="sign-in-button" type="submit" disabled=submit_disabled>
                        "Sign In"
                    </button>
                    <div class="sign-in-divider">
                        <span>"or continue with"</span>
                    </div>
                    <div class="sign-in-providers">
                        <button class="sign-in-button sign-in-button--outline" type="button" disabled=pending>
                            "Google"
                        </button>
                        <button class="sign-in-button sign-in-button--outline" type="button" disabled=pending>
                            "Github"
                        </button>
                    </div>
                    <p class="sign-in-form__footer">
                        "Don't have an account? "
                        <A href=sign_up_route>"Sign Up"</A>
                    </p>
                </form>
                <div class="sign-in-brand">
                    <img src="/logo.svg" alt="logo" class="sign-in-brand__logo"/>
                    <p class="sign-in-brand__name">"Meet.AI"</p>
                </div>
            </div>
        </div>
    }
}
