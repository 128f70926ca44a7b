//! Labeled input with an inline validation message.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    let error_id = error_element_id(&name);
    let described_by = error_id.clone();

    view! {
        <div class="form-field">
            <label class="form-field__label" for=name.clone()>
                {label}
            </label>
            <input
                class="form-field__input"
                class:form-field__input--invalid=move || error.with(Option::is_some)
                id=name.clone()
                name=name
                type=input_type
                placeholder=placeholder
                aria-invalid=move || if error.with(Option::is_some) { "true" } else { "false" }
                aria-describedby=move || described_by_attr(&described_by, error.with(Option::is_some))
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p class="form-field__error" id=error_id.clone()>
                                {message}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

fn error_element_id(name: &str) -> String {
    format!("{name}-error")
}

/// `aria-describedby` value; omitted while the error element is not rendered.
fn described_by_attr(error_id: &str, has_error: bool) -> Option<String> {
    has_error.then(|| error_id.to_owned())
}
