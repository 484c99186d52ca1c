use leptos::prelude::*;

/// Text-like input with label and inline error
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "date", "email", "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Message shown under the field; also marks the field as invalid
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Adds the shake animation class while true
    #[prop(optional, into)]
    shake: MaybeProp<bool>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let group_class = move || field_group_class(error.get().is_some(), shake.get().unwrap_or(false));

    view! {
        <div class=group_class>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Class list of a form group with error and shake state
pub fn field_group_class(has_error: bool, shake: bool) -> String {
    let mut class = String::from("form__group");
    if has_error {
        class.push_str(" form__group--error");
        if shake {
            class.push_str(" shake");
        }
    }
    class
}
