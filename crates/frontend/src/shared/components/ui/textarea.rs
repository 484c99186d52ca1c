use super::input::field_group_class;
use leptos::prelude::*;

/// Multi-line text with an optional length cap and inline error
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)]
    max_length: Option<u32>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let group_class = move || field_group_class(error.get().is_some(), false);
    let counter = move || {
        max_length.map(|max| {
            let used = value.with(|v| v.chars().count());
            view! { <div class="form__counter">{format!("{}/{}", used, max)}</div> }
        })
    };

    view! {
        <div class=group_class>
            {move || label.get().map(|l| view! { <label class="form__label" for=textarea_id>{l}</label> })}
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                rows=rows.unwrap_or(3)
                maxlength=max_length.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {counter}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
