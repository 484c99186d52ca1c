use super::input::field_group_class;
use contracts::domain::a003_order::Attachment;
use leptos::prelude::*;

/// File picker reporting the chosen files as [`Attachment`] metadata
#[component]
pub fn FileInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional)]
    multiple: bool,
    /// e.g. "image/*"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    /// Currently attached files, listed under the picker
    #[prop(into)]
    files: Signal<Vec<Attachment>>,
    on_change: Callback<Vec<Attachment>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    shake: MaybeProp<bool>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
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
                type="file"
                multiple=multiple
                accept=move || accept.get().unwrap_or_default()
                on:change=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    on_change.run(selected_files(&input));
                }
            />
            <ul class="form__files">
                <For
                    each=move || files.get()
                    key=|f| f.file_name.clone()
                    children=|f| view! { <li>{f.file_name}</li> }
                />
            </ul>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<Attachment> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| Attachment::new(file.name(), file.type_(), file.size() as u64))
        .collect()
}
