use super::ui::{Button, Input};
use contracts::shared::contact::ContactInfo;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Points of contact of a customer or vendor.
///
/// Unparsed entries from older records are shown as plain text and can only
/// be removed; new entries are always structured.
#[component]
pub fn ContactListEditor(
    contacts: RwSignal<Vec<ContactInfo>>,
    /// Errors keyed "contacts.N"
    #[prop(optional, into)]
    errors: MaybeProp<FieldErrors>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let add = move |_: leptos::ev::MouseEvent| {
        let contact = ContactInfo::structured(
            name.get_untracked().trim(),
            email.get_untracked().trim(),
            phone.get_untracked().trim(),
        );
        contacts.update(|list| list.push(contact));
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
    };

    view! {
        <fieldset class="form__fieldset">
            <legend>"Contacts"</legend>
            <ul class="contact-list">
                {move || {
                    contacts
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, contact)| {
                            let class = if contact.is_structured() {
                                "contact-list__item"
                            } else {
                                "contact-list__item contact-list__item--raw"
                            };
                            let error = errors
                                .get()
                                .and_then(|e| e.get(&format!("contacts.{}", i)).map(str::to_string));
                            view! {
                                <li class=class>
                                    <span>{contact.display()}</span>
                                    <button
                                        type="button"
                                        class="button button--ghost"
                                        on:click=move |_| {
                                            contacts.update(|list| {
                                                if i < list.len() {
                                                    list.remove(i);
                                                }
                                            })
                                        }
                                    >
                                        "Remove"
                                    </button>
                                    {error.map(|e| view! { <div class="form__error">{e}</div> })}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <div class="form__row">
                <Input
                    placeholder="Name".to_string()
                    value=name
                    on_input=Callback::new(move |v: String| name.set(v))
                />
                <Input
                    placeholder="Email".to_string()
                    input_type="email".to_string()
                    value=email
                    on_input=Callback::new(move |v: String| email.set(v))
                />
                <Input
                    placeholder="Phone".to_string()
                    value=phone
                    on_input=Callback::new(move |v: String| phone.set(v))
                />
                <Button
                    variant="secondary".to_string()
                    disabled=Signal::derive(move || {
                        name.get().trim().is_empty()
                            && email.get().trim().is_empty()
                            && phone.get().trim().is_empty()
                    })
                    on_click=Callback::new(add)
                >
                    "Add contact"
                </Button>
            </div>
        </fieldset>
    }
}
