use crate::domain::a001_customer::ui::details::CustomerDetails;
use crate::shared::api_utils::get_json;
use crate::shared::components::ui::Button;
use crate::system::auth::session::use_session;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

#[derive(Clone, PartialEq)]
enum Editing {
    None,
    New,
    Existing(String),
}

/// Customer registry with an inline details form
#[component]
pub fn CustomerList() -> impl IntoView {
    let session = use_session();
    let items = RwSignal::new(Vec::<Customer>::new());
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(Editing::None);

    let load = move || {
        let session = session.0.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match get_json::<Vec<Customer>>("/api/customer", session.as_ref()).await {
                Ok(list) => {
                    error.set(None);
                    items.set(list);
                }
                Err(e) => error.set(Some(e.message())),
            }
        });
    };
    load();

    let on_saved = Callback::new(move |_id: String| {
        editing.set(Editing::None);
        load();
    });
    let on_cancel = Callback::new(move |_| editing.set(Editing::None));

    view! {
        <div class="content">
            <div class="header">
                <h2>{Customer::list_name()}</h2>
                <Button on_click=Callback::new(move |_| editing.set(Editing::New))>{format!("New {}", Customer::element_name().to_lowercase())}</Button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match editing.get() {
                Editing::None => ().into_any(),
                Editing::New => view! { <CustomerDetails on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
                Editing::Existing(id) => view! { <CustomerDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
            }}

            <table class="table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Name"</th>
                        <th>"Location"</th>
                        <th>"Contacts"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|c| c.id.value()
                        children=move |c| {
                            let id = c.to_string_id();
                            let contacts = c
                                .contacts
                                .iter()
                                .map(|x| x.display())
                                .collect::<Vec<_>>()
                                .join("; ");
                            view! {
                                <tr class="table__row" on:click=move |_| editing.set(Editing::Existing(id.clone()))>
                                    <td>{c.code}</td>
                                    <td>{c.name}</td>
                                    <td>{c.address.display()}</td>
                                    <td>{contacts}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
