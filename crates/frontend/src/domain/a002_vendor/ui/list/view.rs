use crate::domain::a002_vendor::ui::details::VendorDetails;
use crate::shared::api_utils::get_json;
use crate::shared::components::ui::Button;
use crate::system::auth::session::use_session;
use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

#[derive(Clone, PartialEq)]
enum Editing {
    None,
    New,
    Existing(String),
}

/// Vendor registry with an inline details form
#[component]
pub fn VendorList() -> impl IntoView {
    let session = use_session();
    let items = RwSignal::new(Vec::<Vendor>::new());
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(Editing::None);

    let load = move || {
        let session = session.0.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match get_json::<Vec<Vendor>>("/api/vendor", session.as_ref()).await {
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
                <h2>{Vendor::list_name()}</h2>
                <Button on_click=Callback::new(move |_| editing.set(Editing::New))>{format!("New {}", Vendor::element_name().to_lowercase())}</Button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match editing.get() {
                Editing::None => ().into_any(),
                Editing::New => view! { <VendorDetails on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
                Editing::Existing(id) => view! { <VendorDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any(),
            }}

            <table class="table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Name"</th>
                        <th>"Location"</th>
                        <th>"Services"</th>
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
                            let services = c
                                .services
                                .iter()
                                .map(|w| w.display_name())
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <tr class="table__row" on:click=move |_| editing.set(Editing::Existing(id.clone()))>
                                    <td>{c.code}</td>
                                    <td>{c.name}</td>
                                    <td>{c.address.display()}</td>
                                    <td>{services}</td>
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
