use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_vendor::ui::list::VendorList;
use crate::domain::a003_order::ui::wizard::OrderWizardPage;
use crate::system::auth::session::{SessionPanel, SessionState};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    NewOrder,
    Customers,
    Vendors,
}

impl Page {
    const ALL: [Page; 3] = [Page::NewOrder, Page::Customers, Page::Vendors];

    fn title(&self) -> &'static str {
        match self {
            Page::NewOrder => "New order",
            Page::Customers => "Customers",
            Page::Vendors => "Vendors",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Session is restored once and handed to pages through context
    provide_context(SessionState::restore());

    let page = RwSignal::new(Page::NewOrder);

    view! {
        <div class="app">
            <header class="app__header">
                <nav class="app__nav">
                    {Page::ALL
                        .into_iter()
                        .map(|p| view! {
                            <button
                                type="button"
                                class=move || if page.get() == p { "app__nav-item app__nav-item--active" } else { "app__nav-item" }
                                on:click=move |_| page.set(p)
                            >
                                {p.title()}
                            </button>
                        })
                        .collect_view()}
                </nav>
                <SessionPanel />
            </header>
            <main class="app__main">
                {move || match page.get() {
                    Page::NewOrder => view! { <OrderWizardPage /> }.into_any(),
                    Page::Customers => view! { <CustomerList /> }.into_any(),
                    Page::Vendors => view! { <VendorList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
