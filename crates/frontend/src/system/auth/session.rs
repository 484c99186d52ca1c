//! Session handed explicitly to components that call the API

use chrono::Utc;
use contracts::system::auth::SessionContext;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{api, storage};

/// Current session, `None` when signed out
#[derive(Clone, Copy)]
pub struct SessionState(pub RwSignal<Option<SessionContext>>);

impl SessionState {
    /// Restore the stored session once at start
    pub fn restore() -> Self {
        let stored = storage::load_session();
        if let Some(s) = &stored {
            if s.is_expired(Utc::now()) {
                log::info!("stored session of {} has expired", s.user.username);
            }
        }
        Self(RwSignal::new(stored))
    }

    pub fn get(&self) -> Option<SessionContext> {
        self.0.get()
    }

    pub fn set(&self, session: SessionContext) {
        storage::save_session(&session);
        self.0.set(Some(session));
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.0.set(None);
    }
}

/// Hook to access the session state provided by `App`
pub fn use_session() -> SessionState {
    use_context::<SessionState>().unwrap_or_else(|| {
        log::warn!("SessionState not provided, using an empty session");
        SessionState(RwSignal::new(None))
    })
}

/// Token entry and current user display
#[component]
pub fn SessionPanel() -> impl IntoView {
    let session = use_session();
    let token = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let sign_in = move |_: leptos::ev::MouseEvent| {
        let value = token.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::fetch_session(&value).await {
                Ok(s) => {
                    error.set(None);
                    token.set(String::new());
                    session.set(s);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="session-panel">
            {move || match session.get() {
                Some(s) => {
                    let expired = s.is_expired(Utc::now());
                    view! {
                        <span class="session-panel__user">
                            {format!("{} ({:?})", s.user.username, s.role)}
                            {expired.then_some(view! { <span class="session-panel__expired">" session expired"</span> })}
                        </span>
                        <button class="button button--ghost" on:click=move |_| session.sign_out()>
                            "Sign out"
                        </button>
                    }
                    .into_any()
                }
                None => view! {
                    <input
                        class="form__input"
                        type="password"
                        placeholder="Paste access token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                    <button class="button button--primary" on:click=sign_in>
                        "Sign in"
                    </button>
                }
                .into_any(),
            }}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
