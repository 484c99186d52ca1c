use leptos::prelude::*;

/// Action button. `variant` is "primary" (default), "secondary" or "ghost".
///
/// While `busy` is true the button is disabled and marked with
/// `button--busy`, e.g. during a save request.
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_busy = move || busy.get().unwrap_or(false);
    let class = move || {
        let variant = match variant.get().as_deref() {
            Some("secondary") => "button--secondary",
            Some("ghost") => "button--ghost",
            _ => "button--primary",
        };
        if is_busy() {
            format!("button {} button--busy", variant)
        } else {
            format!("button {}", variant)
        }
    };

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get().unwrap_or(false) || is_busy()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
