//! Country -> State -> City selectors bound to an [`AddressSelection`]

use super::ui::Select;
use contracts::shared::location::{AddressSelection, LocationLevel, LocationTable};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

fn as_options(values: Vec<&'static str>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

/// Three cascading selects. Changing an ancestor clears its dependants and
/// a level stays disabled until its parent is chosen.
///
/// `errors` is read with `prefix` + level field, e.g. "address.state".
#[component]
pub fn AddressPicker(
    selection: RwSignal<AddressSelection>,
    #[prop(optional, into)]
    errors: MaybeProp<FieldErrors>,
    #[prop(optional, into)]
    prefix: MaybeProp<String>,
    /// Deepest level rendered; City by default
    #[prop(optional)]
    depth: Option<LocationLevel>,
    #[prop(optional, into)]
    shake: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let table = LocationTable::builtin();
    let depth = depth.unwrap_or(LocationLevel::City);

    let levels: Vec<LocationLevel> = [LocationLevel::Country, LocationLevel::State, LocationLevel::City]
        .into_iter()
        .filter(|l| match depth {
            LocationLevel::Country => *l == LocationLevel::Country,
            LocationLevel::State => *l != LocationLevel::City,
            LocationLevel::City => true,
        })
        .collect();

    levels
        .into_iter()
        .map(move |level| {
            let error = Signal::derive(move || {
                let key = match prefix.get() {
                    Some(p) if !p.is_empty() => format!("{}.{}", p, level.field()),
                    _ => level.field().to_string(),
                };
                errors.get().and_then(|e| e.get(&key).map(str::to_string))
            });
            view! {
                <Select
                    label=level.label().to_string()
                    value=Signal::derive(move || selection.with(|s| s.value(level).to_string()))
                    options=Signal::derive(move || selection.with(|s| as_options(s.options(&table, level))))
                    disabled=Signal::derive(move || !selection.with(|s| s.is_enabled(level)))
                    on_change=Callback::new(move |v: String| {
                        selection.update(|s| {
                            s.on_change(level, v);
                        });
                    })
                    required=required
                    error=error
                    shake=shake
                />
            }
        })
        .collect_view()
}
