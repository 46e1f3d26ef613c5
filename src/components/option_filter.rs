//! Filter Controls
//!
//! Exclusive single-select filters. The first option of each list carries an
//! empty value and resets that filter alone.

use leptos::prelude::*;

use catalog_core::filters::STATUS_OPTIONS;

/// Dropdown over a fixed option list (species, gender, season)
#[component]
pub fn OptionFilter(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="option-filter">
            <span class="filter-label">{label}</span>
            <select on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options
                    .iter()
                    .map(|(value, text)| {
                        let value = *value;
                        view! {
                            <option value=value prop:selected=move || selected.get() == value>
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Status buttons; clicking the active one clears it
#[component]
pub fn StatusFilter(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-buttons" role="group" aria-label="Status">
            {STATUS_OPTIONS
                .iter()
                .map(|(value, text)| {
                    let value = *value;
                    let is_active = move || selected.get().eq_ignore_ascii_case(value);
                    view! {
                        <button
                            class=move || if is_active() { "filter-button active" } else { "filter-button" }
                            aria-pressed=move || is_active().to_string()
                            on:click=move |_| {
                                let next = if is_active() && !value.is_empty() { "" } else { value };
                                on_change.run(next.to_string());
                            }
                        >
                            {*text}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
