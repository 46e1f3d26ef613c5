//! Search Bar Component
//!
//! Debounced text input. Keystrokes update the field immediately; the search
//! callback fires once the input has been idle for the debounce delay.
//! Enter searches right away.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_core::Debouncer;

use crate::browser::BrowserClock;
use crate::context::use_app_context;

#[component]
pub fn SearchBar(
    /// Committed search term; external changes (clear all) overwrite the field
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into, optional)] placeholder: Option<String>,
) -> impl IntoView {
    let delay = use_app_context().search_debounce;
    let text = RwSignal::new(value.get_untracked());
    let debouncer = StoredValue::new_local(Debouncer::new(delay, Rc::new(BrowserClock), move |term: String| {
        on_search.run(term)
    }));

    // `value` is usually derived from the whole filter record
    let committed = Memo::new(move |_| value.get());
    Effect::new(move |prev: Option<String>| {
        let current = committed.get();
        if let Some(next) = resync_text(prev.as_deref(), &current, &text.get_untracked()) {
            debouncer.with_value(|d| d.cancel());
            text.set(next);
        }
        current
    });

    let on_input = move |ev| {
        let term = event_target_value(&ev);
        text.set(term.clone());
        spawn_local(debouncer.with_value(|d| d.push(term)));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            debouncer.with_value(|d| d.flush(text.get_untracked()));
        }
    };

    let on_clear = move |_| {
        text.set(String::new());
        debouncer.with_value(|d| d.flush(String::new()));
    };

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder=placeholder.unwrap_or_else(|| "Search...".to_string())
                prop:value=move || text.get()
                on:input=on_input
                on:keydown=on_keydown
            />
            <Show when=move || !text.get().is_empty()>
                <button class="search-clear" title="Clear search" on:click=on_clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}

/// Field text to show after the committed term changed from `prev`.
/// `None` keeps whatever is being typed.
fn resync_text(prev: Option<&str>, committed: &str, text: &str) -> Option<String> {
    match prev {
        Some(prev) if prev != committed && text != committed => Some(committed.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_keeps_field() {
        assert_eq!(resync_text(None, "Rick", "Rick"), None);
    }

    #[test]
    fn test_unchanged_term_keeps_pending_typing() {
        // status or page changed while "Rick" is still debouncing
        assert_eq!(resync_text(Some(""), "", "Rick"), None);
        assert_eq!(resync_text(Some("Morty"), "Morty", "Morty Sm"), None);
    }

    #[test]
    fn test_own_search_settling_is_a_no_op() {
        assert_eq!(resync_text(Some(""), "Rick", "Rick"), None);
    }

    #[test]
    fn test_clear_all_overwrites_field() {
        assert_eq!(resync_text(Some("Rick"), "", "Rick"), Some(String::new()));
        assert_eq!(resync_text(Some("Rick"), "", "Rick San"), Some(String::new()));
    }
}
