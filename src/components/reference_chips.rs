//! Reference Chips
//!
//! Compact links to related entities (a character's episodes). Only the
//! first `MAX_CHIPS` are shown, followed by a "+N more" marker.

use leptos::prelude::*;

use catalog_core::models::id_from_url;
use catalog_core::EntityId;

pub const MAX_CHIPS: usize = 12;

/// Split ids into the shown prefix and the hidden remainder count
pub fn visible_chips(ids: &[EntityId]) -> (&[EntityId], usize) {
    let shown = ids.len().min(MAX_CHIPS);
    (&ids[..shown], ids.len() - shown)
}

#[component]
pub fn ReferenceChips(
    urls: Vec<String>,
    /// Chip text, e.g. "Episode"
    label: &'static str,
    #[prop(into)] on_select: Callback<EntityId>,
) -> impl IntoView {
    let ids: Vec<EntityId> = urls.iter().filter_map(|url| id_from_url(url)).collect();
    let (shown, hidden) = visible_chips(&ids);

    view! {
        <div class="reference-chips">
            {shown
                .iter()
                .map(|&id| {
                    view! {
                        <button class="chip" on:click=move |_| on_select.run(id)>
                            {format!("{} {}", label, id)}
                        </button>
                    }
                })
                .collect_view()}
            <Show when=move || { hidden > 0 }>
                <span class="chip more">{format!("+{} more", hidden)}</span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lists_show_everything() {
        let ids = vec![1, 2, 3];
        assert_eq!(visible_chips(&ids), (&ids[..], 0));
    }

    #[test]
    fn test_long_lists_are_capped() {
        let ids: Vec<EntityId> = (1..=51).collect();
        let (shown, hidden) = visible_chips(&ids);
        assert_eq!(shown.len(), MAX_CHIPS);
        assert_eq!(shown[0], 1);
        assert_eq!(hidden, 39);
    }
}
