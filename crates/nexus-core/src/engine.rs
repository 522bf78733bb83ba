//! Ordering Engine
//!
//! Owns the authoritative link sequence and category assignments, consumes
//! drag gesture events, and exposes grouped read-only views. All mutation of
//! the collections goes through this type; the presentation layer only reads.
//!
//! Gesture model: `drag_start` opens a gesture, any number of `drag_over`
//! events may eagerly reassign the active link's category (live feedback),
//! and `drag_end` resolves the sequence position and commits. Category
//! reassignment made during the gesture is kept even when the drop is
//! cancelled; only position is resolved at drop time.

use crate::entity::Entity;
use crate::model::{normalize_url, Category, CustomTheme, DashboardState, LinkItem, Theme};
use crate::transfer::ImportDocument;

/// Find an entity by string id
fn find_entity<'a, T: Entity<Id = String>>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// What a drop-target id resolves to. Resolved once per gesture event so the
/// handlers branch on a tag instead of scattering existence checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropKind<'a> {
    Link(&'a LinkItem),
    Category(&'a Category),
    Unknown,
}

/// One category with its links in global-sequence order. Owned snapshot,
/// safe to hand to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryGroup {
    pub category: Category,
    pub links: Vec<LinkItem>,
}

/// Persistence port: invoked fire-and-forget after every committed mutation.
pub trait CommitListener: Send + Sync {
    fn on_commit(&self, state: &DashboardState);
}

#[derive(Debug, Clone, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        active_id: String,
        /// Whether a `drag_over` already reassigned the category
        reassigned: bool,
    },
}

/// The engine itself: aggregate state + drag state machine.
pub struct OrderingEngine {
    state: DashboardState,
    drag: DragState,
    edit_mode: bool,
    revision: u64,
    listener: Option<Box<dyn CommitListener>>,
}

impl OrderingEngine {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            drag: DragState::Idle,
            edit_mode: false,
            revision: 0,
            listener: None,
        }
    }

    pub fn set_listener(&mut self, listener: Box<dyn CommitListener>) {
        self.listener = Some(listener);
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Bumped on every committed mutation; lets a caller that prefers
    /// re-reading over callbacks detect commits cheaply.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn set_edit_mode(&mut self, enabled: bool) {
        self.edit_mode = enabled;
    }

    /// Id of the link currently being dragged, if any
    pub fn active_link(&self) -> Option<&str> {
        match &self.drag {
            DragState::Dragging { active_id, .. } => Some(active_id),
            DragState::Idle => None,
        }
    }

    /// Resolve a drop-target id against both collections
    pub fn resolve(&self, target_id: &str) -> DropKind<'_> {
        if let Some(link) = find_entity(&self.state.links, target_id) {
            return DropKind::Link(link);
        }
        if let Some(category) = find_entity(&self.state.categories, target_id) {
            return DropKind::Category(category);
        }
        DropKind::Unknown
    }

    // ========================
    // Drag gestures
    // ========================

    /// Open a gesture on a link. No-op unless edit mode is on, no gesture is
    /// active, and the id resolves to a live link.
    pub fn drag_start(&mut self, link_id: &str) {
        if !self.edit_mode {
            return;
        }
        if !matches!(self.drag, DragState::Idle) {
            return;
        }
        if find_entity(&self.state.links, link_id).is_none() {
            return;
        }
        self.drag = DragState::Dragging {
            active_id: link_id.to_string(),
            reassigned: false,
        };
    }

    /// Live feedback while hovering: eagerly reassign the active link's
    /// category when the pointer is over a link or category belonging to a
    /// different category. Idempotent per resulting category; never touches
    /// the sequence position.
    pub fn drag_over(&mut self, target_id: &str) {
        let active_id = match &self.drag {
            DragState::Dragging { active_id, .. } => active_id.clone(),
            DragState::Idle => return,
        };
        let new_category = match self.resolve(target_id) {
            DropKind::Link(link) if link.id != active_id => Some(link.category_id.clone()),
            DropKind::Category(category) => Some(category.id.clone()),
            _ => None,
        };
        let Some(new_category) = new_category else {
            return;
        };
        let Some(active) = self.state.links.iter_mut().find(|l| l.id == active_id) else {
            return;
        };
        if active.category_id == new_category {
            return;
        }
        active.category_id = new_category;
        if let DragState::Dragging { reassigned, .. } = &mut self.drag {
            *reassigned = true;
        }
    }

    /// Close the gesture. A target resolving to a different live link moves
    /// the active link to that link's index in the global sequence (remove
    /// then insert, shifting the elements in between). Anything else leaves
    /// position alone; category changes made by `drag_over` stand either way.
    pub fn drag_end(&mut self, target_id: Option<&str>) {
        let (active_id, reassigned) =
            match std::mem::replace(&mut self.drag, DragState::Idle) {
                DragState::Dragging { active_id, reassigned } => (active_id, reassigned),
                DragState::Idle => return,
            };
        let mut moved = false;
        if let Some(target_id) = target_id {
            if target_id != active_id {
                let old_index = self.state.links.iter().position(|l| l.id == active_id);
                let new_index = self.state.links.iter().position(|l| l.id == target_id);
                if let (Some(old_index), Some(new_index)) = (old_index, new_index) {
                    let link = self.state.links.remove(old_index);
                    self.state.links.insert(new_index, link);
                    moved = old_index != new_index;
                }
            }
        }
        if moved || reassigned {
            self.notify();
        }
    }

    // ========================
    // Derived views
    // ========================

    /// Group the global sequence by category, in category order. Pure
    /// projection, recomputed per call. With a non-empty filter, links are
    /// matched case-insensitively on title or url, and categories left empty
    /// by the filter are hidden unless `include_empty` is set (edit mode
    /// keeps the structure visible).
    pub fn grouped_by_category(&self, filter: &str, include_empty: bool) -> Vec<CategoryGroup> {
        let needle = filter.trim().to_lowercase();
        self.state
            .categories
            .iter()
            .filter_map(|category| {
                let links: Vec<LinkItem> = self
                    .state
                    .links
                    .iter()
                    .filter(|l| l.category_id == category.id)
                    .filter(|l| {
                        needle.is_empty()
                            || l.title.to_lowercase().contains(&needle)
                            || l.url.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect();
                if links.is_empty() && !needle.is_empty() && !include_empty {
                    None
                } else {
                    Some(CategoryGroup {
                        category: category.clone(),
                        links,
                    })
                }
            })
            .collect()
    }

    // ========================
    // Categories
    // ========================

    pub fn add_category(&mut self, title: &str) -> String {
        let id = self.alloc_id("cat");
        self.state.categories.push(Category::new(id.clone(), title));
        self.notify();
        id
    }

    pub fn rename_category(&mut self, id: &str, title: &str) {
        if let Some(category) = self.state.categories.iter_mut().find(|c| c.id == id) {
            category.title = title.to_string();
            self.notify();
        }
    }

    /// Delete a category and every link assigned to it (cascade)
    pub fn remove_category(&mut self, id: &str) {
        let before = self.state.categories.len();
        self.state.categories.retain(|c| c.id != id);
        if self.state.categories.len() == before {
            return;
        }
        self.state.links.retain(|l| l.category_id != id);
        self.notify();
    }

    // ========================
    // Links
    // ========================

    /// Create a link in an existing category. Returns the new id, or `None`
    /// when the category reference is stale.
    pub fn add_link(
        &mut self,
        title: &str,
        url: &str,
        category_id: &str,
        icon_data: Option<String>,
    ) -> Option<String> {
        if find_entity(&self.state.categories, category_id).is_none() {
            return None;
        }
        let id = self.alloc_id("link");
        self.state.links.push(LinkItem {
            id: id.clone(),
            title: title.to_string(),
            url: normalize_url(url),
            category_id: category_id.to_string(),
            icon_data,
            clicks: 0,
        });
        self.notify();
        Some(id)
    }

    /// Update a link in place, preserving its click counter. No-op on a
    /// stale link or category id.
    pub fn update_link(
        &mut self,
        id: &str,
        title: &str,
        url: &str,
        category_id: &str,
        icon_data: Option<String>,
    ) {
        if find_entity(&self.state.categories, category_id).is_none() {
            return;
        }
        if let Some(link) = self.state.links.iter_mut().find(|l| l.id == id) {
            link.title = title.to_string();
            link.url = normalize_url(url);
            link.category_id = category_id.to_string();
            link.icon_data = icon_data;
            self.notify();
        }
    }

    pub fn remove_link(&mut self, id: &str) {
        let before = self.state.links.len();
        self.state.links.retain(|l| l.id != id);
        if self.state.links.len() < before {
            self.notify();
        }
    }

    pub fn record_click(&mut self, id: &str) {
        if let Some(link) = self.state.links.iter_mut().find(|l| l.id == id) {
            link.clicks += 1;
            self.notify();
        }
    }

    pub fn reset_clicks(&mut self, id: &str) {
        if let Some(link) = self.state.links.iter_mut().find(|l| l.id == id) {
            link.clicks = 0;
            self.notify();
        }
    }

    // ========================
    // Page chrome
    // ========================

    pub fn set_title(&mut self, title: &str) {
        if self.state.title != title {
            self.state.title = title.to_string();
            self.notify();
        }
    }

    pub fn set_subtitle(&mut self, subtitle: &str) {
        if self.state.subtitle != subtitle {
            self.state.subtitle = subtitle.to_string();
            self.notify();
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.state.theme != theme {
            self.state.theme = theme;
            self.notify();
        }
    }

    pub fn set_custom_theme(&mut self, custom: CustomTheme) {
        if self.state.custom_theme != custom {
            self.state.custom_theme = custom;
            self.notify();
        }
    }

    pub fn set_note(&mut self, note: &str) {
        if self.state.note != note {
            self.state.note = note.to_string();
            self.notify();
        }
    }

    // ========================
    // Wholesale replacement
    // ========================

    /// Adopt previously persisted state (initial load). Does NOT commit:
    /// loading must not immediately write back.
    pub fn replace_state(&mut self, state: DashboardState) {
        self.state = state;
        self.drag = DragState::Idle;
    }

    /// Apply a validated import document: collections are replaced
    /// wholesale, optional fields fall back to current values.
    pub fn apply_import(&mut self, doc: ImportDocument) {
        self.state.categories = doc.categories;
        self.state.links = doc.links;
        if let Some(title) = doc.title {
            self.state.title = title;
        }
        if let Some(subtitle) = doc.subtitle {
            self.state.subtitle = subtitle;
        }
        if let Some(theme) = doc.theme {
            self.state.custom_theme = theme;
        }
        if let Some(mode) = doc.mode {
            self.state.theme = mode;
        }
        self.drag = DragState::Idle;
        self.notify();
    }

    // ========================
    // Internals
    // ========================

    /// Allocate `prefix_N` with N one past the highest numeric suffix in
    /// either collection. Monotonic for the lifetime of the dataset, so ids
    /// are never reused even after deletions.
    fn alloc_id(&self, prefix: &str) -> String {
        let next = self
            .state
            .categories
            .iter()
            .map(|c| c.id.as_str())
            .chain(self.state.links.iter().map(|l| l.id.as_str()))
            .filter_map(|id| {
                id.strip_prefix(prefix)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .and_then(|n| n.parse::<u64>().ok())
            })
            .max()
            .map_or(1, |n| n + 1);
        format!("{}_{}", prefix, next)
    }

    fn notify(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        if let Some(listener) = &self.listener {
            listener.on_commit(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, DashboardState, LinkItem};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn make_state() -> DashboardState {
        DashboardState {
            categories: vec![
                Category::new("c1", "Work"),
                Category::new("c2", "Play"),
            ],
            links: vec![
                LinkItem::new("l1", "Mail", "https://mail.example.com", "c1"),
                LinkItem::new("l2", "Code", "https://code.example.com", "c1"),
                LinkItem::new("l3", "Video", "https://video.example.com", "c2"),
            ],
            ..Default::default()
        }
    }

    fn make_engine() -> OrderingEngine {
        let mut engine = OrderingEngine::new(make_state());
        engine.set_edit_mode(true);
        engine
    }

    fn ids(engine: &OrderingEngine) -> Vec<&str> {
        engine.state().links.iter().map(|l| l.id.as_str()).collect()
    }

    fn category_of<'a>(engine: &'a OrderingEngine, id: &str) -> &'a str {
        &engine
            .state()
            .links
            .iter()
            .find(|l| l.id == id)
            .unwrap()
            .category_id
    }

    struct CountingListener(Arc<AtomicUsize>);

    impl CommitListener for CountingListener {
        fn on_commit(&self, _state: &DashboardState) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_drag_moves_link_to_target_index() {
        // [A,B,C,D]: dragging A onto C yields [B,C,A,D]
        let mut engine = OrderingEngine::new(DashboardState {
            categories: vec![Category::new("c1", "Work")],
            links: vec![
                LinkItem::new("a", "A", "https://a", "c1"),
                LinkItem::new("b", "B", "https://b", "c1"),
                LinkItem::new("c", "C", "https://c", "c1"),
                LinkItem::new("d", "D", "https://d", "c1"),
            ],
            ..Default::default()
        });
        engine.set_edit_mode(true);
        engine.drag_start("a");
        engine.drag_end(Some("c"));
        assert_eq!(ids(&engine), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_drag_moves_link_up_as_well() {
        let mut engine = make_engine();
        engine.drag_start("l3");
        engine.drag_end(Some("l1"));
        assert_eq!(ids(&engine), vec!["l3", "l1", "l2"]);
    }

    #[test]
    fn test_cross_category_drop_scenario() {
        // The full gesture: l1 hovers over l3 (different category), then
        // drops on it. Category and position both follow the target.
        let mut engine = make_engine();
        engine.drag_start("l1");
        engine.drag_over("l3");
        engine.drag_end(Some("l3"));
        assert_eq!(category_of(&engine, "l1"), "c2");
        assert_eq!(ids(&engine), vec!["l2", "l3", "l1"]);
    }

    #[test]
    fn test_self_drop_is_noop() {
        let mut engine = make_engine();
        let before = engine.state().clone();
        engine.drag_start("l1");
        engine.drag_end(Some("l1"));
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.revision(), 0);
    }

    #[test]
    fn test_cancel_keeps_category_but_not_position() {
        let mut engine = make_engine();
        engine.drag_start("l1");
        engine.drag_over("l3");
        engine.drag_end(None);
        // category reassignment from the hover stands, the sequence does not move
        assert_eq!(category_of(&engine, "l1"), "c2");
        assert_eq!(ids(&engine), vec!["l1", "l2", "l3"]);
        // and the gesture still committed exactly once
        assert_eq!(engine.revision(), 1);
    }

    #[test]
    fn test_drag_over_category_target() {
        let mut engine = make_engine();
        engine.drag_start("l1");
        engine.drag_over("c2");
        assert_eq!(category_of(&engine, "l1"), "c2");
        // position untouched by drag_over
        assert_eq!(ids(&engine), vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_drag_over_is_idempotent() {
        let mut engine = make_engine();
        engine.drag_start("l1");
        engine.drag_over("l3");
        let snapshot = engine.state().clone();
        engine.drag_over("l3");
        engine.drag_over("c2");
        assert_eq!(engine.state(), &snapshot);
    }

    #[test]
    fn test_last_drag_over_wins() {
        let mut engine = make_engine();
        engine.drag_start("l3");
        engine.drag_over("l1");
        assert_eq!(category_of(&engine, "l3"), "c1");
        engine.drag_over("c2");
        assert_eq!(category_of(&engine, "l3"), "c2");
        engine.drag_end(None);
        assert_eq!(category_of(&engine, "l3"), "c2");
    }

    #[test]
    fn test_gestures_preserve_link_set() {
        let mut engine = make_engine();
        engine.drag_start("l2");
        engine.drag_over("c2");
        engine.drag_over("l3");
        engine.drag_end(Some("l3"));
        engine.drag_start("l3");
        engine.drag_end(None);
        engine.drag_start("l1");
        engine.drag_over("missing");
        engine.drag_end(Some("gone"));
        let mut sorted = ids(&engine);
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_category_references_stay_live() {
        let mut engine = make_engine();
        engine.drag_start("l1");
        engine.drag_over("l3");
        engine.drag_end(Some("l2"));
        for link in &engine.state().links {
            assert!(
                engine.state().categories.iter().any(|c| c.id == link.category_id),
                "link {} points at a dead category",
                link.id
            );
        }
    }

    #[test]
    fn test_drag_requires_edit_mode() {
        let mut engine = OrderingEngine::new(make_state());
        engine.drag_start("l1");
        assert_eq!(engine.active_link(), None);
        engine.drag_end(Some("l3"));
        assert_eq!(ids(&engine), vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_stale_ids_are_silent() {
        let mut engine = make_engine();
        engine.drag_start("nope");
        assert_eq!(engine.active_link(), None);
        engine.drag_start("l1");
        engine.drag_over("nope");
        assert_eq!(category_of(&engine, "l1"), "c1");
        // unresolvable drop target: treated as absent, hover result kept
        engine.drag_over("l3");
        engine.drag_end(Some("vanished"));
        assert_eq!(category_of(&engine, "l1"), "c2");
        assert_eq!(ids(&engine), vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_drop_on_category_id_keeps_position() {
        let mut engine = make_engine();
        engine.drag_start("l1");
        engine.drag_over("c2");
        engine.drag_end(Some("c2"));
        assert_eq!(category_of(&engine, "l1"), "c2");
        assert_eq!(ids(&engine), vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_second_drag_start_is_ignored_while_dragging() {
        let mut engine = make_engine();
        engine.drag_start("l1");
        engine.drag_start("l2");
        assert_eq!(engine.active_link(), Some("l1"));
        engine.drag_end(None);
    }

    #[test]
    fn test_cascading_category_delete() {
        let mut engine = make_engine();
        engine.remove_category("c1");
        assert_eq!(engine.state().categories.len(), 1);
        assert_eq!(ids(&engine), vec!["l3"]);
        // unknown id: nothing happens, nothing commits
        let revision = engine.revision();
        engine.remove_category("c9");
        assert_eq!(engine.revision(), revision);
    }

    #[test]
    fn test_grouped_view_is_pure() {
        let engine = make_engine();
        let first = engine.grouped_by_category("", false);
        let second = engine.grouped_by_category("", false);
        assert_eq!(first, second);
        assert_eq!(engine.state(), &make_state());
        assert_eq!(engine.revision(), 0);
    }

    #[test]
    fn test_grouped_view_orders_by_global_sequence() {
        let mut engine = make_engine();
        engine.drag_start("l2");
        engine.drag_end(Some("l1"));
        let groups = engine.grouped_by_category("", false);
        assert_eq!(groups[0].category.id, "c1");
        let order: Vec<&str> = groups[0].links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(order, vec!["l2", "l1"]);
    }

    #[test]
    fn test_grouped_view_filter_hides_empty_categories() {
        let engine = make_engine();
        let groups = engine.grouped_by_category("video", false);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category.id, "c2");
        // edit mode keeps the structure visible
        let with_structure = engine.grouped_by_category("video", true);
        assert_eq!(with_structure.len(), 2);
        assert!(with_structure[0].links.is_empty());
    }

    #[test]
    fn test_grouped_view_without_filter_shows_empty_categories() {
        let mut engine = make_engine();
        engine.add_category("Fresh");
        let groups = engine.grouped_by_category("", false);
        assert_eq!(groups.len(), 3);
        assert!(groups[2].links.is_empty());
    }

    #[test]
    fn test_grouped_view_filter_matches_url() {
        let engine = make_engine();
        let groups = engine.grouped_by_category("CODE.EXAMPLE", false);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].links[0].id, "l2");
    }

    #[test]
    fn test_add_link_normalizes_url() {
        let mut engine = make_engine();
        let id = engine.add_link("Docs", "docs.example.com", "c1", None).unwrap();
        let link = engine.state().links.iter().find(|l| l.id == id).unwrap();
        assert_eq!(link.url, "https://docs.example.com");
    }

    #[test]
    fn test_add_link_rejects_stale_category() {
        let mut engine = make_engine();
        assert!(engine.add_link("Docs", "docs.example.com", "c9", None).is_none());
        assert_eq!(engine.state().links.len(), 3);
    }

    #[test]
    fn test_update_link_preserves_clicks() {
        let mut engine = make_engine();
        engine.record_click("l1");
        engine.record_click("l1");
        engine.update_link("l1", "Inbox", "mail.example.com", "c2", None);
        let link = engine.state().links.iter().find(|l| l.id == "l1").unwrap();
        assert_eq!(link.clicks, 2);
        assert_eq!(link.title, "Inbox");
        assert_eq!(link.url, "https://mail.example.com");
        assert_eq!(link.category_id, "c2");
    }

    #[test]
    fn test_clicks_increment_and_reset() {
        let mut engine = make_engine();
        engine.record_click("l2");
        assert_eq!(engine.state().links[1].clicks, 1);
        engine.reset_clicks("l2");
        assert_eq!(engine.state().links[1].clicks, 0);
    }

    #[test]
    fn test_alloc_id_skips_existing_suffixes() {
        let mut engine = make_engine();
        let first = engine.add_category("One");
        let second = engine.add_category("Two");
        assert_eq!(first, "cat_1");
        assert_eq!(second, "cat_2");

        // starter content already uses link_1..link_3
        let mut engine = OrderingEngine::new(DashboardState::starter());
        let link = engine.add_link("L", "l.example.com", "cat_1", None).unwrap();
        assert_eq!(link, "link_4");
    }

    #[test]
    fn test_listener_fires_once_per_commit() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut engine = make_engine();
        engine.set_listener(Box::new(CountingListener(counter.clone())));

        // a no-op gesture does not commit
        engine.drag_start("l1");
        engine.drag_end(Some("l1"));
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        // a full gesture commits exactly once, regardless of hover count
        engine.drag_start("l1");
        engine.drag_over("l3");
        engine.drag_over("c2");
        engine.drag_end(Some("l3"));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        engine.rename_category("c1", "Deep Work");
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_replace_state_does_not_commit() {
        let mut engine = make_engine();
        engine.replace_state(DashboardState::starter());
        assert_eq!(engine.revision(), 0);
        assert_eq!(engine.state().links.len(), 3);
    }
}
