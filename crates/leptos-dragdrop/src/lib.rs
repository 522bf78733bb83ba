//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag. Link cards are
//! draggable; both link cards and category zones are droppable.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Debug, PartialEq)]
pub enum DropTarget {
    /// Drop on another link card (take over its sequence position)
    Link(String),
    /// Drop on a category zone (arrive in that category)
    Category(String),
}

impl DropTarget {
    pub fn id(&self) -> &str {
        match self {
            DropTarget::Link(id) | DropTarget::Category(id) => id,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Gate: dragging only arms while this is true (edit mode)
    pub enabled: RwSignal<bool>,
    pub dragging_id: RwSignal<Option<String>>,
    pub drop_target: RwSignal<Option<DropTarget>>,
    /// Briefly true after a drop so click handlers can ignore the release
    pub drag_just_ended: RwSignal<bool>,
    /// Pending card id (mousedown but not yet dragging)
    pub pending_id: RwSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x: RwSignal<i32>,
    pub start_y: RwSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        enabled: RwSignal::new(false),
        dragging_id: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending_id: RwSignal::new(None),
        start_x: RwSignal::new(0),
        start_y: RwSignal::new(0),
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id.set(None);
    dnd.drop_target.set(None);
    dnd.pending_id.set(None);
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards.
/// Records a pending drag with its start position; inert unless enabled.
pub fn make_on_mousedown(dnd: DndSignals, link_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if !dnd.enabled.get_untracked() {
            return;
        }
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id.set(Some(link_id.clone()));
            dnd.start_x.set(ev.client_x());
            dnd.start_y.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id.get_untracked().is_none() {
            let start_x = dnd.start_x.get_untracked();
            let start_y = dnd.start_y.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for link cards (take over their position)
pub fn make_on_link_mouseenter(dnd: DndSignals, link_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id.get_untracked() {
            // Don't allow dropping on self
            if dragging != link_id {
                dnd.drop_target.set(Some(DropTarget::Link(link_id.clone())));
            }
        }
    }
}

/// Create mouseenter handler for category zones
pub fn make_on_category_mouseenter(dnd: DndSignals, category_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.get_untracked().is_some() {
            dnd.drop_target.set(Some(DropTarget::Category(category_id.clone())));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.get_untracked().is_some() {
            dnd.drop_target.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection. The callback always fires
/// for a real drag: with `Some(target)` for a drop on a registered target,
/// with `None` for a release outside any target (cancelled drop).
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, Option<DropTarget>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id.get_untracked();
        let drop_target = dnd.drop_target.get_untracked();

        // Clear pending state first
        dnd.pending_id.set(None);

        // If we were actually dragging (not just clicking)
        if let Some(dragged) = dragging_id {
            end_drag(&dnd);
            on_drop(dragged, drop_target);
        } else {
            // Not dragging - just end any pending state
            end_drag(&dnd);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
