//! Browser event handling: maps DOM mouse events to salesmap events.

use salesmap_core::{Event, Point};

/// DOM events a hover handler listens to.
pub const HOVER_EVENTS: [&str; 2] = ["mouseover", "mouseout"];

/// Map a DOM event type and its page coordinates to an [`Event`].
///
/// `mouseover` enters, `mouseout` leaves; other types are ignored.
#[must_use]
pub fn pointer_event(event_type: &str, page_x: f64, page_y: f64) -> Option<Event> {
    match event_type {
        "mouseover" | "mouseenter" => Some(Event::PointerEnter {
            position: Point::new(page_x, page_y),
        }),
        "mouseout" | "mouseleave" => Some(Event::PointerLeave),
        _ => None,
    }
}

/// Convert a `web_sys::MouseEvent` using its page coordinates.
#[cfg(target_arch = "wasm32")]
pub fn mouse_event_to_salesmap(event: &web_sys::MouseEvent) -> Option<Event> {
    pointer_event(
        &event.type_(),
        f64::from(event.page_x()),
        f64::from(event.page_y()),
    )
}
