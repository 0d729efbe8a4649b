//! Pointer events delivered to chart elements.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Hover events a tile or label reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer entered an element
    PointerEnter {
        /// Pointer position in page coordinates
        position: Point,
    },
    /// Pointer left an element
    PointerLeave,
}

impl Event {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::PointerEnter { position } => Some(*position),
            Self::PointerLeave => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let enter = Event::PointerEnter {
            position: Point::new(4.0, 2.0),
        };
        assert_eq!(enter.position(), Some(Point::new(4.0, 2.0)));
        assert_eq!(Event::PointerLeave.position(), None);
    }

    #[test]
    fn test_event_serde_tagging() {
        let json = serde_json::to_string(&Event::PointerLeave).unwrap();
        assert_eq!(json, "\"PointerLeave\"");

        let parsed: Event =
            serde_json::from_str(r#"{"PointerEnter":{"position":{"x":1.0,"y":2.0}}}"#).unwrap();
        assert_eq!(parsed.position(), Some(Point::new(1.0, 2.0)));
    }
}
