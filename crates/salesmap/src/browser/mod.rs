//! Browser runtime: DOM surface, tooltip binding, data fetch and logging.
//!
//! Everything that touches `web_sys` is compiled for `wasm32` only; event
//! mapping is shared so it can be tested natively.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod logger;

// Cross-platform modules
pub mod events;

#[cfg(target_arch = "wasm32")]
pub use app::{mounted_surfaces, render_json, render_json_with_config, set_log_level, start};
#[cfg(target_arch = "wasm32")]
pub use dom::{DomSurface, DomTooltip};
pub use events::{pointer_event, HOVER_EVENTS};
#[cfg(target_arch = "wasm32")]
pub use logger::ConsoleLogger;
