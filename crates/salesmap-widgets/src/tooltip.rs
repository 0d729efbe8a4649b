//! Hover tooltip: the view seam and the per-leaf handler.

use crate::surface::SurfaceError;
use salesmap_core::{Event, Point};
use salesmap_yaml::TooltipConfig;
use std::cell::{RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Text lines inside the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoField {
    /// Leaf name
    Name,
    /// Leaf category, in parentheses
    Category,
    /// Leaf value
    Value,
}

/// The tooltip element as seen by hover handlers.
pub trait TooltipView {
    /// Set an inline style property (`visibility`, `left`, ...).
    fn set_style(&mut self, property: &str, value: &str) -> Result<(), SurfaceError>;

    /// Set the tooltip's `data-value` attribute.
    fn set_data_value(&mut self, value: &str) -> Result<(), SurfaceError>;

    /// Replace the text of one info line.
    fn set_info(&mut self, field: InfoField, text: &str) -> Result<(), SurfaceError>;
}

/// Tooltip view shared by every handler of one render.
pub type SharedTooltip = Rc<RefCell<dyn TooltipView>>;

/// What a leaf shows in the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafDatum {
    /// Leaf name
    pub name: String,
    /// Leaf category
    pub category: String,
    /// Leaf value
    pub value: f64,
}

impl LeafDatum {
    /// Value as written into attributes and the tooltip.
    #[must_use]
    pub fn value_text(&self) -> String {
        self.value.to_string()
    }

    /// Category line, `(category)`.
    #[must_use]
    pub fn category_text(&self) -> String {
        format!("({})", self.category)
    }
}

/// Shows and hides the tooltip for one leaf.
///
/// One handler is created per leaf and attached to the leaf rectangle and to
/// each of its labels, so hovering any of them behaves the same.
pub struct HoverHandler {
    datum: Rc<LeafDatum>,
    tooltip: SharedTooltip,
    config: TooltipConfig,
}

impl fmt::Debug for HoverHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverHandler")
            .field("datum", &self.datum)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HoverHandler {
    /// Create a handler for `datum` driving `tooltip`.
    #[must_use]
    pub fn new(datum: Rc<LeafDatum>, tooltip: SharedTooltip, config: TooltipConfig) -> Self {
        Self {
            datum,
            tooltip,
            config,
        }
    }

    /// The leaf this handler describes.
    #[must_use]
    pub fn datum(&self) -> &LeafDatum {
        &self.datum
    }

    fn view(&self) -> Result<RefMut<'_, dyn TooltipView + 'static>, SurfaceError> {
        self.tooltip
            .try_borrow_mut()
            .map_err(|_| SurfaceError::TooltipBusy)
    }

    /// Reveal the tooltip next to `page`, filled with this leaf.
    pub fn enter(&self, page: Point) -> Result<(), SurfaceError> {
        let at = page.offset(self.config.offset_x, self.config.offset_y);
        let (property, value) = self.config.toggle.shown();
        let mut view = self.view()?;
        view.set_data_value(&self.datum.value_text())?;
        view.set_style(property, value)?;
        view.set_style("left", &format!("{}px", at.x))?;
        view.set_style("top", &format!("{}px", at.y))?;
        view.set_info(InfoField::Name, &self.datum.name)?;
        view.set_info(InfoField::Category, &self.datum.category_text())?;
        view.set_info(InfoField::Value, &self.datum.value_text())
    }

    /// Hide the tooltip.
    pub fn leave(&self) -> Result<(), SurfaceError> {
        let (property, value) = self.config.toggle.hidden();
        self.view()?.set_style(property, value)
    }

    /// Dispatch a pointer event.
    pub fn handle(&self, event: &Event) -> Result<(), SurfaceError> {
        match event {
            Event::PointerEnter { position } => self.enter(*position),
            Event::PointerLeave => self.leave(),
        }
    }
}
