//! Test harness for salesmap charts.

use crate::selector::Selector;
use salesmap_core::{Event, Point, TreeNode};
use salesmap_widgets::{
    render_chart, Element, InfoField, RenderError, RenderSummary, Scene, SceneNodeId,
    SceneTooltip, SharedTooltip,
};
use salesmap_yaml::ChartConfig;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// A chart rendered into memory, ready for queries and hover simulation.
pub struct Harness {
    /// Rendered element tree
    scene: Scene,
    /// Tooltip the hover handlers drive
    tooltip: Rc<RefCell<SceneTooltip>>,
    /// Result of the render
    summary: RenderSummary,
}

impl Harness {
    /// Render `root` with the default configuration.
    pub fn render(root: &TreeNode) -> Result<Self, RenderError> {
        Self::render_with(&ChartConfig::default(), root)
    }

    /// Render `root` with `config`.
    pub fn render_with(config: &ChartConfig, root: &TreeNode) -> Result<Self, RenderError> {
        let mut scene = Scene::new(Element::svg().id(config.anchors.surface.as_str()));
        let target = scene.root();
        let tooltip = Rc::new(RefCell::new(SceneTooltip::new()));
        let shared: SharedTooltip = tooltip.clone();
        let summary = render_chart(config, root, &mut scene, &target, shared)?;
        Ok(Self {
            scene,
            tooltip,
            summary,
        })
    }

    /// The rendered scene.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// What the render reported.
    #[must_use]
    pub const fn summary(&self) -> &RenderSummary {
        &self.summary
    }

    /// Current tooltip state.
    #[must_use]
    pub fn tooltip(&self) -> Ref<'_, SceneTooltip> {
        self.tooltip.borrow()
    }

    // === Event Simulation ===

    /// Move the pointer onto the first element matching `selector` at page
    /// position `at`.
    ///
    /// # Panics
    ///
    /// Panics if nothing matches or a handler fails.
    pub fn hover(&mut self, selector: &str, at: Point) -> &mut Self {
        self.dispatch(selector, &Event::PointerEnter { position: at });
        self
    }

    /// Move the pointer off the first element matching `selector`.
    ///
    /// # Panics
    ///
    /// Panics if nothing matches or a handler fails.
    pub fn unhover(&mut self, selector: &str) -> &mut Self {
        self.dispatch(selector, &Event::PointerLeave);
        self
    }

    fn dispatch(&self, selector: &str, event: &Event) {
        let Some(id) = self.query(selector) else {
            panic!("No element matching '{selector}' to receive {event:?}");
        };
        if let Err(err) = self.scene.dispatch(id, event) {
            panic!("Hover handler for '{selector}' failed: {err}");
        }
    }

    // === Queries ===

    /// First element matching the selector, in document order.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<SceneNodeId> {
        let sel = Selector::parse(selector).ok()?;
        self.scene
            .descendants(self.scene.root())
            .into_iter()
            .find(|&id| sel.matches(&self.scene, id))
    }

    /// All elements matching the selector, in document order.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<SceneNodeId> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.scene
            .descendants(self.scene.root())
            .into_iter()
            .filter(|&id| sel.matches(&self.scene, id))
            .collect()
    }

    /// Attribute of the first matching element.
    #[must_use]
    pub fn attr(&self, selector: &str, name: &str) -> Option<String> {
        let id = self.query(selector)?;
        self.scene
            .element(id)
            .and_then(|el| el.get_attr(name))
            .map(str::to_string)
    }

    /// Text content of the first matching element; empty when absent.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .and_then(|id| self.scene.element(id))
            .and_then(|el| el.get_text())
            .unwrap_or_default()
            .to_string()
    }

    /// Text content of every matching element.
    #[must_use]
    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.query_all(selector)
            .into_iter()
            .filter_map(|id| self.scene.element(id))
            .filter_map(|el| el.get_text())
            .map(str::to_string)
            .collect()
    }

    /// Check if an element exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    // === Assertions ===

    /// Assert that an element exists.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected element matching '{selector}' to exist"
        );
        self
    }

    /// Assert that no element matches.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected no element matching '{selector}'"
        );
        self
    }

    /// Assert the count of matching elements.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} elements matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert an attribute value on the first matching element.
    pub fn assert_attr(&self, selector: &str, name: &str, expected: &str) -> &Self {
        let actual = self.attr(selector, name);
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "Expected {name}='{expected}' on '{selector}'"
        );
        self
    }

    /// Assert the text of the first matching element.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert the tooltip is shown.
    pub fn assert_tooltip_visible(&self) -> &Self {
        assert!(self.tooltip().is_visible(), "Expected tooltip to be visible");
        self
    }

    /// Assert the tooltip is hidden.
    pub fn assert_tooltip_hidden(&self) -> &Self {
        assert!(!self.tooltip().is_visible(), "Expected tooltip to be hidden");
        self
    }

    /// Assert the text of one tooltip line.
    pub fn assert_tooltip_info(&self, field: InfoField, expected: &str) -> &Self {
        let tooltip = self.tooltip();
        assert_eq!(
            tooltip.info(field),
            Some(expected),
            "Expected tooltip {field:?} to read '{expected}'"
        );
        self
    }

    /// Assert the tooltip's `data-value`.
    pub fn assert_tooltip_value(&self, expected: &str) -> &Self {
        let tooltip = self.tooltip();
        assert_eq!(
            tooltip.data_value(),
            Some(expected),
            "Expected tooltip data-value '{expected}'"
        );
        self
    }
}
