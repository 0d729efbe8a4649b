//! The drawing target seam.
//!
//! Rendering never touches a document directly: it asks a [`Surface`] to
//! create elements under a parent node, set attributes and attach hover
//! handlers. The browser runtime implements it over the DOM; [`Scene`]
//! implements it in memory.
//!
//! [`Scene`]: crate::Scene

use crate::element::Element;
use crate::tooltip::HoverHandler;
use std::rc::Rc;
use thiserror::Error;

/// Errors raised by a surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// A host page element the chart binds to is missing.
    #[error("missing anchor element '#{0}'")]
    MissingAnchor(String),

    /// The surface could not create an element.
    #[error("failed to create <{tag}>: {message}")]
    CreateElement { tag: String, message: String },

    /// The surface rejected an attribute or style.
    #[error("failed to set '{name}': {message}")]
    Attribute { name: String, message: String },

    /// A hover listener could not be attached.
    #[error("failed to attach hover listener: {0}")]
    Listener(String),

    /// A node handle that this surface never issued.
    #[error("unknown node {0}")]
    UnknownNode(usize),

    /// The tooltip is already being updated further up the stack.
    #[error("tooltip view is busy")]
    TooltipBusy,
}

/// A drawing target that builds an element tree.
pub trait Surface {
    /// Handle to an element owned by the surface.
    type Node: Clone;

    /// Create `element` as the last child of `parent`.
    fn append(&mut self, parent: &Self::Node, element: Element) -> Result<Self::Node, SurfaceError>;

    /// Set an attribute on an existing element.
    fn set_attribute(
        &mut self,
        node: &Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), SurfaceError>;

    /// Remove every child of `node`.
    fn clear(&mut self, node: &Self::Node) -> Result<(), SurfaceError>;

    /// Route pointer enter/leave on `node` to `handler`.
    fn on_hover(&mut self, node: &Self::Node, handler: Rc<HoverHandler>) -> Result<(), SurfaceError>;
}
