//! In-memory surface and tooltip for headless rendering.

use crate::element::Element;
use crate::surface::{Surface, SurfaceError};
use crate::tooltip::{HoverHandler, InfoField, TooltipView};
use salesmap_core::Event;
use std::collections::HashMap;
use std::rc::Rc;

/// Index of a node inside a [`Scene`].
pub type SceneNodeId = usize;

/// One element of a scene with its tree links and hover handlers.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Element as created, plus later attribute updates
    pub element: Element,
    /// Parent node, `None` for the root
    pub parent: Option<SceneNodeId>,
    /// Children in creation order
    pub children: Vec<SceneNodeId>,
    handlers: Vec<Rc<HoverHandler>>,
}

impl SceneNode {
    fn new(element: Element, parent: Option<SceneNodeId>) -> Self {
        Self {
            element,
            parent,
            children: Vec::new(),
            handlers: Vec::new(),
        }
    }

    /// Hover handlers attached to this node.
    #[must_use]
    pub fn handlers(&self) -> &[Rc<HoverHandler>] {
        &self.handlers
    }
}

/// Element tree built by rendering into memory.
///
/// Cleared subtrees stay in the arena but are no longer reachable from the
/// root, so traversals never see them.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    /// Create a scene whose root is `root`.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            nodes: vec![SceneNode::new(root, None)],
        }
    }

    /// Root node id.
    #[must_use]
    pub const fn root(&self) -> SceneNodeId {
        0
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: SceneNodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: SceneNodeId) -> Result<&mut SceneNode, SurfaceError> {
        self.nodes.get_mut(id).ok_or(SurfaceError::UnknownNode(id))
    }

    /// Element of a node.
    #[must_use]
    pub fn element(&self, id: SceneNodeId) -> Option<&Element> {
        self.node(id).map(|node| &node.element)
    }

    /// All nodes reachable from `id`, `id` first, in document order.
    #[must_use]
    pub fn descendants(&self, id: SceneNodeId) -> Vec<SceneNodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(current) {
                order.push(current);
                stack.extend(node.children.iter().rev());
            }
        }
        order
    }

    /// Ancestors of `id`, nearest first.
    #[must_use]
    pub fn ancestors(&self, id: SceneNodeId) -> Vec<SceneNodeId> {
        let mut chain = Vec::new();
        let mut current = self.node(id).and_then(|node| node.parent);
        while let Some(parent) = current {
            chain.push(parent);
            current = self.node(parent).and_then(|node| node.parent);
        }
        chain
    }

    /// Deliver `event` to every handler on `id`; returns how many ran.
    pub fn dispatch(&self, id: SceneNodeId, event: &Event) -> Result<usize, SurfaceError> {
        let node = self.node(id).ok_or(SurfaceError::UnknownNode(id))?;
        for handler in &node.handlers {
            handler.handle(event)?;
        }
        Ok(node.handlers.len())
    }
}

impl Surface for Scene {
    type Node = SceneNodeId;

    fn append(&mut self, parent: &SceneNodeId, element: Element) -> Result<SceneNodeId, SurfaceError> {
        let id = self.nodes.len();
        self.node_mut(*parent)?.children.push(id);
        self.nodes.push(SceneNode::new(element, Some(*parent)));
        Ok(id)
    }

    fn set_attribute(&mut self, node: &SceneNodeId, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.node_mut(*node)?.element.set_attr(name, value);
        Ok(())
    }

    fn clear(&mut self, node: &SceneNodeId) -> Result<(), SurfaceError> {
        let children = std::mem::take(&mut self.node_mut(*node)?.children);
        for child in children {
            self.node_mut(child)?.parent = None;
        }
        Ok(())
    }

    fn on_hover(&mut self, node: &SceneNodeId, handler: Rc<HoverHandler>) -> Result<(), SurfaceError> {
        self.node_mut(*node)?.handlers.push(handler);
        Ok(())
    }
}

/// Tooltip state recorded in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneTooltip {
    styles: HashMap<String, String>,
    data_value: Option<String>,
    info: HashMap<InfoField, String>,
}

impl SceneTooltip {
    /// Create a tooltip that has never been shown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline style value.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Current `data-value` attribute.
    #[must_use]
    pub fn data_value(&self) -> Option<&str> {
        self.data_value.as_deref()
    }

    /// Text of an info line.
    #[must_use]
    pub fn info(&self, field: InfoField) -> Option<&str> {
        self.info.get(&field).map(String::as_str)
    }

    /// Whether the last toggle revealed the tooltip. A tooltip that was never
    /// shown counts as hidden.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        match (self.style("visibility"), self.style("display")) {
            (Some(visibility), _) => visibility == "visible",
            (None, Some(display)) => display != "none",
            (None, None) => false,
        }
    }
}

impl TooltipView for SceneTooltip {
    fn set_style(&mut self, property: &str, value: &str) -> Result<(), SurfaceError> {
        self.styles.insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_data_value(&mut self, value: &str) -> Result<(), SurfaceError> {
        self.data_value = Some(value.to_string());
        Ok(())
    }

    fn set_info(&mut self, field: InfoField, text: &str) -> Result<(), SurfaceError> {
        self.info.insert(field, text.to_string());
        Ok(())
    }
}
