//! DOM-backed [`Surface`] and [`TooltipView`].

use super::events::{mouse_event_to_salesmap, HOVER_EVENTS};
use salesmap_widgets::{
    Element as ChartElement, HoverHandler, InfoField, Surface, SurfaceError, TooltipView,
};
use salesmap_yaml::Anchors;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Best-effort text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Look up a host page element by id.
pub fn find_anchor(document: &Document, id: &str) -> Result<Element, SurfaceError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::MissingAnchor(id.to_string()))
}

/// Builds SVG elements in a document.
///
/// The listener closures live as long as the surface; dropping it detaches
/// hover behaviour from everything it drew.
pub struct DomSurface {
    document: Document,
    listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl DomSurface {
    /// Create a surface over `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Vec::new(),
        }
    }

    /// Number of hover listeners attached so far.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn create(&self, element: &ChartElement) -> Result<Element, SurfaceError> {
        let tag = element.kind().tag();
        let node = self
            .document
            .create_element_ns(Some(SVG_NS), tag)
            .map_err(|e| SurfaceError::CreateElement {
                tag: tag.to_string(),
                message: js_message(&e),
            })?;
        if let Some(id) = element.get_id() {
            node.set_id(id);
        }
        if !element.classes().is_empty() {
            set(&node, "class", &element.classes().join(" "))?;
        }
        for (name, value) in element.attrs() {
            set(&node, name, value)?;
        }
        if let Some(text) = element.get_text() {
            node.set_text_content(Some(text));
        }
        Ok(node)
    }
}

fn set(node: &Element, name: &str, value: &str) -> Result<(), SurfaceError> {
    node.set_attribute(name, value)
        .map_err(|e| SurfaceError::Attribute {
            name: name.to_string(),
            message: js_message(&e),
        })
}

impl Surface for DomSurface {
    type Node = Element;

    fn append(&mut self, parent: &Element, element: ChartElement) -> Result<Element, SurfaceError> {
        let node = self.create(&element)?;
        parent
            .append_child(&node)
            .map_err(|e| SurfaceError::CreateElement {
                tag: element.kind().tag().to_string(),
                message: js_message(&e),
            })?;
        Ok(node)
    }

    fn set_attribute(
        &mut self,
        node: &Element,
        name: &str,
        value: &str,
    ) -> Result<(), SurfaceError> {
        set(node, name, value)
    }

    fn clear(&mut self, node: &Element) -> Result<(), SurfaceError> {
        node.set_inner_html("");
        Ok(())
    }

    fn on_hover(&mut self, node: &Element, handler: Rc<HoverHandler>) -> Result<(), SurfaceError> {
        for kind in HOVER_EVENTS {
            let handler = Rc::clone(&handler);
            let cb = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                let Some(event) = mouse_event_to_salesmap(&e) else {
                    return;
                };
                if let Err(err) = handler.handle(&event) {
                    log::warn!("tooltip update for '{}' failed: {err}", handler.datum().name);
                }
            });
            node.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
                .map_err(|e| SurfaceError::Listener(js_message(&e)))?;
            self.listeners.push(cb);
        }
        Ok(())
    }
}

/// The host page tooltip: a container plus three text targets.
pub struct DomTooltip {
    container: HtmlElement,
    name: Element,
    category: Element,
    value: Element,
}

impl DomTooltip {
    /// Bind to the tooltip elements named in `anchors`.
    pub fn from_anchors(document: &Document, anchors: &Anchors) -> Result<Self, SurfaceError> {
        let container = find_anchor(document, &anchors.tooltip)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SurfaceError::Attribute {
                name: "style".to_string(),
                message: format!("#{} is not an HTML element", anchors.tooltip),
            })?;
        Ok(Self {
            container,
            name: find_anchor(document, &anchors.info_name)?,
            category: find_anchor(document, &anchors.info_category)?,
            value: find_anchor(document, &anchors.info_value)?,
        })
    }
}

impl TooltipView for DomTooltip {
    fn set_style(&mut self, property: &str, value: &str) -> Result<(), SurfaceError> {
        self.container
            .style()
            .set_property(property, value)
            .map_err(|e| SurfaceError::Attribute {
                name: property.to_string(),
                message: js_message(&e),
            })
    }

    fn set_data_value(&mut self, value: &str) -> Result<(), SurfaceError> {
        set(&self.container, "data-value", value)
    }

    fn set_info(&mut self, field: InfoField, text: &str) -> Result<(), SurfaceError> {
        let target = match field {
            InfoField::Name => &self.name,
            InfoField::Category => &self.category,
            InfoField::Value => &self.value,
        };
        target.set_text_content(Some(text));
        Ok(())
    }
}
