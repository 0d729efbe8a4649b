//! Element descriptions handed to a [`Surface`](crate::Surface).

use serde::{Deserialize, Serialize};

/// SVG element kinds the chart creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Nested `svg` viewport
    Svg,
    /// `rect`
    Rect,
    /// `text`
    Text,
    /// `clipPath`
    ClipPath,
}

impl ElementKind {
    /// SVG tag name.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Rect => "rect",
            Self::Text => "text",
            Self::ClipPath => "clipPath",
        }
    }

    /// Kind for a tag name (case-sensitive, as in SVG).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "svg" => Some(Self::Svg),
            "rect" => Some(Self::Rect),
            "text" => Some(Self::Text),
            "clipPath" => Some(Self::ClipPath),
            _ => None,
        }
    }
}

/// An element to create: kind, id, classes, attributes and text content.
///
/// Attributes keep insertion order; setting a name twice overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    kind: ElementKind,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub const fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
        }
    }

    /// Nested `svg`.
    #[must_use]
    pub const fn svg() -> Self {
        Self::new(ElementKind::Svg)
    }

    /// `rect`.
    #[must_use]
    pub const fn rect() -> Self {
        Self::new(ElementKind::Rect)
    }

    /// `text` with content.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ElementKind::Text).content(content)
    }

    /// `clipPath`.
    #[must_use]
    pub const fn clip_path() -> Self {
        Self::new(ElementKind::ClipPath)
    }

    /// Set the id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set an attribute. Numbers format the way SVG expects (`800`, `12.5`).
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, &value.to_string());
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Element kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Element id, if set.
    #[must_use]
    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check for a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute value by name.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Text content, if any.
    #[must_use]
    pub fn get_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Overwrite or add an attribute in place.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }
}
