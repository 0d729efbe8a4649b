//! CSS-like selector parsing for scene queries.
//!
//! Supports:
//! - `"rect"` - by element tag
//! - `"#legend"` - by ID
//! - `".tile"` - by class
//! - `"[data-name='Wii Sports']"` - by attribute
//! - `"rect.tile[data-category='Wii']"` - compound (all must match)
//! - `"#legend text"` / `"svg > rect"` - descendant and child combinators

use salesmap_widgets::{Scene, SceneNodeId};

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by tag name (`rect`, `text`, `clipPath`, `svg`)
    Type(String),
    /// Match by ID (e.g., `#legend`)
    Id(String),
    /// Match by class (e.g., `.tile`)
    Class(String),
    /// Match by attribute (e.g., `[data-name='Tetris']`)
    Attribute { name: String, value: String },
    /// Every part matches the same element
    Compound(Vec<Selector>),
    /// Descendant combinator (e.g., `#legend text`)
    Descendant(Box<Selector>, Box<Selector>),
    /// Child combinator (e.g., `svg > rect`)
    Child(Box<Selector>, Box<Selector>),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches node `id` of `scene`.
    #[must_use]
    pub fn matches(&self, scene: &Scene, id: SceneNodeId) -> bool {
        let Some(element) = scene.element(id) else {
            return false;
        };
        match self {
            Self::Type(tag) => element.kind().tag() == tag,
            Self::Id(expected) => element.get_id() == Some(expected.as_str()),
            Self::Class(class) => element.has_class(class),
            Self::Attribute { name, value } => {
                let actual = if name == "id" {
                    element.get_id()
                } else {
                    element.get_attr(name)
                };
                actual == Some(value.as_str())
            }
            Self::Compound(parts) => parts.iter().all(|part| part.matches(scene, id)),
            Self::Descendant(ancestor, target) => {
                target.matches(scene, id)
                    && scene
                        .ancestors(id)
                        .into_iter()
                        .any(|a| ancestor.matches(scene, a))
            }
            Self::Child(parent, target) => {
                target.matches(scene, id)
                    && scene
                        .node(id)
                        .and_then(|node| node.parent)
                        .is_some_and(|p| parent.matches(scene, p))
            }
        }
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();

        if self.peek_char().is_none() {
            return Err(SelectorError::Empty);
        }

        let mut selector = self.parse_compound()?;
        loop {
            let had_space = self.skip_whitespace();
            match self.peek_char() {
                None => break,
                Some('>') => {
                    self.advance();
                    self.skip_whitespace();
                    let child = self.parse_compound()?;
                    selector = Selector::Child(Box::new(selector), Box::new(child));
                }
                Some(_) if had_space => {
                    let descendant = self.parse_compound()?;
                    selector = Selector::Descendant(Box::new(selector), Box::new(descendant));
                }
                Some(c) => return Err(SelectorError::UnexpectedChar(c)),
            }
        }
        Ok(selector)
    }

    fn parse_compound(&mut self) -> Result<Selector, SelectorError> {
        let mut parts = Vec::new();
        while let Some(c) = self.peek_char() {
            let part = match c {
                '#' => {
                    self.advance(); // Skip '#'
                    Selector::Id(self.read_identifier()?)
                }
                '.' => {
                    self.advance(); // Skip '.'
                    Selector::Class(self.read_identifier()?)
                }
                '[' => self.parse_attribute()?,
                _ if c.is_alphabetic() && parts.is_empty() => Selector::Type(self.read_identifier()?),
                _ => break,
            };
            parts.push(part);
        }

        match parts.len() {
            0 => Err(self
                .peek_char()
                .map_or(SelectorError::ExpectedIdentifier, SelectorError::UnexpectedChar)),
            1 => Ok(parts.remove(0)),
            _ => Ok(Selector::Compound(parts)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '['

        let name = self.read_until('=').trim().to_string();
        if name.is_empty() {
            return Err(SelectorError::InvalidAttribute);
        }

        self.advance(); // Skip '='

        let quote = self.peek_char().filter(|&c| c == '\'' || c == '"');
        let value = match quote {
            Some(q) => {
                self.advance();
                let value = self.read_until(q);
                if self.peek_char() != Some(q) {
                    return Err(SelectorError::UnclosedAttribute);
                }
                self.advance();
                value
            }
            None => self.read_until(']'),
        };

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        Ok(Selector::Attribute { name, value })
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until(&mut self, stop: char) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c == stop {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
        self.pos > start
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Empty selector
    Empty,
    /// Unexpected character
    UnexpectedChar(char),
    /// Expected identifier
    ExpectedIdentifier,
    /// Invalid attribute syntax
    InvalidAttribute,
    /// Unclosed attribute bracket or quote
    UnclosedAttribute,
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty selector"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character: '{c}'"),
            Self::ExpectedIdentifier => write!(f, "expected identifier"),
            Self::InvalidAttribute => write!(f, "invalid attribute syntax"),
            Self::UnclosedAttribute => write!(f, "unclosed attribute bracket"),
        }
    }
}

impl std::error::Error for SelectorError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use salesmap_widgets::{Element, Surface};

    fn attr(name: &str, value: &str) -> Selector {
        Selector::Attribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    // ===== Parsing Tests =====

    #[test]
    fn test_parse_simple() {
        assert_eq!(Selector::parse("rect").unwrap(), Selector::Type("rect".to_string()));
        assert_eq!(Selector::parse("#legend").unwrap(), Selector::Id("legend".to_string()));
        assert_eq!(Selector::parse(".tile").unwrap(), Selector::Class("tile".to_string()));
        assert_eq!(Selector::parse("  clipPath  ").unwrap(), Selector::Type("clipPath".to_string()));
    }

    #[test]
    fn test_parse_attribute_quotes() {
        assert_eq!(
            Selector::parse("[data-name='Wii Sports']").unwrap(),
            attr("data-name", "Wii Sports")
        );
        assert_eq!(
            Selector::parse("[data-name=\"Pokemon Red/Pokemon Blue\"]").unwrap(),
            attr("data-name", "Pokemon Red/Pokemon Blue")
        );
        assert_eq!(Selector::parse("[x=25]").unwrap(), attr("x", "25"));
        assert_eq!(Selector::parse("[data-name='it]s']").unwrap(), attr("data-name", "it]s"));
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(
            Selector::parse("rect.tile[data-category='Wii']").unwrap(),
            Selector::Compound(vec![
                Selector::Type("rect".to_string()),
                Selector::Class("tile".to_string()),
                attr("data-category", "Wii"),
            ])
        );
    }

    #[test]
    fn test_parse_combinators() {
        assert_eq!(
            Selector::parse("#legend text").unwrap(),
            Selector::Descendant(
                Box::new(Selector::Id("legend".to_string())),
                Box::new(Selector::Type("text".to_string()))
            )
        );
        assert_eq!(
            Selector::parse("clipPath>rect").unwrap(),
            Selector::Child(
                Box::new(Selector::Type("clipPath".to_string())),
                Box::new(Selector::Type("rect".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("@rect"), Err(SelectorError::UnexpectedChar('@')));
        assert_eq!(Selector::parse("#"), Err(SelectorError::ExpectedIdentifier));
        assert_eq!(Selector::parse("[=x]"), Err(SelectorError::InvalidAttribute));
        assert_eq!(Selector::parse("[a='x"), Err(SelectorError::UnclosedAttribute));
        assert_eq!(Selector::parse("rect >"), Err(SelectorError::ExpectedIdentifier));
    }

    #[test]
    fn test_selector_error_display() {
        assert_eq!(SelectorError::Empty.to_string(), "empty selector");
        assert_eq!(
            SelectorError::UnexpectedChar('@').to_string(),
            "unexpected character: '@'"
        );
        assert_eq!(
            SelectorError::UnclosedAttribute.to_string(),
            "unclosed attribute bracket"
        );
    }

    // ===== Matching Tests =====

    fn scene() -> (Scene, SceneNodeId, SceneNodeId, SceneNodeId) {
        let mut scene = Scene::new(Element::svg().id("graph"));
        let root = scene.root();
        let diagram = scene.append(&root, Element::svg()).unwrap();
        let tile = scene
            .append(
                &diagram,
                Element::rect().class("tile").attr("data-name", "Tetris"),
            )
            .unwrap();
        let legend = scene.append(&root, Element::svg().id("legend")).unwrap();
        let label = scene.append(&legend, Element::text("GB")).unwrap();
        (scene, tile, legend, label)
    }

    #[test]
    fn test_matches_compound() {
        let (scene, tile, _, _) = scene();
        let sel = Selector::parse("rect.tile[data-name='Tetris']").unwrap();
        assert!(sel.matches(&scene, tile));
        let other = Selector::parse("rect.tile[data-name='Tetris Attack']").unwrap();
        assert!(!other.matches(&scene, tile));
    }

    #[test]
    fn test_matches_descendant_and_child() {
        let (scene, tile, legend, label) = scene();
        let in_legend = Selector::parse("#legend text").unwrap();
        assert!(in_legend.matches(&scene, label));
        assert!(!in_legend.matches(&scene, tile));

        let graph_child = Selector::parse("#graph > svg").unwrap();
        assert!(graph_child.matches(&scene, legend));
        assert!(!Selector::parse("#graph > rect").unwrap().matches(&scene, tile));
        assert!(Selector::parse("#graph rect").unwrap().matches(&scene, tile));
    }

    #[test]
    fn test_id_attribute_alias() {
        let (scene, _, legend, _) = scene();
        assert!(Selector::parse("[id='legend']").unwrap().matches(&scene, legend));
        assert!(!Selector::parse("#legend").unwrap().matches(&scene, 999));
    }

    proptest! {
        #[test]
        fn prop_parse_never_panics(input in ".{0,40}") {
            let _ = Selector::parse(&input);
        }
    }
}
