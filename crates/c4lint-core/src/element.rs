//! Graph elements and their C4 classification.
//!
//! A [`GraphElement`] is one `object` wrapper decoded from a diagram: a shape
//! or an edge carrying an ordered bag of string attributes. Its
//! [`ElementKind`] is derived from the declared `c4Type` tag and is never
//! stored.

use std::fmt;

use indexmap::IndexMap;

use crate::attribute;

/// One node or edge of a decoded diagram.
///
/// Attributes keep their document order, which is also the order used when
/// an element is described in a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphElement {
    id: String,
    attributes: IndexMap<String, String>,
    source: Option<String>,
    target: Option<String>,
}

impl GraphElement {
    /// Creates an element with the given identifier and no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: IndexMap::new(),
            source: None,
            target: None,
        }
    }

    /// Adds an attribute, replacing any previous value for `key`.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets the edge endpoints of this element.
    pub fn with_endpoints(mut self, source: Option<String>, target: Option<String>) -> Self {
        self.source = source;
        self.target = target;
        self
    }

    /// The identifier, unique within its document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// The raw value of an attribute, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The value of an attribute if it is present and not blank.
    pub fn non_blank(&self, key: &str) -> Option<&str> {
        self.attribute(key).filter(|value| !value.trim().is_empty())
    }

    /// The declared `c4Type` tag, trimmed. `Some("")` for a blank tag.
    pub fn declared_type(&self) -> Option<&str> {
        self.attribute(attribute::TYPE).map(str::trim)
    }

    /// The declared `c4Name`, if not blank.
    pub fn name(&self) -> Option<&str> {
        self.non_blank(attribute::NAME)
    }

    /// The `c4Description`, if not blank.
    pub fn description(&self) -> Option<&str> {
        self.non_blank(attribute::DESCRIPTION)
    }

    /// The `c4Technology`, if not blank.
    pub fn technology(&self) -> Option<&str> {
        self.non_blank(attribute::TECHNOLOGY)
    }

    /// The free-text label shown on the canvas, if not blank.
    pub fn label(&self) -> Option<&str> {
        self.non_blank("label")
    }

    /// Identifier of the element this edge starts at.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref().filter(|id| !id.is_empty())
    }

    /// Identifier of the element this edge ends at.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns `true` if any attribute name belongs to the C4 vocabulary.
    pub fn has_c4_attributes(&self) -> bool {
        self.attributes.keys().any(|key| attribute::is_c4_attribute(key))
    }

    /// Classifies this element.
    pub fn kind(&self) -> ElementKind {
        ElementKind::of(self)
    }
}

/// Classification of a [`GraphElement`].
///
/// The variants are exhaustive: every element is exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `c4Type` is `Software System`.
    System,
    /// `c4Type` is `Person`.
    Actor,
    /// `c4Type` is `Relationship`.
    Relationship,
    /// Any other tag, a blank tag, or C4 attributes without a tag.
    Other,
    /// No C4 attributes at all.
    Untyped,
}

impl ElementKind {
    /// Classifies an element by its declared type tag.
    ///
    /// An element without a `c4Type` attribute is [`ElementKind::Other`] when
    /// it still carries some C4 attribute, and [`ElementKind::Untyped`]
    /// otherwise.
    pub fn of(element: &GraphElement) -> Self {
        match element.declared_type() {
            Some(attribute::RELATIONSHIP_TAG) => ElementKind::Relationship,
            Some(attribute::SOFTWARE_SYSTEM_TAG) => ElementKind::System,
            Some(attribute::PERSON_TAG) => ElementKind::Actor,
            Some(_) => ElementKind::Other,
            None if element.has_c4_attributes() => ElementKind::Other,
            None => ElementKind::Untyped,
        }
    }

    /// Returns `true` for every kind that takes part in a C4 model.
    pub fn is_c4(self) -> bool {
        !matches!(self, ElementKind::Untyped)
    }

    /// The report bucket findings about this kind of element go to.
    pub fn category(self) -> Category {
        match self {
            ElementKind::System => Category::System,
            ElementKind::Actor => Category::Actor,
            ElementKind::Relationship => Category::Relationship,
            ElementKind::Other | ElementKind::Untyped => Category::Other,
        }
    }
}

/// A report bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    System,
    Actor,
    Relationship,
    Other,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::System,
        Category::Actor,
        Category::Relationship,
        Category::Other,
    ];

    /// Bucket heading used in rendered reports.
    pub fn heading(self) -> &'static str {
        match self {
            Category::System => "Systems",
            Category::Actor => "Actors",
            Category::Relationship => "Relationships",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(tag: &str) -> GraphElement {
        GraphElement::new("1").with_attribute("c4Type", tag)
    }

    #[test]
    fn test_kind_from_type_tag() {
        assert_eq!(typed("Relationship").kind(), ElementKind::Relationship);
        assert_eq!(typed("Software System").kind(), ElementKind::System);
        assert_eq!(typed("Person").kind(), ElementKind::Actor);
        assert_eq!(typed("Container").kind(), ElementKind::Other);
    }

    #[test]
    fn test_kind_trims_type_tag() {
        assert_eq!(typed("  Software System ").kind(), ElementKind::System);
    }

    #[test]
    fn test_blank_type_tag_is_other() {
        assert_eq!(typed("   ").kind(), ElementKind::Other);
    }

    #[test]
    fn test_untagged_element_with_c4_attributes_is_other() {
        let element = GraphElement::new("1").with_attribute("c4Name", "Billing");
        assert_eq!(element.kind(), ElementKind::Other);
    }

    #[test]
    fn test_untagged_element_without_c4_attributes_is_untyped() {
        let element = GraphElement::new("1").with_attribute("label", "Note");
        assert_eq!(element.kind(), ElementKind::Untyped);
        assert!(!element.kind().is_c4());
        assert_eq!(element.kind().category(), Category::Other);
    }

    #[test]
    fn test_non_blank_filters_whitespace() {
        let element = GraphElement::new("1")
            .with_attribute("c4Name", "  ")
            .with_attribute("c4Description", "Does things");
        assert_eq!(element.name(), None);
        assert_eq!(element.attribute("c4Name"), Some("  "));
        assert_eq!(element.description(), Some("Does things"));
    }

    #[test]
    fn test_empty_endpoints_are_absent() {
        let element =
            GraphElement::new("e").with_endpoints(Some(String::new()), Some("b".to_string()));
        assert_eq!(element.source(), None);
        assert_eq!(element.target(), Some("b"));
    }

    #[test]
    fn test_attributes_keep_document_order() {
        let element = GraphElement::new("1")
            .with_attribute("c4Type", "Person")
            .with_attribute("c4Name", "Customer")
            .with_attribute("c4Description", "Buys things");
        let keys: Vec<_> = element.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, ["c4Type", "c4Name", "c4Description"]);
    }

    #[test]
    fn test_category_heading() {
        assert_eq!(Category::System.to_string(), "Systems");
        assert_eq!(Category::Relationship.heading(), "Relationships");
    }
}
