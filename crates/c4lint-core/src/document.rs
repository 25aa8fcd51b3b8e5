//! The decoded element tree of one diagram file.

use crate::element::{ElementKind, GraphElement};

/// All graph elements of one diagram file, in document order.
///
/// Created once by the decoder and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDocument {
    source: String,
    elements: Vec<GraphElement>,
}

impl DiagramDocument {
    /// Creates a document for the file identified by `source`.
    pub fn new(source: impl Into<String>, elements: Vec<GraphElement>) -> Self {
        Self {
            source: source.into(),
            elements,
        }
    }

    /// Identifier of the file this document was decoded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns a copy of this document attributed to another source.
    pub fn with_source(self, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..self
        }
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[GraphElement] {
        &self.elements
    }

    /// Elements of the given kind, in document order.
    pub fn elements_of(&self, kind: ElementKind) -> impl Iterator<Item = &GraphElement> {
        self.elements
            .iter()
            .filter(move |element| element.kind() == kind)
    }

    /// Looks up an element by identifier.
    pub fn element(&self, id: &str) -> Option<&GraphElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// Returns `true` if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
