//! Element classification over whole documents.

use c4lint_core::{
    document::DiagramDocument,
    element::{Category, ElementKind, GraphElement},
};

/// The bucket an element is reported under.
pub fn classify(element: &GraphElement) -> Category {
    element.kind().category()
}

/// Returns `true` if at least one element carries a C4 attribute.
///
/// Documents failing this test were never meant to be C4 diagrams and are
/// skipped by every downstream analysis.
pub fn is_c4_model(document: &DiagramDocument) -> bool {
    document.elements().iter().any(GraphElement::has_c4_attributes)
}

/// The elements of one document split by kind, each part in document order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub systems: Vec<&'a GraphElement>,
    pub actors: Vec<&'a GraphElement>,
    pub relationships: Vec<&'a GraphElement>,
    pub other: Vec<&'a GraphElement>,
    pub untyped: Vec<&'a GraphElement>,
}

impl Partition<'_> {
    /// Number of elements that take part in the C4 model.
    pub fn c4_count(&self) -> usize {
        self.systems.len() + self.actors.len() + self.relationships.len() + self.other.len()
    }
}

/// Splits the elements of `document` by kind.
pub fn partition(document: &DiagramDocument) -> Partition<'_> {
    let mut partition = Partition::default();
    for element in document.elements() {
        let part = match element.kind() {
            ElementKind::System => &mut partition.systems,
            ElementKind::Actor => &mut partition.actors,
            ElementKind::Relationship => &mut partition.relationships,
            ElementKind::Other => &mut partition.other,
            ElementKind::Untyped => &mut partition.untyped,
        };
        part.push(element);
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> DiagramDocument {
        DiagramDocument::new(
            "d",
            vec![
                GraphElement::new("s").with_attribute("c4Type", "Software System"),
                GraphElement::new("p").with_attribute("c4Type", " Person "),
                GraphElement::new("r").with_attribute("c4Type", "Relationship"),
                GraphElement::new("c").with_attribute("c4Type", "Container"),
                GraphElement::new("n").with_attribute("c4Name", "No type"),
                GraphElement::new("u").with_attribute("label", "Note"),
            ],
        )
    }

    #[test]
    fn test_classify() {
        let document = document();
        let categories: Vec<_> = document.elements().iter().map(classify).collect();
        assert_eq!(
            categories,
            [
                Category::System,
                Category::Actor,
                Category::Relationship,
                Category::Other,
                Category::Other,
                Category::Other,
            ]
        );
    }

    #[test]
    fn test_partition() {
        let document = document();
        let partition = partition(&document);
        assert_eq!(partition.systems.len(), 1);
        assert_eq!(partition.actors.len(), 1);
        assert_eq!(partition.relationships.len(), 1);
        assert_eq!(partition.other.len(), 2);
        assert_eq!(partition.untyped[0].id(), "u");
        assert_eq!(partition.c4_count(), 5);
    }

    #[test]
    fn test_is_c4_model() {
        assert!(is_c4_model(&document()));
        assert!(!is_c4_model(&DiagramDocument::new("d", Vec::new())));
        assert!(!is_c4_model(&DiagramDocument::new(
            "d",
            vec![GraphElement::new("u").with_attribute("label", "c4Name")],
        )));
    }
}
