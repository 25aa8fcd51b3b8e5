//! Per-document connectivity of software systems.
//!
//! A system is connected when its identifier appears as an endpoint of at
//! least one relationship in the same document.

use std::collections::HashSet;

use c4lint_core::{
    document::DiagramDocument,
    element::{ElementKind, GraphElement},
    finding::Finding,
};

use crate::validate::describe;

/// Endpoint identifiers referenced by the relationships of a document.
#[derive(Debug, Default)]
pub struct ConnectedSystems<'a> {
    ids: HashSet<&'a str>,
    defects: Vec<Finding>,
}

impl<'a> ConnectedSystems<'a> {
    /// Returns `true` if `id` is an endpoint of some relationship.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// All referenced endpoint identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.ids.iter().copied()
    }

    /// Relationships with a missing leg, as findings in the Relationship bucket.
    pub fn defects(&self) -> &[Finding] {
        &self.defects
    }

    /// Consumes the set, returning the relationship defects.
    pub fn into_defects(self) -> Vec<Finding> {
        self.defects
    }
}

/// Collects every endpoint referenced by a relationship of `document`.
///
/// A relationship with only one endpoint, or none, is reported as a defect
/// instead of being dropped silently.
pub fn connected_systems(document: &DiagramDocument) -> ConnectedSystems<'_> {
    let mut connected = ConnectedSystems::default();

    for relationship in document.elements_of(ElementKind::Relationship) {
        match (relationship.source(), relationship.target()) {
            (Some(source), Some(target)) => {
                connected.ids.insert(source);
                connected.ids.insert(target);
            }
            (Some(leg), None) | (None, Some(leg)) => {
                connected.ids.insert(leg);
                connected.defects.push(
                    Finding::error(format!(
                        "Relationship (id: {}) has one leg disconnected: {} end is not attached",
                        relationship.id(),
                        if relationship.source().is_some() { "target" } else { "source" },
                    ))
                    .with_context(describe(relationship)),
                );
            }
            (None, None) => {
                connected.defects.push(
                    Finding::error(format!(
                        "Relationship (id: {}) is not attached to any element",
                        relationship.id()
                    ))
                    .with_context(describe(relationship)),
                );
            }
        }
    }

    connected
}

/// One finding per software system that no relationship references.
pub fn unconnected_systems(document: &DiagramDocument) -> Vec<Finding> {
    let connected = connected_systems(document);
    unconnected_with(document, &connected)
}

pub(crate) fn unconnected_with(
    document: &DiagramDocument,
    connected: &ConnectedSystems<'_>,
) -> Vec<Finding> {
    document
        .elements_of(ElementKind::System)
        .filter(|system| !connected.contains(system.id()))
        .map(unconnected_finding)
        .collect()
}

fn unconnected_finding(system: &GraphElement) -> Finding {
    let name = system
        .name()
        .map(|name| format!(" '{name}'"))
        .unwrap_or_default();
    Finding::error(format!(
        "Software System{name} (c4Type: Software System, id: {}) is not connected by any relationship.",
        system.id()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(id: &str, name: &str) -> GraphElement {
        GraphElement::new(id)
            .with_attribute("c4Name", name)
            .with_attribute("c4Type", "Software System")
    }

    fn relationship(id: &str, source: Option<&str>, target: Option<&str>) -> GraphElement {
        GraphElement::new(id)
            .with_attribute("c4Type", "Relationship")
            .with_attribute("c4Description", "Calls")
            .with_endpoints(source.map(str::to_string), target.map(str::to_string))
    }

    #[test]
    fn test_connected_systems_collects_both_legs() {
        let document = DiagramDocument::new(
            "d",
            vec![
                system("a", "A"),
                system("b", "B"),
                relationship("r", Some("a"), Some("b")),
            ],
        );
        let connected = connected_systems(&document);
        assert!(connected.contains("a"));
        assert!(connected.contains("b"));
        assert!(connected.defects().is_empty());
        assert!(unconnected_systems(&document).is_empty());
    }

    #[test]
    fn test_one_leg_disconnected_is_a_defect() {
        let document = DiagramDocument::new(
            "d",
            vec![system("a", "A"), relationship("r", Some("a"), None)],
        );
        let connected = connected_systems(&document);
        assert!(connected.contains("a"));
        assert_eq!(connected.defects().len(), 1);
        assert!(connected.defects()[0].message().contains("one leg disconnected"));
        assert!(connected.defects()[0].message().contains("target end"));
    }

    #[test]
    fn test_detached_relationship_is_a_defect() {
        let document = DiagramDocument::new("d", vec![relationship("r", None, None)]);
        let connected = connected_systems(&document);
        assert_eq!(connected.ids().count(), 0);
        assert_eq!(connected.into_defects().len(), 1);
    }

    #[test]
    fn test_two_systems_without_relationships() {
        let document = DiagramDocument::new("d", vec![system("a", "A"), system("b", "B")]);
        let findings = unconnected_systems(&document);
        assert_eq!(findings.len(), 2);
        assert_eq!(
            findings[0].to_string(),
            "ERROR: Software System 'A' (c4Type: Software System, id: a) is not connected by any relationship."
        );
    }

    #[test]
    fn test_unnamed_system_message() {
        let document = DiagramDocument::new(
            "d",
            vec![GraphElement::new("esDk-3").with_attribute("c4Type", "Software System")],
        );
        assert_eq!(
            unconnected_systems(&document)[0].to_string(),
            "ERROR: Software System (c4Type: Software System, id: esDk-3) is not connected by any relationship."
        );
    }

    #[test]
    fn test_actors_are_not_required_to_connect() {
        let document = DiagramDocument::new(
            "d",
            vec![GraphElement::new("p").with_attribute("c4Type", "Person")],
        );
        assert!(unconnected_systems(&document).is_empty());
    }
}
