//! The C4 attribute vocabulary.
//!
//! draw.io's C4 shape library stores the model of each shape as custom
//! properties on the `object` wrapper of a cell. These constants name the
//! properties the linter understands.

/// Declared display name of an element.
pub const NAME: &str = "c4Name";

/// Free-text description of an element or relationship.
pub const DESCRIPTION: &str = "c4Description";

/// Declared type tag (`Software System`, `Person`, `Relationship`, ...).
pub const TYPE: &str = "c4Type";

/// Implementation technology of an element or relationship.
pub const TECHNOLOGY: &str = "c4Technology";

/// All attributes that mark an element as part of a C4 model.
pub const C4_ATTRIBUTES: [&str; 4] = [NAME, DESCRIPTION, TYPE, TECHNOLOGY];

/// Attributes required on systems, actors and other typed elements.
pub const ELEMENT_REQUIRED: [&str; 3] = [NAME, DESCRIPTION, TYPE];

/// Attributes required on relationships.
pub const RELATIONSHIP_REQUIRED: [&str; 2] = [DESCRIPTION, TECHNOLOGY];

/// Type tag of a software system.
pub const SOFTWARE_SYSTEM_TAG: &str = "Software System";

/// Type tag of a person (actor).
pub const PERSON_TAG: &str = "Person";

/// Type tag of a relationship.
pub const RELATIONSHIP_TAG: &str = "Relationship";

/// Attributes that never add human context to a finding.
pub const NON_CONTEXT_ATTRIBUTES: [&str; 3] = ["id", "label", "placeholders"];

/// Returns `true` if `key` is one of the four C4 attributes.
pub fn is_c4_attribute(key: &str) -> bool {
    C4_ATTRIBUTES.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_c4_attribute() {
        assert!(is_c4_attribute("c4Name"));
        assert!(is_c4_attribute("c4Technology"));
        assert!(!is_c4_attribute("label"));
        assert!(!is_c4_attribute("C4Name"));
    }

    #[test]
    fn test_required_sets_are_c4_attributes() {
        assert!(ELEMENT_REQUIRED.iter().all(|a| is_c4_attribute(a)));
        assert!(RELATIONSHIP_REQUIRED.iter().all(|a| is_c4_attribute(a)));
    }
}
