//! Normalized element/relationship export.
//!
//! The exported model is meant for architecture tooling downstream: it keeps
//! only the typed elements and their relationships, in document order, with
//! descriptions flattened to a single line.

use serde::{Deserialize, Serialize};

use c4lint_core::{
    attribute,
    document::DiagramDocument,
    element::{ElementKind, GraphElement},
};

use crate::error::C4LintError;

/// One exported element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelElement {
    pub name: Option<String>,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub technology: Option<String>,
}

/// One exported relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRelationship {
    pub source: Option<String>,
    pub destination: Option<String>,
    pub description: String,
    pub technology: Option<String>,
}

/// The exported form of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedModel {
    pub elements: Vec<ModelElement>,
    pub relationships: Vec<ModelRelationship>,
}

impl NormalizedModel {
    /// Builds the model from the typed elements of `document`.
    ///
    /// Elements with no `c4Type`, or a blank one, are not exported.
    pub fn from_document(document: &DiagramDocument) -> Self {
        let mut model = Self::default();

        for element in document.elements() {
            let Some(kind) = element.declared_type().filter(|tag| !tag.is_empty()) else {
                continue;
            };

            if element.kind() == ElementKind::Relationship {
                model.relationships.push(ModelRelationship {
                    source: element.source().map(str::to_string),
                    destination: element.target().map(str::to_string),
                    description: flattened_description(element),
                    technology: raw(element, attribute::TECHNOLOGY),
                });
            } else {
                model.elements.push(ModelElement {
                    name: raw(element, attribute::NAME),
                    description: flattened_description(element),
                    kind: kind.to_string(),
                    technology: raw(element, attribute::TECHNOLOGY),
                });
            }
        }

        model
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, C4LintError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a model back from JSON.
    pub fn from_json(json: &str) -> Result<Self, C4LintError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn raw(element: &GraphElement, key: &str) -> Option<String> {
    element.attribute(key).map(str::to_string)
}

fn flattened_description(element: &GraphElement) -> String {
    element
        .attribute(attribute::DESCRIPTION)
        .map(|description| description.replace("\r\n", " ").replace('\n', " "))
        .unwrap_or_default()
}
