//! # C4 Lint Parser
//!
//! Decoder for draw.io diagram files. This crate turns the raw content of a
//! `.drawio` file into a [`DiagramDocument`], accepting both save modes of
//! the editor without a format flag.
//!
//! ## Usage
//!
//! ```
//! # use c4lint_parser::{decode, DecodeError};
//!
//! fn main() -> Result<(), DecodeError> {
//!     let content = r#"
//!         <mxfile>
//!           <diagram name="Page-1">
//!             <mxGraphModel><root>
//!               <object id="s1" c4Name="Billing" c4Type="Software System" c4Description="Bills"/>
//!             </root></mxGraphModel>
//!           </diagram>
//!         </mxfile>
//!     "#;
//!
//!     let document = decode("billing.drawio", content)?;
//!     assert_eq!(document.elements().len(), 1);
//!     Ok(())
//! }
//! ```

mod elements;
mod error;
mod payload;

pub use error::DecodeError;

use log::{debug, trace};
use roxmltree::Document;

use c4lint_core::document::DiagramDocument;

use payload::Payload;

pub(crate) const GRAPH_MODEL_TAG: &str = "mxGraphModel";

const DIAGRAM_TAG: &str = "diagram";

/// Decode the content of a diagram file into a document.
///
/// The decoding pipeline:
///
/// 1. **Parse** - Parse the outer file as XML
/// 2. **Locate** - Find the first `<diagram>` page (or a bare `mxGraphModel` root)
/// 3. **Detect** - Decide between a nested model, escaped XML text and compressed text
/// 4. **Decode** - Reverse the storage encoding if needed and parse the model
/// 5. **Collect** - Extract the `object` wrappers as graph elements
///
/// # Arguments
///
/// * `source` - Identifier of the file, kept on the document for reporting
/// * `content` - The raw file content
///
/// # Errors
///
/// Returns a [`DecodeError`] when no diagram payload is present or the payload
/// cannot be parsed as a tree.
pub fn decode(source: &str, content: &str) -> Result<DiagramDocument, DecodeError> {
    let outer = Document::parse(content)?;
    let root = outer.root_element();

    if root.has_tag_name(GRAPH_MODEL_TAG) {
        debug!(source; "Decoding bare mxGraphModel file");
        return Ok(DiagramDocument::new(source, elements::collect(root)));
    }

    let mut pages = root
        .descendants()
        .filter(|node| node.has_tag_name(DIAGRAM_TAG));
    let diagram = pages.next().ok_or(DecodeError::MissingDiagram)?;
    let extra_pages = pages.count();
    if extra_pages > 0 {
        debug!(source, extra_pages; "Only the first diagram page is decoded");
    }

    let elements = match payload::detect(diagram) {
        Payload::Nested(model) => {
            trace!(source; "Diagram stored as plain XML");
            elements::collect(model)
        }
        Payload::Escaped(xml) => {
            trace!(source; "Diagram stored as escaped XML text");
            parse_model(&xml)?
        }
        Payload::Encoded(text) => {
            trace!(source; "Diagram stored compressed");
            parse_model(&payload::inflate(&text)?)?
        }
        Payload::Empty => return Err(DecodeError::EmptyDiagram),
    };

    debug!(source, elements = elements.len(); "Diagram decoded");
    Ok(DiagramDocument::new(source, elements))
}

fn parse_model(xml: &str) -> Result<Vec<c4lint_core::element::GraphElement>, DecodeError> {
    let model = Document::parse(xml)?;
    Ok(elements::collect(model.root_element()))
}
