//! Payload shape detection and the draw.io storage encoding.
//!
//! draw.io stores each page in a `<diagram>` element in one of two save
//! modes. Plain mode nests an `mxGraphModel` element directly. Compressed
//! mode stores `base64(deflate_raw(encodeURIComponent(xml)))` as the text of
//! the element. The shape is decided from the structure of the element
//! before anything is decoded.

use std::io::Read;

use base64::Engine as _;
use flate2::read::DeflateDecoder;
use log::trace;
use percent_encoding::percent_decode;
use roxmltree::Node;

use crate::{GRAPH_MODEL_TAG, error::DecodeError};

/// The content of a `<diagram>` element.
#[derive(Debug)]
pub(crate) enum Payload<'a, 'input> {
    /// An `mxGraphModel` element nested in the document.
    Nested(Node<'a, 'input>),
    /// Plain XML stored as (escaped) text.
    Escaped(String),
    /// Compressed text.
    Encoded(String),
    /// Neither text nor a nested model.
    Empty,
}

/// Decide how the content of `diagram` is stored.
pub(crate) fn detect<'a, 'input>(diagram: Node<'a, 'input>) -> Payload<'a, 'input> {
    if let Some(model) = diagram
        .children()
        .find(|node| node.has_tag_name(GRAPH_MODEL_TAG))
    {
        return Payload::Nested(model);
    }

    let text: String = diagram
        .children()
        .filter(Node::is_text)
        .filter_map(|node| node.text())
        .collect();
    let text = text.trim();

    if text.is_empty() {
        Payload::Empty
    } else if text.starts_with('<') {
        Payload::Escaped(text.to_string())
    } else {
        Payload::Encoded(text.to_string())
    }
}

/// Reverse the compressed storage encoding into plain XML text.
///
/// # Errors
///
/// Returns [`DecodeError`] if the text is not base64, not a raw deflate
/// stream, or not UTF-8 once percent-decoded.
pub(crate) fn inflate(encoded: &str) -> Result<String, DecodeError> {
    let compact: String = encoded.split_whitespace().collect();
    let compressed = base64::engine::general_purpose::STANDARD.decode(compact.as_bytes())?;

    let mut inflated = Vec::new();
    DeflateDecoder::new(compressed.as_slice()).read_to_end(&mut inflated)?;
    trace!(compressed = compressed.len(), inflated = inflated.len(); "Inflated diagram payload");

    let xml = percent_decode(&inflated).decode_utf8()?;
    Ok(xml.into_owned())
}

/// Apply the compressed storage encoding, as draw.io does on save.
#[cfg(test)]
pub(crate) fn encode(xml: &str) -> String {
    use std::io::Write;

    use flate2::{Compression, write::DeflateEncoder};
    use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

    let escaped = utf8_percent_encode(xml, NON_ALPHANUMERIC).to_string();
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(escaped.as_bytes())
        .expect("Writing to Vec is infallible");
    let compressed = encoder.finish().expect("Writing to Vec is infallible");
    base64::engine::general_purpose::STANDARD.encode(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_reverses_encoding() {
        let xml = r#"<mxGraphModel><root><object id="1" c4Name="Zahlungssystem ü"/></root></mxGraphModel>"#;
        assert_eq!(inflate(&encode(xml)).unwrap(), xml);
    }

    #[test]
    fn test_inflate_ignores_line_breaks() {
        let xml = "<mxGraphModel/>";
        let encoded = encode(xml);
        let (head, tail) = encoded.split_at(encoded.len() / 2);
        assert_eq!(inflate(&format!("{head}\n  {tail}")).unwrap(), xml);
    }

    #[test]
    fn test_inflate_rejects_bad_base64() {
        assert!(matches!(inflate("not base64!"), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_inflate_rejects_non_deflate_data() {
        let garbage = base64::engine::general_purpose::STANDARD.encode([0xff_u8; 16]);
        assert!(matches!(inflate(&garbage), Err(DecodeError::Inflate(_))));
    }

    #[test]
    fn test_detect_shapes() {
        let nested = roxmltree::Document::parse("<diagram><mxGraphModel/></diagram>").unwrap();
        assert!(matches!(detect(nested.root_element()), Payload::Nested(_)));

        let escaped =
            roxmltree::Document::parse("<diagram>&lt;mxGraphModel/&gt;</diagram>").unwrap();
        match detect(escaped.root_element()) {
            Payload::Escaped(text) => assert_eq!(text, "<mxGraphModel/>"),
            other => panic!("Expected escaped payload, got {other:?}"),
        }

        let encoded = roxmltree::Document::parse("<diagram>\n  dZBBDoIw\n</diagram>").unwrap();
        match detect(encoded.root_element()) {
            Payload::Encoded(text) => assert_eq!(text, "dZBBDoIw"),
            other => panic!("Expected encoded payload, got {other:?}"),
        }

        let empty = roxmltree::Document::parse("<diagram>   </diagram>").unwrap();
        assert!(matches!(detect(empty.root_element()), Payload::Empty));
    }
}
