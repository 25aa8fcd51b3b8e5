//! C4 Lint Core Types and Definitions
//!
//! This crate provides the foundational types shared by the decoder and the
//! validation engine. It includes:
//!
//! - **Attributes**: The C4 attribute vocabulary ([`attribute`] module)
//! - **Elements**: Graph elements and their classification ([`element::GraphElement`], [`element::ElementKind`])
//! - **Documents**: The decoded element tree of one file ([`document::DiagramDocument`])
//! - **Findings**: Categorized errors and warnings ([`finding::Finding`])

pub mod attribute;
pub mod document;
pub mod element;
pub mod finding;
