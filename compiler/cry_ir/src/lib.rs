//! Cry IR - Syntax tree types for the Cry evaluator.
//!
//! The evaluator never builds or validates a tree; it consumes whatever a
//! front end hands it. This crate defines that hand-off format:
//!
//! - [`Node`] / [`NodeKind`]: the closed set of statement and expression nodes
//! - [`BinaryOp`] / [`ComparisonOp`]: operator enums
//! - [`Span`]: byte-offset source locations carried by every node
//!
//! With the `serde` feature the whole tree (de)serializes to JSON shaped like
//! `{"kind": "BinaryExpr", "left": ..., "right": ..., "operator": "+"}`.

pub mod ast;
mod span;

pub use ast::{BinaryOp, Block, ComparisonOp, Node, NodeKind, Property};
pub use span::Span;
