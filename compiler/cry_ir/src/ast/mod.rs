//! AST Node Types
//!
//! Statement and expression nodes share one closed enum: every node carries a
//! kind discriminator that the evaluator dispatches on, and children are owned
//! boxes. Function bodies are the exception: they are `Arc`-shared so that a
//! closure value can hold on to its body without copying the subtree.

mod operators;

use std::fmt;
use std::sync::Arc;

use crate::Span;

pub use operators::{BinaryOp, ComparisonOp};

/// Shared statement sequence (function bodies).
pub type Block = Arc<[Node]>;

/// AST node.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: NodeKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    /// Node with no source location, for synthesized trees.
    pub fn dummy(kind: NodeKind) -> Self {
        Node {
            kind,
            span: Span::DUMMY,
        }
    }

    /// Attach a span to this node.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Name of this node's kind, as the front end spells it.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// A key in an object literal. A missing value is shorthand for a variable
/// of the same name (`{ x }` means `{ x: x }`).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub key: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<Box<Node>>,
}

impl Property {
    /// `key: value`
    pub fn new(key: impl Into<String>, value: Node) -> Self {
        Property {
            key: key.into(),
            value: Some(Box::new(value)),
        }
    }

    /// `{ key }`
    pub fn shorthand(key: impl Into<String>) -> Self {
        Property {
            key: key.into(),
            value: None,
        }
    }
}

/// Node variants.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum NodeKind {
    // Statements
    /// Root node: a sequence of top-level statements.
    Program { body: Vec<Node> },

    /// `let x = value;` / `const x = value;`
    VarDeclaration {
        constant: bool,
        identifier: String,
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        value: Option<Box<Node>>,
    },

    /// `fn name(params) { body }`
    FunctionDeclaration {
        name: String,
        parameters: Vec<String>,
        body: Block,
    },

    // Expressions
    /// `assignee = value`
    AssignmentExpr {
        #[cfg_attr(feature = "serde", serde(alias = "assigne"))]
        assignee: Box<Node>,
        value: Box<Node>,
    },

    /// `left op right` for arithmetic operators.
    BinaryExpr {
        left: Box<Node>,
        right: Box<Node>,
        operator: BinaryOp,
    },

    /// `left == right` / `left != right`
    ComparisonExpr {
        left: Box<Node>,
        right: Box<Node>,
        operator: ComparisonOp,
    },

    /// `caller(args...)`
    CallExpr { caller: Box<Node>, args: Vec<Node> },

    /// `object.property`
    MemberExpr { object: Box<Node>, property: String },

    /// `if condition { then } else { otherwise }`
    IfExpr {
        condition: Box<Node>,
        then: Vec<Node>,
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        otherwise: Option<Vec<Node>>,
    },

    /// Variable reference.
    Identifier { symbol: String },

    /// Number literal: 42, 3.5
    NumericLiteral { value: f64 },

    /// String literal: "hello"
    StringLiteral { value: String },

    /// `{ a: 1, b }`
    ObjectLiteral { properties: Vec<Property> },

    /// An object-literal entry appearing as a node on its own. Only valid
    /// inside an `ObjectLiteral`; the evaluator has no handler for it.
    Property(Property),
}

impl NodeKind {
    /// Kind discriminator name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Program { .. } => "Program",
            Self::VarDeclaration { .. } => "VarDeclaration",
            Self::FunctionDeclaration { .. } => "FunctionDeclaration",
            Self::AssignmentExpr { .. } => "AssignmentExpr",
            Self::BinaryExpr { .. } => "BinaryExpr",
            Self::ComparisonExpr { .. } => "ComparisonExpr",
            Self::CallExpr { .. } => "CallExpr",
            Self::MemberExpr { .. } => "MemberExpr",
            Self::IfExpr { .. } => "IfExpr",
            Self::Identifier { .. } => "Identifier",
            Self::NumericLiteral { .. } => "NumericLiteral",
            Self::StringLiteral { .. } => "StringLiteral",
            Self::ObjectLiteral { .. } => "ObjectLiteral",
            Self::Property(_) => "Property",
        }
    }
}

// Factory constructors. All produce dummy-spanned nodes; use `with_span` to
// attach a location.

impl Node {
    pub fn program(body: Vec<Node>) -> Self {
        Node::dummy(NodeKind::Program { body })
    }

    pub fn number(value: f64) -> Self {
        Node::dummy(NodeKind::NumericLiteral { value })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::dummy(NodeKind::StringLiteral {
            value: value.into(),
        })
    }

    pub fn ident(symbol: impl Into<String>) -> Self {
        Node::dummy(NodeKind::Identifier {
            symbol: symbol.into(),
        })
    }

    pub fn binary(left: Node, operator: BinaryOp, right: Node) -> Self {
        Node::dummy(NodeKind::BinaryExpr {
            left: Box::new(left),
            right: Box::new(right),
            operator,
        })
    }

    pub fn comparison(left: Node, operator: ComparisonOp, right: Node) -> Self {
        Node::dummy(NodeKind::ComparisonExpr {
            left: Box::new(left),
            right: Box::new(right),
            operator,
        })
    }

    pub fn assign(assignee: Node, value: Node) -> Self {
        Node::dummy(NodeKind::AssignmentExpr {
            assignee: Box::new(assignee),
            value: Box::new(value),
        })
    }

    pub fn member(object: Node, property: impl Into<String>) -> Self {
        Node::dummy(NodeKind::MemberExpr {
            object: Box::new(object),
            property: property.into(),
        })
    }

    pub fn call(caller: Node, args: Vec<Node>) -> Self {
        Node::dummy(NodeKind::CallExpr {
            caller: Box::new(caller),
            args,
        })
    }

    pub fn object(properties: Vec<Property>) -> Self {
        Node::dummy(NodeKind::ObjectLiteral { properties })
    }

    pub fn if_expr(condition: Node, then: Vec<Node>, otherwise: Option<Vec<Node>>) -> Self {
        Node::dummy(NodeKind::IfExpr {
            condition: Box::new(condition),
            then,
            otherwise,
        })
    }

    /// `let identifier = value;` (or `let identifier;` when `value` is `None`)
    pub fn let_var(identifier: impl Into<String>, value: Option<Node>) -> Self {
        Node::dummy(NodeKind::VarDeclaration {
            constant: false,
            identifier: identifier.into(),
            value: value.map(Box::new),
        })
    }

    /// `const identifier = value;`
    pub fn const_var(identifier: impl Into<String>, value: Node) -> Self {
        Node::dummy(NodeKind::VarDeclaration {
            constant: true,
            identifier: identifier.into(),
            value: Some(Box::new(value)),
        })
    }

    pub fn function<P: Into<String>>(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = P>,
        body: Vec<Node>,
    ) -> Self {
        Node::dummy(NodeKind::FunctionDeclaration {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            body: Block::from(body),
        })
    }
}
