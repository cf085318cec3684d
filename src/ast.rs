use std::fmt;

use crate::context::SourceSpan;

/// Structural type of a parsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Object,
    Array,
}

impl TypeTag {
    /// Token the generator emits for this tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
            Self::Undefined => "Undefined",
            Self::Object => "Object",
            Self::Array => "Array",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed value: scalar payload or child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstValue {
    /// Quoted string content (quotes stripped).
    String(String),
    /// Raw digit run.
    Number(String),
    Boolean(bool),
    /// The literal `null`, or any unrecognized value.
    Null,
    Undefined,
    /// Object body: fields and comments, in source order.
    Object(Vec<AstNode>),
    /// Array body: elements in source order.
    Array(Vec<AstNode>),
}

impl AstValue {
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::String(_) => TypeTag::String,
            Self::Number(_) => TypeTag::Number,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Null => TypeTag::Null,
            Self::Undefined => TypeTag::Undefined,
            Self::Object(_) => TypeTag::Object,
            Self::Array(_) => TypeTag::Array,
        }
    }
}

/// Which side of its field a comment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPlacement {
    /// Shares its start line with the previous sibling.
    Trailing,
    /// Opens a new line; belongs to whatever follows.
    Leading,
}

/// One node in an object or array body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// A `key: value` pair.
    Field {
        key: String,
        value: AstValue,
        loc: SourceSpan,
    },
    /// An array element.
    Element { value: AstValue, loc: SourceSpan },
    /// A `//` line comment.
    Comment {
        placement: CommentPlacement,
        text: String,
        loc: SourceSpan,
    },
}

impl AstNode {
    #[must_use]
    pub const fn loc(&self) -> &SourceSpan {
        match self {
            Self::Field { loc, .. } | Self::Element { loc, .. } | Self::Comment { loc, .. } => loc,
        }
    }
}

/// Root of a parse: the top-level object body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    pub children: Vec<AstNode>,
}
