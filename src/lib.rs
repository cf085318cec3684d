//! Relaxed JSON object literals in, TypeScript type declarations out.
//!
//! The input grammar is a JSON superset: unquoted or quoted keys,
//! single- or double-quoted strings, trailing commas, `undefined`,
//! and `//` line comments. The pipeline is parse → transform →
//! generate, and each stage is usable on its own.
//!
//! # Quick start
//!
//! ```
//! use json2ts_rs::{CompileOptions, compile};
//!
//! let input = r#"{ name: "Tom", age: 18 }"#;
//! let output = compile(input, &CompileOptions::default()).unwrap();
//! assert_eq!(output, "type Result$0Type = {\nname: String\nage: Number\n}\n");
//! ```
//!
//! # Stage by stage
//!
//! ```
//! use json2ts_rs::{CompileOptions, generate, parse, transform};
//!
//! let ast = parse("{ tags: [1, 2] }").unwrap();
//! let shape = transform(&ast);
//! let opts = CompileOptions::new().parse_array(true);
//! assert_eq!(
//!     generate(&shape, &opts),
//!     "type Result$0Type = {\ntags: Array< Number >\n}\n"
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod codegen;
pub mod context;
pub mod options;
pub mod parser;
pub mod transform;

pub use ast::{AstNode, AstValue, CommentPlacement, Root, TypeTag};
pub use codegen::generate;
pub use context::{Position, SourceContext, SourceSpan};
pub use options::CompileOptions;
pub use parser::{ParseError, ParseErrorKind, parse};
pub use transform::{TypeShape, transform};

/// Compile a relaxed object literal into type-declaration text in one
/// step.
///
/// # Errors
///
/// Returns `ParseError` when a `/` inside an object body does not
/// open a `//` comment; all other malformed input degrades into
/// `Null`-typed fields instead of failing.
pub fn compile(code: &str, options: &CompileOptions) -> Result<String, ParseError> {
    let ast = parse(code)?;
    let shape = transform(&ast);
    Ok(generate(&shape, options))
}
