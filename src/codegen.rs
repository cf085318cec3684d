//! Renders a type tree into TypeScript type-declaration text.
//!
//! Declaration names are manufactured from a per-invocation counter:
//! `<prefix><CapitalizedKey>$<n><suffix>`. The root declaration is
//! seeded from the key `Result` and numbered before its body is
//! rendered, so the top-level type is always `$0`. Nested object
//! bodies are rendered before their own names are allocated, which
//! gives inner declarations lower numbers than their parents and
//! places them earlier in the output.

use std::fmt::Write as _;

use indexmap::IndexSet;

use crate::options::CompileOptions;
use crate::transform::TypeShape;

/// Render a type tree into declaration text.
///
/// With `spilt_type` enabled the hoisted declarations precede the
/// top-level `type <Name> = { ... }` block; otherwise the output is a
/// single declaration with nested bodies inlined.
#[must_use]
pub fn generate(shape: &TypeShape, options: &CompileOptions) -> String {
    Generator::new(options).run(shape)
}

struct Generator<'a> {
    options: &'a CompileOptions,
    /// Hoisted declarations, in allocation order.
    decls: String,
    counter: usize,
}

impl<'a> Generator<'a> {
    const fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            decls: String::new(),
            counter: 0,
        }
    }

    fn run(mut self, shape: &TypeShape) -> String {
        let root_name = self.next_name("Result");
        let body = match shape {
            TypeShape::Object(fields) => self.gen_body(fields),
            // the transformer always hands the generator an object
            TypeShape::Scalar(tag) => tag.name().to_string(),
            TypeShape::Array(items) => self.gen_array("Result", items),
        };
        format!("{}type {root_name} = {body}", self.decls)
    }

    /// Object type body: one line per field, insertion order.
    fn gen_body(&mut self, fields: &[(String, TypeShape)]) -> String {
        let mut code = String::from("{\n");
        for (key, shape) in fields {
            code.push_str(key);
            code.push_str(if self.options.required { ": " } else { "?: " });
            let rendered = match shape {
                TypeShape::Scalar(tag) => tag.name().to_string(),
                TypeShape::Object(inner) => self.gen_object(key, inner),
                TypeShape::Array(items) => {
                    if self.options.parse_array {
                        self.gen_array(key, items)
                    } else {
                        "Array<any>".to_string()
                    }
                }
            };
            code.push_str(&rendered);
            if self.options.semicolon {
                code.push(';');
            }
            code.push('\n');
        }
        code.push_str("}\n");
        code
    }

    /// A nested object: hoisted under a fresh name, or inlined.
    fn gen_object(&mut self, key: &str, fields: &[(String, TypeShape)]) -> String {
        let body = self.gen_body(fields);
        if self.options.spilt_type {
            let name = self.next_name(key);
            let _ = write!(self.decls, "type {name} = {body};\n");
            name
        } else {
            body
        }
    }

    /// Union of distinct element renderings inside `Array< ... >`.
    /// Members keep first-insertion order; identical renderings
    /// collapse to one.
    fn gen_array(&mut self, key: &str, items: &[TypeShape]) -> String {
        let mut members: IndexSet<String> = IndexSet::new();
        for item in items {
            let rendered = match item {
                TypeShape::Scalar(tag) => tag.name().to_string(),
                TypeShape::Object(fields) => self.gen_object(key, fields),
                TypeShape::Array(inner) => self.gen_array(key, inner),
            };
            members.insert(rendered);
        }

        let mut code = String::from("Array< ");
        for (i, member) in members.iter().enumerate() {
            if i > 0 {
                code.push_str(" | ");
            }
            code.push_str(member);
        }
        code.push_str(" >");
        code
    }

    fn next_name(&mut self, key: &str) -> String {
        let name = format!(
            "{}{}${}{}",
            self.options.type_prefix,
            capitalize_words(key),
            self.counter,
            self.options.type_suffix
        );
        self.counter += 1;
        name
    }
}

/// Uppercase the first letter and any letter following a space.
fn capitalize_words(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut boundary = true;
    for ch in key.chars() {
        if boundary && ch.is_ascii_lowercase() {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        boundary = ch == ' ';
    }
    out
}
