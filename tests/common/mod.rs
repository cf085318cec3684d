#![allow(dead_code)]

use json2ts_rs::{CompileOptions, compile};

pub fn compile_default(input: &str) -> String {
    compile(input, &CompileOptions::default()).expect("compile failed")
}

pub fn compile_with(input: &str, options: &CompileOptions) -> String {
    compile(input, options).expect("compile failed")
}

/// Field lines of the last (top-level) declaration body, without the
/// surrounding braces.
pub fn body_lines(output: &str) -> Vec<&str> {
    let start = output.rfind("= {\n").expect("no declaration body") + "= {\n".len();
    let end = output.rfind("}\n").expect("no closing brace");
    output[start..end].lines().collect()
}
