//! Property-based tests with proptest.
//!
//! Generate random well-formed flat literals, compile them, and check
//! the structural properties the generator guarantees: byte-identical
//! determinism, field set and order preservation, the optional-marker
//! switch, and the single-declaration invariant when splitting is
//! off.

use json2ts_rs::{CompileOptions, compile};
use proptest::prelude::*;

/// A scalar literal together with the type token it must produce.
#[derive(Debug, Clone)]
struct Scalar {
    source: String,
    token: &'static str,
}

fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        "[0-9]{1,6}".prop_map(|s| Scalar {
            source: s,
            token: "Number",
        }),
        "[a-z0-9 ]{0,10}".prop_map(|s| Scalar {
            source: format!("\"{s}\""),
            token: "String",
        }),
        "[a-z0-9 ]{0,10}".prop_map(|s| Scalar {
            source: format!("'{s}'"),
            token: "String",
        }),
        Just(Scalar {
            source: "true".to_string(),
            token: "Boolean",
        }),
        Just(Scalar {
            source: "false".to_string(),
            token: "Boolean",
        }),
        Just(Scalar {
            source: "null".to_string(),
            token: "Null",
        }),
        Just(Scalar {
            source: "undefined".to_string(),
            token: "Undefined",
        }),
    ]
}

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}".prop_map(|s| s)
}

/// 1-8 fields with distinct keys, order preserved.
fn fields() -> impl Strategy<Value = Vec<(String, Scalar)>> {
    prop::collection::vec((key(), scalar()), 1..=8).prop_map(|pairs| {
        let mut seen = Vec::new();
        let mut out = Vec::new();
        for (k, v) in pairs {
            if !seen.contains(&k) {
                seen.push(k.clone());
                out.push((k, v));
            }
        }
        out
    })
}

fn literal(fields: &[(String, Scalar)]) -> String {
    let body: Vec<String> = fields
        .iter()
        .map(|(k, v)| format!("{k}: {}", v.source))
        .collect();
    format!("{{ {} }}", body.join(", "))
}

proptest! {
    #[test]
    fn flat_literal_compiles_to_exact_declaration(fields in fields()) {
        let input = literal(&fields);
        let out = compile(&input, &CompileOptions::default()).expect("compile failed");

        let mut expected = String::from("type Result$0Type = {\n");
        for (k, v) in &fields {
            expected.push_str(k);
            expected.push_str(": ");
            expected.push_str(v.token);
            expected.push('\n');
        }
        expected.push_str("}\n");

        prop_assert_eq!(out, expected);
    }

    #[test]
    fn compile_is_deterministic(fields in fields()) {
        let input = literal(&fields);
        let opts = CompileOptions::new().parse_array(true).required(false);
        let first = compile(&input, &opts).expect("compile failed");
        let second = compile(&input, &opts).expect("compile failed");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn optional_marker_applies_to_every_field(fields in fields()) {
        let input = literal(&fields);
        let out = compile(&input, &CompileOptions::new().required(false))
            .expect("compile failed");
        for (k, v) in &fields {
            let line = format!("{k}?: {}\n", v.token);
            prop_assert!(out.contains(&line), "missing line {:?} in {:?}", line, out);
        }
        prop_assert!(!out.contains(": Array"));
    }

    #[test]
    fn trailing_comma_is_equivalent(fields in fields()) {
        let plain = literal(&fields);
        let trailing = format!("{}, }}", plain.trim_end_matches(" }"));
        let opts = CompileOptions::default();
        prop_assert_eq!(
            compile(&plain, &opts).expect("compile failed"),
            compile(&trailing, &opts).expect("compile failed")
        );
    }

    #[test]
    fn no_split_always_yields_one_declaration(
        fields in fields(),
        nested in fields(),
    ) {
        let inner = literal(&nested);
        let mut input = literal(&fields);
        // graft a nested object under a key no generated key collides
        // with (generated keys are at most 8 chars)
        input = format!(
            "{}, nestedvalue: {} }}",
            input.trim_end_matches(" }"),
            inner
        );
        let out = compile(&input, &CompileOptions::new().spilt_type(false))
            .expect("compile failed");
        prop_assert_eq!(out.matches("type ").count(), 1);
    }

    #[test]
    fn arrays_render_as_any_by_default(items in prop::collection::vec(scalar(), 0..=5)) {
        let body: Vec<&str> = items.iter().map(|s| s.source.as_str()).collect();
        let input = format!("{{ a: [{}] }}", body.join(", "));
        let out = compile(&input, &CompileOptions::default()).expect("compile failed");
        prop_assert_eq!(out, "type Result$0Type = {\na: Array<any>\n}\n".to_string());
    }
}
