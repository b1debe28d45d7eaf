//! Property-based tests for the format translator.
//!
//! The translator must be total: any input string produces some output
//! without panicking. Patterns without directives pass through unchanged,
//! apart from `%%` collapsing to `%`.

#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use pas_format::{parse_portable_spec, pieces, translate, Piece};
use proptest::prelude::*;

// -- Strategies --

/// Arbitrary text that never contains `%`.
fn literal_strategy() -> impl Strategy<Value = String> {
    any::<String>().prop_map(|s| s.replace('%', ""))
}

/// A single well-formed printf directive.
fn directive_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(vec!['-', '+', ' ', '#', '0']), 0..4),
        prop::option::of(1usize..40),
        prop::option::of(0usize..12),
        prop::sample::select(vec![
            'd', 'i', 'u', 'x', 'X', 'f', 'F', 'e', 'E', 'g', 'G', 's', 'c', 'p',
        ]),
    )
        .prop_map(|(flags, width, precision, ty)| {
            let mut out = String::from("%");
            out.extend(flags);
            if let Some(w) = width {
                out.push_str(&w.to_string());
            }
            if let Some(p) = precision {
                out.push('.');
                out.push_str(&p.to_string());
            }
            out.push(ty);
            out
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn translate_never_panics(pattern in any::<String>()) {
        let _ = translate(&pattern);
    }

    #[test]
    fn translate_never_panics_on_percent_soup(pattern in "[%0-9.+# a-zA-Z-]{0,40}") {
        let _ = translate(&pattern);
    }

    #[test]
    fn literal_text_is_identity(text in literal_strategy()) {
        prop_assert_eq!(translate(&text), text);
    }

    #[test]
    fn escaped_percent_collapses(parts in prop::collection::vec(literal_strategy(), 1..5)) {
        let pattern = parts.join("%%");
        let expected = parts.join("%");
        prop_assert_eq!(translate(&pattern), expected);
    }

    #[test]
    fn each_directive_yields_one_spec(
        lead in literal_strategy(),
        directive in directive_strategy(),
        tail in literal_strategy(),
    ) {
        let pattern = format!("{lead}{directive}{tail}");
        let directives = pieces(&pattern)
            .into_iter()
            .filter(|p| matches!(p, Piece::Directive(_)))
            .count();
        prop_assert_eq!(directives, 1);

        let out = translate(&pattern);
        prop_assert!(out.starts_with(&lead));
        prop_assert!(out.ends_with(&tail));
    }

    #[test]
    fn rendered_spec_parses_back(directive in directive_strategy()) {
        for piece in pieces(&directive) {
            if let Piece::Directive(d) = piece {
                let spec = d.to_portable();
                prop_assert_eq!(parse_portable_spec(&spec.to_string()), spec);
            }
        }
    }
}
