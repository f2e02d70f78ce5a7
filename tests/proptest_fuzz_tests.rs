//! Property-based tests for texted parsers, writers and builtins
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The parsers never panic on arbitrary input
//! 2. Writing a program and parsing it back yields the same program
//! 3. No builtin can move point or mark outside the buffer

use proptest::prelude::*;
use texted::{equal, eval, parse, write, Buffer, Environment, Error, Syntax, Value};

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

fn symbol_name() -> impl Strategy<Value = String> {
    "[a-z][a-z-]{0,10}"
}

fn number() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-100_000i64..100_000).prop_map(|n| n as f64),
        (-1_000_000i64..1_000_000).prop_map(|n| n as f64 / 100.0),
    ]
}

/// Arguments every syntax can carry without nesting
fn flat_argument() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<String>().prop_map(Value::String),
        number().prop_map(Value::Number),
    ]
}

fn flat_form() -> impl Strategy<Value = Value> {
    (symbol_name(), prop::collection::vec(flat_argument(), 0..5)).prop_map(|(name, args)| {
        let mut items = vec![Value::Symbol(name)];
        items.extend(args);
        Value::List(items)
    })
}

/// Forms whose arguments may themselves be calls
fn nested_form() -> impl Strategy<Value = Value> {
    let leaf = flat_argument();
    let argument = leaf.prop_recursive(4, 32, 4, |inner| {
        (symbol_name(), prop::collection::vec(inner, 0..4)).prop_map(|(name, args)| {
            let mut items = vec![Value::Symbol(name)];
            items.extend(args);
            Value::List(items)
        })
    });
    (symbol_name(), prop::collection::vec(argument, 0..4)).prop_map(|(name, args)| {
        let mut items = vec![Value::Symbol(name)];
        items.extend(args);
        Value::List(items)
    })
}

fn buffer_text() -> impl Strategy<Value = String> {
    "[a-z0-9 \\n.é]{0,40}"
}

/// Calls to builtins that move point or mark or edit the buffer
fn editing_form() -> impl Strategy<Value = Value> {
    let count = (-60i64..60).prop_map(|n| Value::Number(n as f64));
    let with_count = prop_oneof![
        Just("forward-char"),
        Just("backward-char"),
        Just("forward-word"),
        Just("backward-word"),
        Just("goto-char"),
        Just("goto-line"),
        Just("set-mark-command"),
        Just("mark-line"),
        Just("delete-char"),
        Just("delete-backward-char"),
        Just("delete-line"),
        Just("kill-line"),
        Just("kill-word"),
        Just("backward-kill-word"),
    ];
    let no_args = prop_oneof![
        Just("beginning-of-line"),
        Just("end-of-line"),
        Just("beginning-of-buffer"),
        Just("end-of-buffer"),
        Just("set-mark"),
        Just("exchange-point-and-mark"),
        Just("mark-whole-buffer"),
        Just("mark-word"),
        Just("delete-region"),
    ];
    let with_text = prop_oneof![
        Just("insert"),
        Just("replace-region"),
        Just("search-forward"),
        Just("search-backward"),
        Just("replace-match"),
    ];

    prop_oneof![
        (with_count, count).prop_map(|(name, n)| Value::List(vec![Value::symbol(name), n])),
        no_args.prop_map(|name| Value::List(vec![Value::symbol(name)])),
        (with_text, "[a-z .\\n]{0,4}")
            .prop_map(|(name, s)| Value::List(vec![Value::symbol(name), Value::String(s)])),
    ]
}

// =============================================================================
// PARSER FUZZ TESTS
// =============================================================================

proptest! {
    /// No parser panics on arbitrary input
    #[test]
    fn parsers_never_panic(source in any::<String>()) {
        for syntax in Syntax::ALL {
            let _ = parse(syntax, &source);
        }
    }

    /// Script-like input with unbalanced parens and quotes never panics
    #[test]
    fn parsers_handle_script_like_input(source in "[a-z0-9 ();\"\\\\\\n-]{0,80}") {
        let _ = parse(Syntax::Shell, &source);
        let _ = parse(Syntax::SExpr, &source);
    }

    /// Nesting up to 128 levels parses, anything deeper is a syntax error
    #[test]
    fn parser_handles_deep_nesting(depth in 1usize..20_000) {
        let source = format!("{}point{}", "(".repeat(depth), ")".repeat(depth));
        for syntax in [Syntax::SExpr, Syntax::Shell] {
            match parse(syntax, &source) {
                Ok(program) => {
                    prop_assert!(depth <= 128);
                    prop_assert_eq!(program.len(), 1);
                }
                Err(Error::SyntaxError { message, .. }) => {
                    prop_assert!(depth > 128);
                    prop_assert_eq!(message, "nesting too deep");
                }
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }
        }
    }

    /// Unbalanced opening parens never exhaust the stack
    #[test]
    fn parser_rejects_unclosed_nesting(depth in 1usize..60_000) {
        let source = "(".repeat(depth);
        for syntax in [Syntax::SExpr, Syntax::Shell] {
            let is_syntax_error = matches!(parse(syntax, &source), Err(Error::SyntaxError { .. }));
            prop_assert!(is_syntax_error);
        }
    }
}

// =============================================================================
// ROUND-TRIP LAW
// =============================================================================

proptest! {
    /// parse(s, write(s, p)) == p for flat programs in every syntax
    #[test]
    fn flat_programs_round_trip(program in prop::collection::vec(flat_form(), 0..6)) {
        for syntax in Syntax::ALL {
            let text = write(syntax, &program).unwrap();
            let parsed = parse(syntax, &text).unwrap();
            prop_assert_eq!(&parsed, &program, "{} via {:?}", syntax, text);
        }
    }

    /// Nested programs round-trip through the syntaxes that support nesting
    #[test]
    fn nested_programs_round_trip(program in prop::collection::vec(nested_form(), 0..4)) {
        for syntax in [Syntax::SExpr, Syntax::Json] {
            let text = write(syntax, &program).unwrap();
            let parsed = parse(syntax, &text).unwrap();
            prop_assert_eq!(&parsed, &program, "{} via {:?}", syntax, text);
        }
    }

    /// Equal is reflexive over arbitrary value trees
    #[test]
    fn equal_is_reflexive(value in nested_form()) {
        prop_assert!(equal(Some(&value), Some(&value.clone())));
        prop_assert!(!equal(Some(&value), None));
    }
}

// =============================================================================
// BUFFER INVARIANTS
// =============================================================================

fn assert_in_bounds(buffer: &Buffer) -> Result<(), TestCaseError> {
    let max = buffer.len() + 1;
    prop_assert!((1..=max).contains(&buffer.point()), "point {} of {}", buffer.point(), max);
    prop_assert!((1..=max).contains(&buffer.mark()), "mark {} of {}", buffer.mark(), max);
    Ok(())
}

proptest! {
    /// Point and mark stay in [1, len + 1] after any builtin, successful or not
    #[test]
    fn point_and_mark_stay_in_bounds(
        text in buffer_text(),
        forms in prop::collection::vec(editing_form(), 0..25),
    ) {
        let env = Environment::new();
        let mut buffer = Buffer::new(text);
        for form in &forms {
            let _ = eval(std::slice::from_ref(form), &env, &mut buffer);
            assert_in_bounds(&buffer)?;
        }
    }

    /// goto-char clamps any position
    #[test]
    fn goto_char_clamps(text in buffer_text(), target in -1000i64..1000) {
        let mut buffer = Buffer::new(text);
        let form = Value::List(vec![Value::symbol("goto-char"), Value::Number(target as f64)]);
        eval(&[form], &Environment::new(), &mut buffer).unwrap();
        let expected = target.clamp(1, buffer.len() as i64 + 1) as usize;
        prop_assert_eq!(buffer.point(), expected);
    }

    /// Inserting the empty string changes nothing
    #[test]
    fn insert_empty_is_noop(text in buffer_text(), at in 0i64..50) {
        let mut buffer = Buffer::new(text.clone());
        buffer.set_point(at);
        let before = buffer.point();
        let form = Value::List(vec![Value::symbol("insert"), Value::string("")]);
        eval(&[form], &Environment::new(), &mut buffer).unwrap();
        prop_assert_eq!(buffer.as_str(), text.as_str());
        prop_assert_eq!(buffer.point(), before);
    }

    /// Region edits do not care whether point or mark comes first
    #[test]
    fn region_edits_ignore_order(
        text in buffer_text(),
        a in 1i64..45,
        b in 1i64..45,
        replacement in "[A-Z]{0,5}",
    ) {
        let env = Environment::new();
        let forms = [
            vec![Value::List(vec![Value::symbol("delete-region")])],
            vec![Value::List(vec![Value::symbol("replace-region"), Value::String(replacement)])],
        ];
        for program in forms {
            let mut forward = Buffer::new(text.clone());
            forward.set_point(a);
            forward.set_mark(b);
            let mut backward = Buffer::new(text.clone());
            backward.set_point(b);
            backward.set_mark(a);

            eval(&program, &env, &mut forward).unwrap();
            eval(&program, &env, &mut backward).unwrap();
            prop_assert_eq!(forward.as_str(), backward.as_str());
            prop_assert_eq!(forward.point(), backward.point());
        }
    }
}
