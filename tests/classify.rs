//! Black-box scenario and property tests against the public `classify`
//! contract (§8).

use cursor_context::{classify, ClassifyOptions, ContextTag, InsideDot};
use test_case::test_case;

fn ctx(fragment: &str) -> ContextTag {
    classify(fragment, ClassifyOptions::default())
}

#[test_case("", ContextTag::Expr; "empty input")]
#[test_case("hello_wor", ContextTag::LocalOrVar("hello_wor".to_string()); "plain identifier")]
#[test_case("Hello.Wor", ContextTag::Alias("Hello.Wor".to_string()); "dotted alias path")]
#[test_case(
    "Hello.wor",
    ContextTag::Dot(InsideDot::Alias("Hello".to_string()), "wor".to_string());
    "dot on an alias"
)]
#[test_case(
    "hello.wor",
    ContextTag::Dot(InsideDot::Var("hello".to_string()), "wor".to_string());
    "dot on a variable"
)]
#[test_case("@hello", ContextTag::ModuleAttribute("hello".to_string()); "module attribute")]
#[test_case("@", ContextTag::ModuleAttribute(String::new()); "bare module attribute prefix")]
#[test_case("x@hello", ContextTag::None; "at sign mid-identifier is not a module attribute")]
#[test_case(":foo", ContextTag::UnquotedAtom("foo".to_string()); "unquoted atom")]
#[test_case(":", ContextTag::UnquotedAtom(String::new()); "bare atom prefix")]
#[test_case("x when ", ContextTag::OperatorCall("when".to_string()); "textual operator in call position")]
#[test_case("foo/", ContextTag::LocalArity("foo".to_string()); "local arity")]
#[test_case("Hello.world/2", ContextTag::None; "digit after slash is not an arity literal")]
#[test_case(
    "Hello.world/",
    ContextTag::DotArity(InsideDot::Alias("Hello".to_string()), "world".to_string());
    "dot arity"
)]
#[test_case(
    "Hello.world(",
    ContextTag::DotCall(InsideDot::Alias("Hello".to_string()), "world".to_string());
    "dot call"
)]
#[test_case("+", ContextTag::Operator("+".to_string()); "bare operator")]
#[test_case("+/", ContextTag::OperatorArity("+".to_string()); "operator arity")]
#[test_case("=> ", ContextTag::Expr; "fat arrow is an expression boundary")]
#[test_case("..", ContextTag::None; "bare double dot")]
#[test_case("foo?", ContextTag::None; "trailing question mark rejects the identifier")]
fn scenarios(input: &str, expected: ContextTag) {
    assert_eq!(ctx(input), expected);
}

#[test]
fn nested_dot_chain_is_left_associative() {
    assert_eq!(
        ctx("a.b.c"),
        ContextTag::Dot(
            InsideDot::Dot(Box::new(InsideDot::Var("a".to_string())), "b".to_string()),
            "c".to_string()
        )
    );
}

#[test]
fn purity_same_input_same_output() {
    for input in ["hello", "Hello.world(", "@attr", ":atom", "+"] {
        assert_eq!(ctx(input), ctx(input));
    }
}

#[test]
fn multiline_reduction_keeps_only_the_last_line() {
    let prefix = "defmodule Foo do\n  def bar do\n";
    for line in ["hello", "Hello.world(", "@attr", ":atom"] {
        assert_eq!(ctx(&format!("{prefix}{line}")), ctx(line));
    }
}

#[test]
fn trailing_newline_is_always_expr() {
    for input in ["", "hello", "Hello.world(", "@attr", "foo/"] {
        assert_eq!(ctx(&format!("{input}\n")), ContextTag::Expr);
    }
}

#[test]
fn whitespace_promotes_identifiers_and_operators_to_call_position() {
    assert_eq!(
        ctx("hello "),
        match ctx("hello") {
            ContextTag::LocalOrVar(x) => ContextTag::LocalCall(x),
            other => panic!("unexpected {other:?}"),
        }
    );
    assert_eq!(
        ctx("+ "),
        match ctx("+") {
            ContextTag::Operator(x) => ContextTag::OperatorCall(x),
            other => panic!("unexpected {other:?}"),
        }
    );
}

#[test]
fn chars_payloads_never_contain_boundary_characters() {
    fn check(tag: &ContextTag) {
        let forbidden = [' ', '\t', ',', '(', ')', '[', ']', '{', '}', '"', '\'', '/'];
        let texts: Vec<&str> = match tag {
            ContextTag::UnquotedAtom(s)
            | ContextTag::Alias(s)
            | ContextTag::ModuleAttribute(s)
            | ContextTag::LocalOrVar(s)
            | ContextTag::LocalArity(s)
            | ContextTag::LocalCall(s)
            | ContextTag::Operator(s)
            | ContextTag::OperatorArity(s)
            | ContextTag::OperatorCall(s) => vec![s.as_str()],
            ContextTag::Dot(_, s) | ContextTag::DotArity(_, s) | ContextTag::DotCall(_, s) => {
                vec![s.as_str()]
            }
            ContextTag::Expr | ContextTag::None => vec![],
        };
        for text in texts {
            assert!(!text.chars().any(|c| forbidden.contains(&c)), "{text:?}");
        }
    }

    for input in [
        "hello_wor", "Hello.Wor", "Hello.wor", "@hello", ":foo", "foo/", "Hello.world(", "+",
    ] {
        check(&ctx(input));
    }
}
