//! Parser integration tests: the twelve concrete scenarios plus scope- and
//! symbol-resolution edge cases.

use mtailc_sem::{MetricFactory, MetricKind, MetricStore};
use mtailc_util::Handler;

use crate::{Ast, Node, Parser};

/// A `MetricFactory`/`MetricStore` that just counts declarations, standing
/// in for the real exporter this crate does not own.
#[derive(Default)]
struct TestFactory {
    next_id: u32,
    registered: Vec<u32>,
}

impl MetricFactory for TestFactory {
    type Metric = u32;

    fn new_metric(&mut self, _name: &str, _program_name: &str, _kind: MetricKind, _keys: &[String], _hidden: bool) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl MetricStore<u32> for TestFactory {
    fn add(&mut self, metric: u32) {
        self.registered.push(metric);
    }
}

fn parse(source: &str) -> (Ast<u32>, Handler) {
    let mut handler = Handler::new();
    let parser = Parser::new(source, &mut handler, "test", TestFactory::default());
    let (ast, _factory) = parser.parse();
    (ast, handler)
}

fn parse_with_factory(source: &str) -> (Ast<u32>, Handler, TestFactory) {
    let mut handler = Handler::new();
    let parser = Parser::new(source, &mut handler, "test", TestFactory::default());
    let (ast, factory) = parser.parse();
    (ast, handler, factory)
}

fn decls(ast: &Ast<u32>) -> Vec<&crate::Decl<u32>> {
    ast.nodes
        .iter()
        .filter_map(|n| match n {
            Node::Decl(d) => Some(d),
            _ => None,
        })
        .collect()
}

#[test]
fn scenario_1_basic_counter_decl() {
    let (ast, handler, factory) = parse_with_factory("counter foo\n");
    assert!(!handler.has_errors());
    let d = decls(&ast);
    assert_eq!(d.len(), 1);
    assert_eq!(d[0].kind, MetricKind::Counter);
    assert_eq!(d[0].name.as_str(), "foo");
    assert!(d[0].keys.is_empty());
    assert!(!d[0].hidden);
    assert_eq!(factory.registered.len(), 1);
}

#[test]
fn scenario_2_by_clause_keys() {
    let (ast, handler) = parse("counter foo by a, b\n");
    assert!(!handler.has_errors());
    let d = decls(&ast);
    let keys: Vec<&str> = d[0].keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn scenario_3_by_clause_keys_are_sorted_ascending() {
    let (ast, handler) = parse("counter foo by b, a\n");
    assert!(!handler.has_errors());
    let d = decls(&ast);
    let keys: Vec<&str> = d[0].keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn scenario_4_hidden_gauge_not_registered() {
    let (ast, handler, factory) = parse_with_factory("hidden gauge g\n");
    assert!(!handler.has_errors());
    let d = decls(&ast);
    assert_eq!(d.len(), 1);
    assert!(d[0].hidden);
    assert_eq!(d[0].kind, MetricKind::Gauge);
    assert!(factory.registered.is_empty());
}

#[test]
fn scenario_5_as_clause_export_name() {
    let (ast, handler) = parse("counter foo as \"exported_foo\"\n");
    assert!(!handler.has_errors());
    let d = decls(&ast);
    assert_eq!(d[0].name.as_str(), "foo");
    assert_eq!(d[0].export_name.unwrap().as_str(), "exported_foo");
}

#[test]
fn scenario_6_whole_match_capref_resolves() {
    let (_ast, handler) = parse("/foo/ { $0++ }");
    assert!(!handler.has_errors());
}

#[test]
fn scenario_7_named_capture_addr_is_one() {
    let (ast, handler) = parse("/(?P<x>a)/ { $x++ }");
    assert!(!handler.has_errors());
    let capref = ast.nodes.iter().find_map(|n| match n {
        Node::Capref(c) if c.name.as_str() == "x" => Some(c),
        _ => None,
    });
    let symbol = capref.unwrap().symbol.as_ref().unwrap();
    assert_eq!(symbol.addr, Some(1));
}

#[test]
fn scenario_8_undefined_capref_error_message() {
    let (_ast, handler) = parse("$unknown++");
    assert!(handler.has_errors());
    let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
    assert!(messages
        .iter()
        .any(|m| m == "Capture group $unknown not defined by prior regular expression in this or an outer scope"));
}

#[test]
fn scenario_9_pattern_concatenation_with_a_const() {
    let (ast, handler) = parse("const PFX /abc/\n/def/ + PFX { }\n");
    assert!(!handler.has_errors());
    let regex = ast.nodes.iter().find_map(|n| match n {
        Node::Regex(r) => Some(r),
        _ => None,
    });
    assert_eq!(regex.unwrap().pattern.as_str(), "defabc");
}

#[test]
fn scenario_9_nested_const_substitution() {
    let (ast, handler) = parse("const A /x/\nconst B /y/ + A\n/z/ + B { }\n");
    assert!(!handler.has_errors());
    let regex = ast.nodes.iter().find_map(|n| match n {
        Node::Regex(r) => Some(r),
        _ => None,
    });
    assert_eq!(regex.unwrap().pattern.as_str(), "zyx");
}

#[test]
fn unknown_const_in_pattern_reports_diagnostic_and_substitutes_empty() {
    let (ast, handler) = parse("/abc/ + UNKNOWN { }\n");
    assert!(handler.has_errors());
    let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
    assert!(messages.iter().any(|m| m == "Constant 'UNKNOWN' not defined."));
    let regex = ast.nodes.iter().find_map(|n| match n {
        Node::Regex(r) => Some(r),
        _ => None,
    });
    assert_eq!(regex.unwrap().pattern.as_str(), "abc");
}

#[test]
fn scenario_10_unterminated_regex_is_invalid() {
    let (_ast, handler) = parse("/foo\n");
    assert!(handler.has_errors());
    let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
    assert!(messages.iter().any(|m| m == "Unterminated regular expression: \"/foo\""));
}

#[test]
fn scenario_11_unexpected_input_character() {
    let (_ast, handler) = parse("?");
    assert!(handler.has_errors());
    let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
    assert!(messages.iter().any(|m| m == "Unexpected input: '?'"));
}

#[test]
fn scenario_12_def_and_deco_resolve() {
    let (ast, handler) = parse("def D { }\n@D { }\n");
    assert!(!handler.has_errors());
    let deco = ast.nodes.iter().find_map(|n| match n {
        Node::Deco(d) => Some(d),
        _ => None,
    });
    assert!(deco.unwrap().target.is_some());
}

#[test]
fn scenario_12_undefined_decorator_errors() {
    let (_ast, handler) = parse("@E { }\n");
    assert!(handler.has_errors());
    let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
    assert!(messages.iter().any(|m| m == "Decorator E not defined"));
}

#[test]
fn undeclared_identifier_error_message() {
    let (_ast, handler) = parse("foo++\n");
    assert!(handler.has_errors());
    let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
    assert!(messages.iter().any(|m| m == "Identifier 'foo' not declared."));
}

#[test]
fn scope_is_balanced_after_a_successful_parse() {
    let (_ast, handler) = parse("counter c\n/x/ { counter d }\n");
    assert!(!handler.has_errors());
}

#[test]
fn else_body_does_not_see_sibling_then_body_symbols() {
    let (_ast, handler) = parse("/x/ { counter a } else { a++ }\n");
    assert!(handler.has_errors());
}

#[test]
fn def_body_symbol_not_visible_outside_def() {
    let (_ast, handler) = parse("def D { counter inner }\ninner++\n");
    assert!(handler.has_errors());
}

#[test]
fn capref_from_outer_regex_resolves_inside_nested_cond() {
    let (_ast, handler) = parse("/(?P<x>a)/ { /y/ { $x++ } }\n");
    assert!(!handler.has_errors());
}

#[test]
fn error_recovery_continues_past_a_bad_statement() {
    let (ast, handler) = parse("counter foo\n?\ncounter bar\n");
    assert!(handler.has_errors());
    let names: Vec<&str> = decls(&ast).iter().map(|d| d.name.as_str()).collect();
    assert!(names.contains(&"foo"));
    assert!(names.contains(&"bar"));
}
