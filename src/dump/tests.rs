use super::*;
use crate::tree::{Statement, Tree};

/// Import `statement` into a scratch tree and dump it
fn render(statement: &Statement, options: &DumpOptions) -> String {
    let mut tree = Tree::new("test", "module");
    let id = tree.import(statement);
    dump(&tree, id, options)
}

fn stmt(keyword: &str, argument: &str) -> Statement {
    Statement::new(keyword).with_argument(argument)
}

/// Assert that dumping produces the expected output (trailing whitespace trimmed)
fn assert_dump(statement: &Statement, expected: &str) {
    let result = render(statement, &DumpOptions::default());
    assert_eq!(
        result.trim_end(),
        expected,
        "\n=== Expected ===\n{}\n=== Got ===\n{}",
        expected,
        result.trim_end()
    );
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_dump_argument_less_statement() {
    assert_dump(&Statement::new("input"), "input;");
}

#[test]
fn test_dump_identifier_argument_is_bare() {
    assert_dump(&stmt("prefix", "test"), "prefix test;");
    assert_dump(&stmt("type", "string"), "type string;");
}

#[test]
fn test_dump_text_argument_is_quoted() {
    assert_dump(&stmt("namespace", "urn:yang:test"), "namespace \"urn:yang:test\";");
    assert_dump(&stmt("description", "username"), "description \"username\";");
}

#[test]
fn test_dump_extension_argument_is_quoted() {
    assert_dump(&stmt("ext:c-define", "INTERFACES"), "ext:c-define \"INTERFACES\";");
}

#[test]
fn test_dump_identifier_with_spaces_is_quoted() {
    assert_dump(&stmt("leaf", "two words"), "leaf \"two words\";");
    assert_dump(&stmt("leaf", ""), "leaf \"\";");
}

#[test]
fn test_dump_escapes_quotes_and_backslashes() {
    assert_dump(
        &stmt("description", "say \"hi\" \\ bye"),
        "description \"say \\\"hi\\\" \\\\ bye\";",
    );
}

#[test]
fn test_dump_nested_block() {
    let module = stmt("module", "test")
        .with_child(stmt("namespace", "urn:yang:test"))
        .with_child(stmt("prefix", "test"));
    assert_dump(
        &module,
        "module test {\n  namespace \"urn:yang:test\";\n  prefix test;\n}",
    );
}

#[test]
fn test_dump_deeply_nested_argument_less_block() {
    let rpc = stmt("rpc", "perform").with_child(
        Statement::new("input")
            .with_child(stmt("leaf", "name").with_child(stmt("type", "string"))),
    );
    assert_dump(
        &rpc,
        "rpc perform {\n  input {\n    leaf name {\n      type string;\n    }\n  }\n}",
    );
}

#[test]
fn test_dump_multiline_argument_aligns_continuation() {
    let description = stmt("description", "first line\nsecond line");
    assert_dump(
        &description,
        "description \"first line\n             second line\";",
    );
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn test_dump_line_comment() {
    assert_dump(&stmt("_comment", "// comment test"), "// comment test");
}

#[test]
fn test_dump_block_comment_aligns_stars() {
    assert_dump(&stmt("_comment", "/*\n* a\n* b\n*/"), "/*\n * a\n * b\n */");
}

#[test]
fn test_dump_blank_line_is_empty() {
    let result = render(&stmt("_comment", " "), &DumpOptions::default());
    assert_eq!(result, "\n");
}

#[test]
fn test_dump_comment_is_indented() {
    let container = stmt("container", "c")
        .with_child(stmt("_comment", "// inside"))
        .with_child(stmt("leaf", "l"));
    assert_dump(&container, "container c {\n  // inside\n  leaf l;\n}");
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_dump_with_tabs() {
    let options = DumpOptions {
        insert_spaces: false,
        ..DumpOptions::default()
    };
    let container = stmt("container", "c").with_child(stmt("leaf", "l"));
    assert_eq!(render(&container, &options), "container c {\n\tleaf l;\n}\n");
}

#[test]
fn test_dump_with_base_indent() {
    let options = DumpOptions {
        base_indent: 1,
        ..DumpOptions::default()
    };
    assert_eq!(render(&stmt("leaf", "l"), &options), "  leaf l;\n");
}

#[test]
fn test_dump_canonical_orders_module_header() {
    let module = stmt("module", "test")
        .with_child(stmt("leaf", "data"))
        .with_child(stmt("prefix", "test"))
        .with_child(stmt("_comment", "// the namespace"))
        .with_child(stmt("namespace", "urn:yang:test"));

    let result = render(&module, &DumpOptions::canonical());
    assert_eq!(
        result,
        "module test {\n  // the namespace\n  namespace \"urn:yang:test\";\n  prefix test;\n  leaf data;\n}\n"
    );
}

#[test]
fn test_dump_default_keeps_insertion_order() {
    let module = stmt("module", "test")
        .with_child(stmt("prefix", "test"))
        .with_child(stmt("namespace", "urn:yang:test"));
    assert_dump(
        &module,
        "module test {\n  prefix test;\n  namespace \"urn:yang:test\";\n}",
    );
}

#[test]
fn test_dump_is_deterministic() {
    let module = stmt("module", "test").with_child(stmt("leaf", "a"));
    let options = DumpOptions::default();
    assert_eq!(render(&module, &options), render(&module, &options));
}

#[test]
fn test_needs_quoting() {
    assert!(!needs_quoting("test"));
    assert!(needs_quoting("a b"));
    assert!(needs_quoting("a;b"));
    assert!(needs_quoting("a//b"));
    assert!(needs_quoting(""));
}
