use wpformal::stmt::Statement;
use wplang::parse_program;

fn single(source: &str) -> Statement {
    let mut statements = parse_program(source).unwrap();
    assert_eq!(statements.len(), 1, "expected one statement in {source:?}");
    statements.remove(0)
}

#[test]
fn simple_assignment() {
    assert_eq!(single("x := 5"), Statement::assign("x", "5"));
}

#[test]
fn trailing_semicolon_is_dropped() {
    assert_eq!(single("y := x + 1;"), Statement::assign("y", "x + 1"));
    assert_eq!(single("  z := 2 ;;  "), Statement::assign("z", "2"));
}

#[test]
fn conditional_header_keeps_full_condition() {
    assert_eq!(
        single("if (a <= b && c == d)"),
        Statement::branch("a <= b && c == d", [], [])
    );
}

#[test]
fn condition_runs_to_the_matching_parenthesis() {
    assert_eq!(
        single("if ((x + 1) * 2 > y) {"),
        Statement::branch("(x + 1) * 2 > y", [], [])
    );
}

#[test]
fn mixed_program_keeps_source_order() {
    let source = "x := 1;\nif (x > 0)\n  y := x;\nelse\n  y := 0;\n";
    let statements = parse_program(source).unwrap();
    assert_eq!(statements.len(), 4);
    assert!(statements[0].is_assignment());
    assert!(statements[1].is_conditional());
    assert_eq!(statements[2], Statement::assign("y", "x"));
    assert_eq!(statements[3], Statement::assign("y", "0"));
}

#[test]
fn three_statement_program() {
    let source = "a := 1;\nif (a > b)\nb := a;";
    let statements = parse_program(source).unwrap();
    assert_eq!(statements.len(), 3);
    assert!(statements[0].is_assignment());
    assert!(statements[1].is_conditional());
    assert!(statements[2].is_assignment());
}

#[test]
fn blank_input_has_no_statements() {
    assert!(parse_program("").unwrap().is_empty());
    assert!(parse_program("   \n\t\n").unwrap().is_empty());
}

#[test]
fn unrecognized_lines_are_skipped() {
    let statements = parse_program("begin\n{\nx := 1\n}\nend").unwrap();
    assert_eq!(statements, vec![Statement::assign("x", "1")]);
}

#[test]
fn comments_are_ignored() {
    let source = "// setup\nx := 1; // first\n/* y := 2;\n   z := 3; */\nw := x / 2;";
    let statements = parse_program(source).unwrap();
    assert_eq!(
        statements,
        vec![Statement::assign("x", "1"), Statement::assign("w", "x / 2")]
    );
}

#[test]
fn unterminated_block_comment_is_an_error() {
    let errors = parse_program("x := 1;\n/* never closed\ny := 2;").unwrap_err();
    assert_eq!(errors.0.len(), 1);
    assert_eq!(errors.0[0].line, 2);
    assert_eq!(errors.0[0].start, 8);
}

#[test]
fn missing_expression_is_located() {
    let source = "x := 1;\n   y :=  ;";
    let errors = parse_program(source).unwrap_err();
    assert_eq!(errors.0.len(), 1);
    let error = &errors.0[0];
    assert_eq!(error.line, 2);
    assert_eq!(&source[error.start..error.end], "y :=  ;");
    assert!(error.message.contains("missing expression"));
}

#[test]
fn unbalanced_condition_is_an_error() {
    let errors = parse_program("if (x > (0)").unwrap_err();
    assert_eq!(errors.0[0].line, 1);
}

#[test]
fn every_bad_line_is_reported() {
    let errors = parse_program("x := := 1\nif ()\nz := 3").unwrap_err();
    let lines: Vec<usize> = errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![1, 2]);
}

#[test]
fn text_after_condition_is_dropped() {
    assert_eq!(
        single("if (x > 0) y := 1;"),
        Statement::branch("x > 0", [], [])
    );
    assert_eq!(
        single("if (x1 >= x2) { max := x1; }"),
        Statement::branch("x1 >= x2", [], [])
    );
    assert_eq!(single("if (a) {} else {}"), Statement::branch("a", [], []));
    assert_eq!(single("if (a) then"), Statement::branch("a", [], []));
}

#[test]
fn empty_condition_is_still_an_error() {
    let errors = parse_program("if () y := 1;").unwrap_err();
    assert!(errors.0[0].message.contains("empty condition"));
}
