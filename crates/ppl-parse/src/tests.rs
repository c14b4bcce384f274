use expect_test::{Expect, expect};
use ppl_syntax::SyntaxNode;
use ppl_syntax::ast::{AstNode, Directive, Expr, Item, SourceFile, Stmt};

use crate::source_file;

fn parse_ok(text: &str) -> SyntaxNode {
    let parse = source_file(text);
    assert_eq!(parse.errors(), &[], "unexpected errors in {text:?}");
    parse.syntax_node()
}

fn items(root: &SyntaxNode) -> Vec<Item> {
    let file = SourceFile::cast(root.clone()).unwrap();
    file.items().collect()
}

fn first_stmt(root: &SyntaxNode) -> Stmt {
    match items(root).into_iter().next().unwrap() {
        Item::Stmt(stmt) => stmt,
        item => panic!("expected a statement, got {:?}", item.syntax().kind()),
    }
}

/// Indented node-kind outline of the tree; tokens are left out.
fn dump(root: &SyntaxNode) -> String {
    fn rec(node: &SyntaxNode, depth: usize, out: &mut String) {
        use std::fmt::Write;
        let _ = writeln!(out, "{:indent$}{:?}", "", node.kind(), indent = depth * 2);
        for child in node.children() {
            rec(&child, depth + 1, out);
        }
    }

    let mut out = String::new();
    rec(root, 0, &mut out);
    out
}

fn check(text: &str, expected: Expect) {
    let root = parse_ok(text);
    expected.assert_eq(&dump(&root));
}

#[test]
fn round_trip_reproduces_the_input() {
    let sources = [
        ";$DEFINE DEBUG TRUE\n;#version=400\n' comment\nPRINTLN \"hi\" ; trailing\n",
        "IF (x) THEN\n  y = 1\nENDIF\n",
        "* star comment\nINTEGER a(5)\n",
        "WHILE (x) DO\n  ~\nENDWHILE\n",
    ];

    for text in sources {
        let parse = source_file(text);
        assert_eq!(parse.syntax_node().text().to_string(), text);
    }
}

#[test]
fn case_insensitive_inputs_have_identical_shapes() {
    let lower = parse_ok("if (x) then\n  y = 1\nendif\n");
    let upper = parse_ok("IF (X) THEN\n  Y = 1\nENDIF\n");
    let mixed = parse_ok("If (X) Then\n  y = 1\nEndIf\n");

    assert_eq!(dump(&lower), dump(&upper));
    assert_eq!(dump(&lower), dump(&mixed));
}

#[test]
fn precedence_follows_the_declared_table() {
    check(
        "a = 1 + 2 * 3",
        expect![[r#"
            SOURCE_FILE
              LET_STATEMENT
                NAME_REF
                BINARY_EXPRESSION
                  CONSTANT
                  BINARY_EXPRESSION
                    CONSTANT
                    CONSTANT
        "#]],
    );
}

#[test]
fn caret_is_left_associative() {
    let root = parse_ok("a = 2 ^ 3 ^ 2");
    let Stmt::Let(stmt) = first_stmt(&root) else { panic!("expected let") };
    let Some(Expr::Binary(outer)) = stmt.value() else { panic!("expected binary value") };

    assert!(matches!(outer.left(), Some(Expr::Binary(_))));
    assert!(matches!(outer.right(), Some(Expr::Constant(_))));
    assert_eq!(outer.op().unwrap().text(), "^");
}

#[test]
fn unary_binds_tighter_than_binary() {
    let root = parse_ok("a = -b + !c");
    let Stmt::Let(stmt) = first_stmt(&root) else { panic!("expected let") };
    let Some(Expr::Binary(sum)) = stmt.value() else { panic!("expected binary value") };

    assert!(matches!(sum.left(), Some(Expr::Unary(_))));
    assert!(matches!(sum.right(), Some(Expr::Unary(_))));
}

#[test]
fn if_without_then_or_closer_is_single_line() {
    check(
        "IF (x) PRINTLN \"a\"",
        expect![[r#"
            SOURCE_FILE
              IF_SINGLE_LINE_STATEMENT
                PARENS_EXPRESSION
                  NAME_REF
                PREDEFINED_CALL
                  BARE_ARGS
                    ARGUMENT_SEQUENCE
                      CONSTANT
        "#]],
    );
}

#[test]
fn then_forces_the_block_form() {
    check(
        "IF (x) THEN PRINTLN \"a\" ENDIF",
        expect![[r#"
            SOURCE_FILE
              IF_BLOCK_STATEMENT
                PARENS_EXPRESSION
                  NAME_REF
                PREDEFINED_CALL
                  BARE_ARGS
                    ARGUMENT_SEQUENCE
                      CONSTANT
        "#]],
    );
}

#[test]
fn reachable_closer_upgrades_to_the_block_form() {
    let root = parse_ok("IF (x) PRINTLN \"a\"\nENDIF");
    assert!(matches!(first_stmt(&root), Stmt::IfBlock(_)));
}

#[test]
fn condition_alone_on_its_line_opens_a_block() {
    let root = parse_ok("IF (x)\n  y = 1\nENDIF\n");
    let Stmt::IfBlock(stmt) = first_stmt(&root) else { panic!("expected block if") };
    assert_eq!(stmt.then_body().count(), 1);
}

#[test]
fn elseif_and_else_chains() {
    let root = parse_ok("IF (x) THEN\n  a = 1\nELSEIF (y) THEN\n  a = 2\nELSE\n  a = 3\nENDIF\n");
    let Stmt::IfBlock(stmt) = first_stmt(&root) else { panic!("expected block if") };

    assert_eq!(stmt.then_body().count(), 1);
    assert_eq!(stmt.elseif_blocks().count(), 1);
    let else_block = stmt.else_block().unwrap();
    assert_eq!(else_block.body().count(), 1);
}

#[test]
fn parenthesized_list_is_dimensions_in_a_declaration() {
    check(
        "INTEGER a(5)",
        expect![[r#"
            SOURCE_FILE
              VARIABLE_DECLARATION
                TYPE
                ARRAY_DIMENSIONS
                  CONSTANT
        "#]],
    );
}

#[test]
fn parenthesized_list_is_arguments_in_call_position() {
    check(
        "a(5)",
        expect![[r#"
            SOURCE_FILE
              PROCEDURE_CALL
                PARENTHESIZED_ARGS
                  ARGUMENT_SEQUENCE
                    CONSTANT
        "#]],
    );
}

#[test]
fn variable_declaration_with_initializer() {
    let root = parse_ok("STRING who = \"Bob\"");
    let Stmt::VariableDeclaration(decl) = first_stmt(&root) else { panic!("expected decl") };

    assert_eq!(decl.ty().unwrap().name_token().unwrap().text(), "STRING");
    assert_eq!(decl.name().unwrap().text(), "who");
    assert!(decl.dimensions().is_none());
    assert_eq!(decl.initializer().unwrap().syntax().text().to_string(), "\"Bob\"");
}

#[test]
fn while_forms() {
    let root = parse_ok("WHILE (x) y = 1");
    let Stmt::WhileSingleLine(stmt) = first_stmt(&root) else { panic!("expected single-line") };
    assert!(matches!(stmt.body_statement(), Some(Stmt::Let(_))));

    let root = parse_ok("WHILE (x) DO\n  y = 1\nENDWHILE\n");
    let Stmt::WhileBlock(stmt) = first_stmt(&root) else { panic!("expected block") };
    assert_eq!(stmt.body().count(), 1);
}

#[test]
fn bad_token_produces_one_local_error_node() {
    let parse = source_file("WHILE (x) DO\n  ~\n  PRINTLN \"ok\"\nENDWHILE\n");
    assert_eq!(parse.errors().len(), 1);

    let root = parse.syntax_node();
    expect![[r#"
        SOURCE_FILE
          WHILE_BLOCK_STATEMENT
            PARENS_EXPRESSION
              NAME_REF
            ERROR
            PREDEFINED_CALL
              BARE_ARGS
                ARGUMENT_SEQUENCE
                  CONSTANT
    "#]]
    .assert_eq(&dump(&root));

    // The loop still owns its closer.
    let while_node = root.first_child().unwrap();
    assert!(while_node.text().to_string().ends_with("ENDWHILE"));
}

#[test]
fn hex_and_color_literals_are_constants() {
    let root = parse_ok("a = 0x1F + 1Fh + @x0F");
    let Stmt::Let(stmt) = first_stmt(&root) else { panic!("expected let") };
    let value = stmt.value().unwrap();
    let constants: Vec<_> = value
        .syntax()
        .descendants()
        .filter(|node| node.kind() == ppl_syntax::SyntaxKind::CONSTANT)
        .map(|node| node.text().to_string())
        .collect();
    assert_eq!(constants, ["0x1F", "1Fh", "@x0F"]);
}

#[test]
fn preprocessor_section_closes_at_the_first_item() {
    let text = ";$DEFINE DEBUG TRUE\n;$INCLUDE \"util.ppl\"\n;#version=400\nPRINTLN \"hi\"\n;$UNDEF DEBUG\n";
    let parse = source_file(text);
    assert_eq!(parse.errors().len(), 1);
    assert!(parse.errors()[0].message().contains("before the first item"));

    let root = parse.syntax_node();
    expect![[r#"
        SOURCE_FILE
          PREPROCESSOR_SECTION
            DEFINE_DIRECTIVE
              CONSTANT
            INCLUDE_DIRECTIVE
            VERSION_DIRECTIVE
              CONSTANT
          PREDEFINED_CALL
            BARE_ARGS
              ARGUMENT_SEQUENCE
                CONSTANT
          ERROR
            UNDEF_DIRECTIVE
    "#]]
    .assert_eq(&dump(&root));
}

#[test]
fn directive_fields() {
    let root = parse_ok(";$DEFINE LIMIT 5\n;$IF LIMIT > 3\n;$ELSE\n;$ENDIF\n");
    let file = SourceFile::cast(root).unwrap();
    let section = file.preprocessor_section().unwrap();
    let directives: Vec<_> = section.directives().collect();
    assert_eq!(directives.len(), 4);

    let Directive::Define(define) = &directives[0] else { panic!("expected define") };
    assert_eq!(define.name().unwrap().text(), "LIMIT");
    assert!(matches!(define.value(), Some(Expr::Constant(_))));

    let Directive::If(directive) = &directives[1] else { panic!("expected if directive") };
    assert!(matches!(directive.condition(), Some(Expr::Binary(_))));
}

#[test]
fn labels_and_jumps() {
    let root = parse_ok(":top\nGOTO top\nGOSUB top\n");
    let items = items(&root);
    assert_eq!(items.len(), 3);

    let Item::Label(label) = &items[0] else { panic!("expected label") };
    assert_eq!(label.name().unwrap().text(), "top");

    let Item::Stmt(Stmt::Goto(goto)) = &items[1] else { panic!("expected goto") };
    assert_eq!(goto.label().unwrap().text(), "top");

    assert!(matches!(&items[2], Item::Stmt(Stmt::Gosub(_))));
}

#[test]
fn function_declaration_and_implementation() {
    let text = "DECLARE FUNCTION add2(INTEGER a, INTEGER b) INTEGER\n\n\
                FUNCTION add2(INTEGER a, INTEGER b) INTEGER\n  RETURN a + b\nENDFUNC\n";
    let root = parse_ok(text);
    let items = items(&root);

    let Item::FunctionDeclaration(decl) = &items[0] else { panic!("expected declaration") };
    assert_eq!(decl.name().unwrap().text(), "add2");
    assert_eq!(decl.parameter_list().unwrap().parameters().count(), 2);
    assert!(decl.return_type().is_some());

    let Item::FunctionImplementation(imp) = &items[1] else { panic!("expected implementation") };
    assert!(imp.return_type().is_some());
    let body: Vec<_> = imp.body().collect();
    assert_eq!(body.len(), 1);
    let Stmt::Return(ret) = &body[0] else { panic!("expected return") };
    assert!(matches!(ret.value(), Some(Expr::Binary(_))));
    assert_eq!(imp.closer().unwrap().text(), "ENDFUNC");
}

#[test]
fn mismatched_closer_keeps_the_tree_and_reports() {
    let parse = source_file("PROCEDURE ping()\n  PRINTLN \"x\"\nENDFUNC\n");
    assert_eq!(parse.errors().len(), 1);
    assert!(parse.errors()[0].message().contains("ENDPROC"));

    let root = parse.syntax_node();
    let Item::ProcedureImplementation(imp) = items(&root).into_iter().next().unwrap() else {
        panic!("expected implementation");
    };
    assert_eq!(imp.closer().unwrap().text(), "ENDFUNC");
}

#[test]
fn select_statement_shape() {
    let text = "SELECT CASE (x)\n  CASE 1, 3 .. 5\n    y = 1\n  CASE 2\n    y = 2\n  DEFAULT\n    y = 3\nENDSELECT\n";
    let root = parse_ok(text);
    let Stmt::Select(select) = first_stmt(&root) else { panic!("expected select") };

    let cases: Vec<_> = select.case_blocks().collect();
    assert_eq!(cases.len(), 2);

    let specifiers: Vec<_> = cases[0].specifier_list().unwrap().specifiers().collect();
    assert_eq!(specifiers.len(), 2);
    assert!(!specifiers[0].is_range());
    assert!(specifiers[1].is_range());

    assert!(select.default_block().is_some());
}

#[test]
fn for_loop_fields() {
    let root = parse_ok("FOR i = 1 TO 10 STEP 2\n  total = total + i\nNEXT i\n");
    let Stmt::ForBlock(stmt) = first_stmt(&root) else { panic!("expected for") };

    assert_eq!(stmt.var().unwrap().text(), "i");
    assert!(stmt.start().is_some());
    assert!(stmt.end().is_some());
    assert!(stmt.step().is_some());
    assert_eq!(stmt.body().count(), 1);
    assert_eq!(stmt.next_var().unwrap().text(), "i");
}

#[test]
fn for_loop_without_step_has_no_step_expr() {
    let root = parse_ok("FOR i = 1 TO 10\nNEXT\n");
    let Stmt::ForBlock(stmt) = first_stmt(&root) else { panic!("expected for") };
    assert!(stmt.step().is_none());
    assert!(stmt.next_var().is_none());
}

#[test]
fn repeat_and_loop_blocks() {
    let root = parse_ok("REPEAT\n  x = x - 1\nUNTIL (x == 0)\nLOOP\n  BREAK\nENDLOOP\n");
    let items = items(&root);

    let Item::Stmt(Stmt::RepeatUntil(repeat)) = &items[0] else { panic!("expected repeat") };
    assert_eq!(repeat.body().count(), 1);
    assert!(matches!(repeat.condition(), Some(Expr::Parens(_))));

    let Item::Stmt(Stmt::LoopBlock(block)) = &items[1] else { panic!("expected loop") };
    assert!(matches!(block.body().next(), Some(Stmt::Break(_))));
}

#[test]
fn begin_end_block() {
    let root = parse_ok("BEGIN\n  x = 1\nEND\n");
    let Stmt::Block(block) = first_stmt(&root) else { panic!("expected block") };
    assert_eq!(block.body().count(), 1);
}

#[test]
fn return_value_stays_on_its_line() {
    let root = parse_ok("RETURN\nx = 1\n");
    let Stmt::Return(ret) = first_stmt(&root) else { panic!("expected return") };
    assert!(ret.value().is_none());

    let root = parse_ok("RETURN x + 1\n");
    let Stmt::Return(ret) = first_stmt(&root) else { panic!("expected return") };
    assert!(ret.value().is_some());
}

#[test]
fn calls_members_and_indexing_chain() {
    check(
        "a = b.c(d) + foo(1, 2)",
        expect![[r#"
            SOURCE_FILE
              LET_STATEMENT
                NAME_REF
                BINARY_EXPRESSION
                  INDEX_EXPRESSION
                    MEMBER_REFERENCE
                      NAME_REF
                    NAME_REF
                  CALL_EXPRESSION
                    NAME_REF
                    ARGUMENT_SEQUENCE
                      CONSTANT
                      CONSTANT
        "#]],
    );
}

#[test]
fn leading_paren_group_can_be_the_first_bare_argument() {
    check(
        "PRINTLN (x), y",
        expect![[r#"
            SOURCE_FILE
              PREDEFINED_CALL
                BARE_ARGS
                  ARGUMENT_SEQUENCE
                    PARENS_EXPRESSION
                      NAME_REF
                    NAME_REF
        "#]],
    );
}

#[test]
fn let_keyword_is_optional() {
    let explicit = parse_ok("LET x = 1");
    let implicit = parse_ok("x = 1");
    let Stmt::Let(stmt) = first_stmt(&explicit) else { panic!("expected let") };
    assert_eq!(stmt.op().unwrap().text(), "=");
    assert!(matches!(first_stmt(&implicit), Stmt::Let(_)));
}

#[test]
fn compound_assignment_targets_an_index() {
    let root = parse_ok("a(1).b += 2");
    let Stmt::Let(stmt) = first_stmt(&root) else { panic!("expected let") };
    assert!(matches!(stmt.target(), Some(Expr::MemberRef(_))));
    assert_eq!(stmt.op().unwrap().text(), "+=");
}

#[test]
fn statement_head_expression_falls_through() {
    let root = parse_ok("a + b\n");
    assert!(matches!(first_stmt(&root), Stmt::Expression(_)));
}
