//! Statement parsing.
//!
//! PPL is line-oriented: optional trailing pieces (bare arguments, array
//! dimensions, initializers, `NEXT` variables, `RETURN` values) attach only
//! on the same line as their introducing token. The two grammar ambiguities
//! owned by this module are resolved with bounded lookahead: the single-line
//! vs. block `IF` form and the three-way reading of a statement that starts
//! with an identifier.

use ppl_syntax::SyntaxKind::{self, *};
use ppl_syntax::SyntaxSet;

use super::exprs;
use crate::parser::Parser;

/// Keywords that close an enclosing block. Statement lists stop at any of
/// them so a missing closer is reported by the construct that wanted it
/// instead of being swallowed as a bad statement.
const BLOCK_CLOSERS: SyntaxSet = SyntaxSet::new([
    ELSEIF_KW,
    ELSE_KW,
    ENDIF_KW,
    CASE_KW,
    DEFAULT_KW,
    ENDSELECT_KW,
    ENDWHILE_KW,
    UNTIL_KW,
    ENDLOOP_KW,
    NEXT_KW,
    ENDFUNC_KW,
    ENDPROC_KW,
]);

pub(crate) fn statement_list(p: &mut Parser, follow: SyntaxSet) {
    let stop = BLOCK_CLOSERS.union(&follow);
    while !p.at(EOF) && !p.at_set(stop) {
        statement(p);
    }
}

/// Always consumes at least one token.
pub(crate) fn statement(p: &mut Parser) {
    match p.peek_kind() {
        // `TYPE_NAME …` is claimed by variable declarations before any other
        // statement form gets a look.
        TYPE_NAME => variable_declaration(p),
        LET_KW => let_statement(p),
        IDENT => ident_statement(p),
        BUILTIN_STATEMENT => predefined_call(p),
        IF_KW => if_statement(p),
        SELECT_KW => select_statement(p),
        WHILE_KW => while_statement(p),
        REPEAT_KW => repeat_until_statement(p),
        LOOP_KW => loop_block_statement(p),
        FOR_KW => for_block_statement(p),
        GOTO_KW => jump_statement(p, GOTO_STATEMENT),
        GOSUB_KW => jump_statement(p, GOSUB_STATEMENT),
        RETURN_KW => return_statement(p),
        BREAK_KW => keyword_statement(p, BREAK_STATEMENT),
        CONTINUE_KW => keyword_statement(p, CONTINUE_STATEMENT),
        END_KW => keyword_statement(p, END_STATEMENT),
        STOP_KW => keyword_statement(p, STOP_STATEMENT),
        BEGIN_KW => block_statement(p),
        COLON => label(p),
        kind if exprs::EXPR_FIRST.contains(kind) => expression_statement(p),
        _ => p.error_and_bump("expected a statement"),
    }
}

pub(crate) fn variable_declaration(p: &mut Parser) {
    let m = p.start();
    type_ref(p);
    if !p.at_line_start() && p.at(IDENT) {
        p.advance();
    } else {
        p.error("expected a variable name");
    }
    if p.at(LEFT_PAREN) && !p.at_line_start() {
        array_dimensions(p);
    }
    if p.at(EQ) && !p.at_line_start() {
        p.advance();
        exprs::expr(p);
    }
    m.complete(p, VARIABLE_DECLARATION);
}

pub(crate) fn type_ref(p: &mut Parser) {
    if p.at(TYPE_NAME) {
        let m = p.start();
        p.advance();
        m.complete(p, TYPE);
    } else {
        p.error("expected a type name");
    }
}

pub(crate) fn array_dimensions(p: &mut Parser) {
    let m = p.start();
    p.advance(); // '('
    exprs::expr(p);
    while p.eat(COMMA) {
        exprs::expr(p);
    }
    p.expect(RIGHT_PAREN, "expected `)` to close the dimension list");
    m.complete(p, ARRAY_DIMENSIONS);
}

fn let_statement(p: &mut Parser) {
    let m = p.start();
    p.eat(LET_KW);
    exprs::expr(p);
    if p.peek_kind().is_assign_op() {
        p.advance();
    } else {
        p.error("expected an assignment operator");
    }
    exprs::expr(p);
    m.complete(p, LET_STATEMENT);
}

/// A statement whose first token is an identifier is one of three things.
/// A bounded scan over the postfix chain (parenthesized groups, `.member`
/// links) decides without backtracking: an assignment operator after the
/// chain makes it a `LET`-less assignment, a plain call shape a procedure
/// call, anything else an expression statement.
fn ident_statement(p: &mut Parser) {
    let mut n = 1;
    let mut groups = 0usize;
    let mut members = 0usize;
    'scan: loop {
        match p.nth(n) {
            LEFT_PAREN if !p.nth_at_line_start(n) => {
                groups += 1;
                let mut depth = 1;
                n += 1;
                while depth > 0 {
                    match p.nth(n) {
                        LEFT_PAREN => depth += 1,
                        RIGHT_PAREN => depth -= 1,
                        EOF => break 'scan,
                        _ => {}
                    }
                    n += 1;
                }
            }
            DOT if !p.nth_at_line_start(n) && p.nth(n + 1) == IDENT => {
                members += 1;
                n += 2;
            }
            _ => break,
        }
    }

    let after = p.nth(n);
    if after.is_assign_op() {
        let_statement(p);
    } else if members == 0 && groups <= 1 && exprs::binary_bp(after).is_none() {
        procedure_call(p);
    } else {
        expression_statement(p);
    }
}

fn procedure_call(p: &mut Parser) {
    let m = p.start();
    p.advance(); // name
    call_args(p);
    m.complete(p, PROCEDURE_CALL);
}

fn predefined_call(p: &mut Parser) {
    let m = p.start();
    p.advance(); // builtin name
    call_args(p);
    m.complete(p, PREDEFINED_CALL);
}

/// Optional argument tail of a call statement, always on the call's line.
/// A leading parenthesized group is the whole argument list only when
/// nothing continues it on the same line; otherwise it is the first bare
/// argument, as in `PRINTLN (a), b`.
fn call_args(p: &mut Parser) {
    if p.at_line_start() {
        return;
    }
    if p.at(LEFT_PAREN) && paren_group_is_whole_args(p) {
        let m = p.start();
        p.advance();
        if !p.at(RIGHT_PAREN) {
            exprs::argument_sequence(p);
        }
        p.expect(RIGHT_PAREN, "expected `)` to close the argument list");
        m.complete(p, PARENTHESIZED_ARGS);
    } else if p.at_set(exprs::EXPR_FIRST) {
        let m = p.start();
        exprs::argument_sequence(p);
        m.complete(p, BARE_ARGS);
    }
}

fn paren_group_is_whole_args(p: &Parser) -> bool {
    let mut n = 1;
    let mut depth = 1;
    while depth > 0 {
        match p.nth(n) {
            LEFT_PAREN => depth += 1,
            RIGHT_PAREN => depth -= 1,
            EOF => return true,
            _ => {}
        }
        n += 1;
    }
    p.nth_at_line_start(n) || (p.nth(n) != COMMA && exprs::binary_bp(p.nth(n)).is_none())
}

/// `THEN` forces the block form. Without it, a condition alone on its line
/// opens a block (an `ENDIF` is then required); otherwise exactly one
/// statement follows on the same line, and an `ELSEIF`/`ELSE`/`ENDIF`
/// immediately after it retroactively turns the whole thing into a block.
fn if_statement(p: &mut Parser) {
    let m = p.start();
    p.advance(); // IF
    exprs::expr(p);

    let block = p.eat(THEN_KW) || p.at_line_start();
    if block {
        statement_list(p, SyntaxSet::EMPTY);
    } else {
        statement(p);
        if !matches!(p.peek_kind(), ELSEIF_KW | ELSE_KW | ENDIF_KW) {
            m.complete(p, IF_SINGLE_LINE_STATEMENT);
            return;
        }
    }

    while p.at(ELSEIF_KW) {
        elseif_block(p);
    }
    if p.at(ELSE_KW) {
        else_block(p);
    }
    p.expect(ENDIF_KW, "expected `ENDIF`");
    m.complete(p, IF_BLOCK_STATEMENT);
}

fn elseif_block(p: &mut Parser) {
    let m = p.start();
    p.advance(); // ELSEIF
    exprs::expr(p);
    p.eat(THEN_KW);
    statement_list(p, SyntaxSet::EMPTY);
    m.complete(p, ELSEIF_BLOCK);
}

fn else_block(p: &mut Parser) {
    let m = p.start();
    p.advance(); // ELSE
    statement_list(p, SyntaxSet::EMPTY);
    m.complete(p, ELSE_BLOCK);
}

fn select_statement(p: &mut Parser) {
    let m = p.start();
    p.advance(); // SELECT
    p.eat(CASE_KW);
    exprs::expr(p); // selector
    statement_list(p, SyntaxSet::EMPTY); // stray statements before the first CASE
    while p.at(CASE_KW) {
        case_block(p);
    }
    if p.at(DEFAULT_KW) {
        default_block(p);
    }
    p.expect(ENDSELECT_KW, "expected `ENDSELECT`");
    m.complete(p, SELECT_STATEMENT);
}

fn case_block(p: &mut Parser) {
    let m = p.start();
    p.advance(); // CASE
    case_specifier_list(p);
    // A colon on the next line is a label, not the optional case colon.
    if p.at(COLON) && !p.at_line_start() {
        p.advance();
    }
    statement_list(p, SyntaxSet::EMPTY);
    m.complete(p, CASE_BLOCK);
}

fn case_specifier_list(p: &mut Parser) {
    let m = p.start();
    case_specifier(p);
    while p.eat(COMMA) {
        case_specifier(p);
    }
    m.complete(p, CASE_SPECIFIER_LIST);
}

fn case_specifier(p: &mut Parser) {
    let m = p.start();
    exprs::expr(p);
    if p.eat(DOT_DOT) {
        exprs::expr(p);
    }
    m.complete(p, CASE_SPECIFIER);
}

fn default_block(p: &mut Parser) {
    let m = p.start();
    p.advance(); // DEFAULT
    if p.at(COLON) && !p.at_line_start() {
        p.advance();
    }
    statement_list(p, SyntaxSet::EMPTY);
    m.complete(p, DEFAULT_BLOCK);
}

fn while_statement(p: &mut Parser) {
    let m = p.start();
    p.advance(); // WHILE
    exprs::expr(p);
    if p.eat(DO_KW) {
        statement_list(p, SyntaxSet::EMPTY);
        p.expect(ENDWHILE_KW, "expected `ENDWHILE`");
        m.complete(p, WHILE_BLOCK_STATEMENT);
    } else {
        statement(p);
        m.complete(p, WHILE_SINGLE_LINE_STATEMENT);
    }
}

fn repeat_until_statement(p: &mut Parser) {
    let m = p.start();
    p.advance(); // REPEAT
    statement_list(p, SyntaxSet::EMPTY);
    p.expect(UNTIL_KW, "expected `UNTIL`");
    exprs::expr(p);
    m.complete(p, REPEAT_UNTIL_STATEMENT);
}

fn loop_block_statement(p: &mut Parser) {
    let m = p.start();
    p.advance(); // LOOP
    statement_list(p, SyntaxSet::EMPTY);
    p.expect(ENDLOOP_KW, "expected `ENDLOOP`");
    m.complete(p, LOOP_BLOCK_STATEMENT);
}

fn for_block_statement(p: &mut Parser) {
    let m = p.start();
    p.advance(); // FOR
    if p.at(IDENT) {
        p.advance();
    } else {
        p.error("expected a loop variable");
    }
    p.expect(EQ, "expected `=`");
    exprs::expr(p);
    p.expect(TO_KW, "expected `TO`");
    exprs::expr(p);
    if p.eat(STEP_KW) {
        exprs::expr(p);
    }
    statement_list(p, SyntaxSet::EMPTY);
    p.expect(NEXT_KW, "expected `NEXT`");
    // The optional repeated variable never moves to the next line.
    if p.at(IDENT) && !p.at_line_start() {
        p.advance();
    }
    m.complete(p, FOR_BLOCK_STATEMENT);
}

fn jump_statement(p: &mut Parser, kind: SyntaxKind) {
    let m = p.start();
    p.advance(); // GOTO / GOSUB
    if p.at(IDENT) && !p.at_line_start() {
        p.advance();
    } else {
        p.error("expected a label name");
    }
    m.complete(p, kind);
}

fn return_statement(p: &mut Parser) {
    let m = p.start();
    p.advance(); // RETURN
    if !p.at_line_start() && p.at_set(exprs::EXPR_FIRST) {
        exprs::expr(p);
    }
    m.complete(p, RETURN_STATEMENT);
}

fn keyword_statement(p: &mut Parser, kind: SyntaxKind) {
    let m = p.start();
    p.advance();
    m.complete(p, kind);
}

fn block_statement(p: &mut Parser) {
    let m = p.start();
    p.advance(); // BEGIN
    statement_list(p, SyntaxSet::new([END_KW]));
    p.expect(END_KW, "expected `END`");
    m.complete(p, BLOCK_STATEMENT);
}

pub(crate) fn label(p: &mut Parser) {
    let m = p.start();
    p.advance(); // ':'
    if p.at(IDENT) && !p.at_line_start() {
        p.advance();
    } else {
        p.error("expected a label name after `:`");
    }
    m.complete(p, LABEL);
}

fn expression_statement(p: &mut Parser) {
    let m = p.start();
    exprs::expr(p);
    m.complete(p, EXPRESSION_STATEMENT);
}
