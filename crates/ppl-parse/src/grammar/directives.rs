//! The optional preprocessor section: a run of `;$…` / `;#` lines at the top
//! of the file. The section closes at the first non-directive item and is
//! never re-entered; grouping of `;$IF`/`;$ENDIF` pairs is left to consumers.

use ppl_syntax::SyntaxKind::*;

use super::exprs;
use crate::parser::Parser;

pub(crate) fn preprocessor_section(p: &mut Parser) {
    let m = p.start();
    while p.peek_kind().is_directive() {
        directive(p);
    }
    m.complete(p, PREPROCESSOR_SECTION);
}

pub(crate) fn directive(p: &mut Parser) {
    let m = p.start();
    let head = p.peek_kind();
    p.advance();

    let kind = match head {
        DEFINE_DIR => {
            name(p, "expected a name after `;$DEFINE`");
            if !p.at_line_start() && p.at_set(exprs::EXPR_FIRST) {
                exprs::expr(p);
            }
            DEFINE_DIRECTIVE
        }
        UNDEF_DIR => {
            name(p, "expected a name after `;$UNDEF`");
            UNDEF_DIRECTIVE
        }
        INCLUDE_DIR => {
            if !p.at_line_start() && p.at(STRING_LITERAL) {
                p.advance();
            } else {
                p.error("expected a quoted include path");
            }
            INCLUDE_DIRECTIVE
        }
        IF_DIR => {
            condition(p);
            IF_DIRECTIVE
        }
        ELIF_DIR => {
            condition(p);
            ELIF_DIRECTIVE
        }
        ELSE_DIR => ELSE_DIRECTIVE,
        ENDIF_DIR => ENDIF_DIRECTIVE,
        VERSION_DIR => {
            name(p, "expected a key after `;#`");
            p.expect(EQ, "expected `=` between key and value");
            if !p.at_line_start() && p.at_set(exprs::EXPR_FIRST) {
                exprs::expr(p);
            } else {
                p.error("expected a value expression");
            }
            VERSION_DIRECTIVE
        }
        _ => unreachable!("directive() called on a non-directive token"),
    };

    m.complete(p, kind);
}

fn name(p: &mut Parser, message: &str) {
    if !p.at_line_start() && p.at(IDENT) {
        p.advance();
    } else {
        p.error(message);
    }
}

fn condition(p: &mut Parser) {
    if !p.at_line_start() && p.at_set(exprs::EXPR_FIRST) {
        exprs::expr(p);
    } else {
        p.error("expected a condition expression");
    }
}
