//! Top-level items: forward declarations, implementations, and everything
//! the statement grammar accepts.

use ppl_syntax::SyntaxKind::{self, *};
use ppl_syntax::SyntaxSet;

use super::{directives, stmts};
use crate::parser::Parser;

pub(crate) fn item(p: &mut Parser) {
    match p.peek_kind() {
        DECLARE_KW => declaration(p),
        FUNCTION_KW => implementation(p, FUNCTION_KW),
        PROCEDURE_KW => implementation(p, PROCEDURE_KW),
        kind if kind.is_directive() => {
            let m = p.start();
            p.error("directives are only allowed before the first item");
            directives::directive(p);
            m.complete(p, ERROR);
        }
        _ => stmts::statement(p),
    }
}

fn declaration(p: &mut Parser) {
    let m = p.start();
    p.advance(); // DECLARE

    let kind = if p.eat(FUNCTION_KW) {
        signature(p);
        stmts::type_ref(p); // return type is mandatory for functions
        FUNCTION_DECLARATION
    } else if p.eat(PROCEDURE_KW) {
        signature(p);
        PROCEDURE_DECLARATION
    } else {
        p.error("expected `FUNCTION` or `PROCEDURE` after `DECLARE`");
        m.complete(p, ERROR);
        return;
    };

    m.complete(p, kind);
}

fn implementation(p: &mut Parser, opener: SyntaxKind) {
    let m = p.start();
    p.advance(); // FUNCTION / PROCEDURE
    signature(p);
    // A type on the signature's line is the return type; on a fresh line it
    // starts a variable declaration in the body.
    if opener == FUNCTION_KW && p.at(TYPE_NAME) && !p.at_line_start() {
        stmts::type_ref(p);
    }

    stmts::statement_list(p, SyntaxSet::EMPTY);

    let (kind, closer, mismatched) = if opener == FUNCTION_KW {
        (FUNCTION_IMPLEMENTATION, ENDFUNC_KW, ENDPROC_KW)
    } else {
        (PROCEDURE_IMPLEMENTATION, ENDPROC_KW, ENDFUNC_KW)
    };
    if p.at(mismatched) {
        // Keep the wrong closer in the tree so consumers can see the
        // mismatch.
        p.error(match closer {
            ENDFUNC_KW => "expected `ENDFUNC`, found `ENDPROC`",
            _ => "expected `ENDPROC`, found `ENDFUNC`",
        });
        p.advance();
    } else if !p.eat(closer) {
        p.error(match closer {
            ENDFUNC_KW => "expected `ENDFUNC`",
            _ => "expected `ENDPROC`",
        });
    }
    m.complete(p, kind);
}

fn signature(p: &mut Parser) {
    if p.at(IDENT) {
        p.advance();
    } else {
        p.error("expected a name");
    }
    p.expect(LEFT_PAREN, "expected `(`");
    if p.at(VAR_KW) || p.at(TYPE_NAME) {
        parameter_list(p);
    }
    p.expect(RIGHT_PAREN, "expected `)` to close the parameter list");
}

fn parameter_list(p: &mut Parser) {
    let m = p.start();
    parameter(p);
    while p.eat(COMMA) {
        parameter(p);
    }
    m.complete(p, PARAMETER_LIST);
}

fn parameter(p: &mut Parser) {
    let m = p.start();
    p.eat(VAR_KW);
    stmts::type_ref(p);
    if p.at(IDENT) {
        p.advance();
    } else {
        p.error("expected a parameter name");
    }
    if p.at(LEFT_PAREN) && !p.at_line_start() {
        stmts::array_dimensions(p);
    }
    m.complete(p, PARAMETER);
}
