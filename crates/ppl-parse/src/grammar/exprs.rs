//! Pratt expression parsing.
//!
//! Every binary operator associates to the left, `^`/`**` included. Unary
//! operators bind tighter than any binary operator and nest to the right;
//! postfix pieces (call/index argument lists and `.member` links) bind
//! tightest and only attach on the same line as the expression they extend.

use ppl_syntax::SyntaxKind::{self, *};
use ppl_syntax::SyntaxSet;

use crate::parser::{CompletedMarker, Parser};

pub(crate) const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    IDENT,
    BUILTIN_FUNCTION,
    INT_NUMBER,
    FLOAT_NUMBER,
    HEX_NUMBER,
    STRING_LITERAL,
    COLOR_CODE,
    TRUE_KW,
    FALSE_KW,
    LEFT_PAREN,
    BANG,
    NOT_KW,
    MINUS,
    PLUS,
]);

pub(crate) fn expr(p: &mut Parser) -> Option<CompletedMarker> {
    expr_bp(p, 1)
}

/// Binding power of `kind` as a binary operator, lowest (`||`) to highest
/// (`^`/`**`).
pub(crate) fn binary_bp(kind: SyntaxKind) -> Option<u8> {
    let bp = match kind {
        PIPE_PIPE => 1,
        AMP_AMP => 2,
        PIPE => 3,
        AMP => 4,
        EQ_EQ | BANG_EQ | LT_GT => 5,
        LT | GT | LT_EQ | GT_EQ => 6,
        PLUS | MINUS => 7,
        STAR | SLASH | PERCENT => 8,
        CARET | STAR_STAR => 9,
        _ => return None,
    };
    Some(bp)
}

fn expr_bp(p: &mut Parser, min_bp: u8) -> Option<CompletedMarker> {
    let mut lhs = unary_expr(p)?;

    while let Some(bp) = binary_bp(p.peek_kind()) {
        if bp < min_bp {
            break;
        }
        let m = lhs.precede(p);
        p.advance();
        expr_bp(p, bp + 1);
        lhs = m.complete(p, BINARY_EXPRESSION);
    }

    Some(lhs)
}

fn unary_expr(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        BANG | NOT_KW | MINUS | PLUS => {
            let m = p.start();
            p.advance();
            unary_expr(p);
            Some(m.complete(p, UNARY_EXPRESSION))
        }
        _ => postfix_expr(p),
    }
}

fn postfix_expr(p: &mut Parser) -> Option<CompletedMarker> {
    let mut lhs = primary_expr(p)?;

    loop {
        match p.peek_kind() {
            LEFT_PAREN if !p.at_line_start() => {
                // A parenthesized list after a plain name is a call; after
                // any other expression it indexes.
                let call = lhs.kind() == NAME_REF;
                let m = lhs.precede(p);
                p.advance();
                if call {
                    if !p.at(RIGHT_PAREN) {
                        argument_sequence(p);
                    }
                    p.expect(RIGHT_PAREN, "expected `)` to close the argument list");
                    lhs = m.complete(p, CALL_EXPRESSION);
                } else {
                    expr(p);
                    while p.eat(COMMA) {
                        expr(p);
                    }
                    p.expect(RIGHT_PAREN, "expected `)` to close the index list");
                    lhs = m.complete(p, INDEX_EXPRESSION);
                }
            }
            DOT if !p.at_line_start() => {
                let m = lhs.precede(p);
                p.advance();
                if p.at(IDENT) {
                    p.advance();
                } else {
                    p.error("expected a member name after `.`");
                }
                lhs = m.complete(p, MEMBER_REFERENCE);
            }
            _ => break,
        }
    }

    Some(lhs)
}

pub(crate) fn argument_sequence(p: &mut Parser) {
    let m = p.start();
    expr(p);
    while p.eat(COMMA) {
        expr(p);
    }
    m.complete(p, ARGUMENT_SEQUENCE);
}

fn primary_expr(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        IDENT | BUILTIN_FUNCTION => {
            let m = p.start();
            p.advance();
            Some(m.complete(p, NAME_REF))
        }
        INT_NUMBER | FLOAT_NUMBER | HEX_NUMBER | STRING_LITERAL | COLOR_CODE | TRUE_KW
        | FALSE_KW => {
            let m = p.start();
            p.advance();
            Some(m.complete(p, CONSTANT))
        }
        LEFT_PAREN => {
            let m = p.start();
            p.advance();
            expr(p);
            p.expect(RIGHT_PAREN, "expected `)`");
            Some(m.complete(p, PARENS_EXPRESSION))
        }
        _ => {
            p.error("expected an expression");
            None
        }
    }
}
