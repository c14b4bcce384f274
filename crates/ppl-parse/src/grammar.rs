mod directives;
mod exprs;
mod items;
mod stmts;

use ppl_syntax::SyntaxKind;

use crate::parser::Parser;

pub(crate) fn source_file(p: &mut Parser) {
    let m = p.start();

    if p.peek_kind().is_directive() {
        directives::preprocessor_section(p);
    }

    while !p.at(SyntaxKind::EOF) {
        items::item(p);
    }

    m.complete(p, SyntaxKind::SOURCE_FILE);
}
