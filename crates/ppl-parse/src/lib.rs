//! Error-tolerant PPL parser.
//!
//! [`source_file`] never fails: it always produces a green tree covering the
//! whole input, with unparsable spans wrapped in `ERROR` nodes and every
//! problem reported as a positional [`Diagnostic`].

mod grammar;
mod parser;
#[cfg(test)]
mod tests;

use ppl_errors::Diagnostic;
use ppl_syntax::SyntaxNode;
use rowan::GreenNode;

pub struct Parse {
    green: GreenNode,
    errors: Vec<Diagnostic>,
}

impl Parse {
    pub fn syntax_node(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }
}

pub fn source_file(text: &str) -> Parse {
    let mut parser = parser::Parser::new(text);
    grammar::source_file(&mut parser);
    let (green, errors) = parser.build_tree();
    Parse { green, errors }
}
