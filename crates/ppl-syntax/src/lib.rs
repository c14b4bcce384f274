//! Syntax tree definitions for PPL (PCBoard Programming Language).
//!
//! The tree is a lossless rowan green/red tree: every byte of the source,
//! trivia included, is covered by exactly one token, so the original text can
//! be reassembled from any parse result.

/// Typed AST wrappers around the raw syntax tree.
pub mod ast;
mod syntax_kind;
mod syntax_set;

pub use syntax_kind::SyntaxKind;
pub use syntax_set::SyntaxSet;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PplLanguage {}

impl rowan::Language for PplLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        assert!(raw.0 <= SyntaxKind::TOMBSTONE as u16);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<PplLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<PplLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<PplLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<PplLanguage>;
