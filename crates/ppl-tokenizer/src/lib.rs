//! Lexer for PPL source text.
//!
//! Produces the complete token sequence, trivia (whitespace and all three
//! comment forms) included: concatenating every token's text reproduces the
//! input byte for byte. Reserved words are matched case-insensitively against
//! static tables; the lexeme keeps its original casing.

mod cursor;
mod keywords;

use cursor::{Cursor, EOF_CHAR};
pub use ppl_syntax::SyntaxKind;
use ppl_syntax::SyntaxKind::*;
use text_size::{TextLen, TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    /// True while the current line has seen nothing but blanks. Star comments
    /// only exist at the start of a line; elsewhere `*` multiplies.
    line_start: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: Cursor::new(text), line_start: true }
    }

    fn offset(&self) -> TextSize {
        self.text.text_len() - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let end = self.offset();
        let len = self.cursor.pos_within_token();
        TextRange::at(end - len, len)
    }

    fn text(&self) -> &'a str {
        &self.text[self.range()]
    }

    pub fn next_token(&mut self) -> Token {
        let kind = self.syntax_kind();
        let range = self.range();
        self.cursor.reset_pos_within_token();

        match kind {
            WHITESPACE => {
                if self.text[range].contains('\n') {
                    self.line_start = true;
                }
            }
            EOF => {}
            _ => self.line_start = false,
        }

        Token { kind, range }
    }

    fn syntax_kind(&mut self) -> SyntaxKind {
        let first = self.cursor.advance();
        match first {
            EOF_CHAR => EOF,
            c if c.is_whitespace() => {
                self.cursor.advance_while(char::is_whitespace);
                WHITESPACE
            }
            ';' => self.semicolon(),
            '\'' => {
                self.cursor.advance_while(|c| c != '\n');
                COMMENT
            }
            '*' if self.line_start && matches!(self.cursor.peek(), ' ' | '\t') => {
                self.cursor.advance_while(|c| c != '\n');
                COMMENT
            }
            '"' => self.string(),
            '@' => self.color_code(),
            c @ '0'..='9' => self.number(c),
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
                keywords::classify(self.text())
            }
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            ',' => COMMA,
            ':' => COLON,
            '.' => {
                if self.cursor.matches('.') {
                    self.cursor.advance();
                    DOT_DOT
                } else {
                    DOT
                }
            }
            '=' => {
                if self.cursor.matches('=') {
                    self.cursor.advance();
                    EQ_EQ
                } else {
                    EQ
                }
            }
            '!' => self.with_eq(BANG_EQ, BANG),
            '<' => match self.cursor.peek() {
                '=' => {
                    self.cursor.advance();
                    LT_EQ
                }
                '>' => {
                    self.cursor.advance();
                    LT_GT
                }
                _ => LT,
            },
            '>' => self.with_eq(GT_EQ, GT),
            '+' => self.with_eq(PLUS_EQ, PLUS),
            '-' => self.with_eq(MINUS_EQ, MINUS),
            '*' => {
                if self.cursor.matches('*') {
                    self.cursor.advance();
                    STAR_STAR
                } else {
                    self.with_eq(STAR_EQ, STAR)
                }
            }
            '/' => self.with_eq(SLASH_EQ, SLASH),
            '%' => self.with_eq(PERCENT_EQ, PERCENT),
            '^' => CARET,
            '&' => {
                if self.cursor.matches('&') {
                    self.cursor.advance();
                    AMP_AMP
                } else {
                    self.with_eq(AMP_EQ, AMP)
                }
            }
            '|' => {
                if self.cursor.matches('|') {
                    self.cursor.advance();
                    PIPE_PIPE
                } else {
                    self.with_eq(PIPE_EQ, PIPE)
                }
            }
            _ => UNKNOWN,
        }
    }

    fn with_eq(&mut self, with: SyntaxKind, without: SyntaxKind) -> SyntaxKind {
        if self.cursor.matches('=') {
            self.cursor.advance();
            with
        } else {
            without
        }
    }

    /// `;$WORD` directive heads, the `;#` pragma head, or a plain comment.
    fn semicolon(&mut self) -> SyntaxKind {
        match self.cursor.peek() {
            '$' => {
                self.cursor.advance();
                self.cursor.advance_while(|c| c.is_ascii_alphabetic());
                keywords::directive_kind(&self.text()[2..]).unwrap_or(UNKNOWN)
            }
            '#' => {
                self.cursor.advance();
                VERSION_DIR
            }
            _ => {
                self.cursor.advance_while(|c| c != '\n');
                COMMENT
            }
        }
    }

    fn string(&mut self) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                '"' => {
                    self.cursor.advance();
                    return STRING_LITERAL;
                }
                '\\' => {
                    self.cursor.advance();
                    if !matches!(self.cursor.peek(), '\n' | EOF_CHAR) {
                        self.cursor.advance();
                    }
                }
                // Unterminated: an error token up to the end of the line.
                '\n' | EOF_CHAR => return UNKNOWN,
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    fn color_code(&mut self) -> SyntaxKind {
        let mut lookahead = self.cursor.lookahead();
        let x = lookahead.next().unwrap_or(EOF_CHAR);
        let high = lookahead.next().unwrap_or(EOF_CHAR);
        let low = lookahead.next().unwrap_or(EOF_CHAR);

        if matches!(x, 'x' | 'X') && high.is_ascii_hexdigit() && low.is_ascii_hexdigit() {
            self.cursor.advance();
            self.cursor.advance();
            self.cursor.advance();
            COLOR_CODE
        } else {
            UNKNOWN
        }
    }

    /// Hex forms are tried before plain integers so `1Fh` never splits into
    /// `1` and `Fh`. The `h`-suffix form must start with a decimal digit;
    /// letter-initial runs are identifiers.
    fn number(&mut self, first: char) -> SyntaxKind {
        if first == '0'
            && matches!(self.cursor.peek(), 'x' | 'X')
            && self.cursor.second().is_ascii_hexdigit()
        {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_hexdigit());
            return HEX_NUMBER;
        }

        self.cursor.advance_while(|c| c.is_ascii_digit());

        if let Some(len) = self.hex_suffix_len() {
            for _ in 0..len {
                self.cursor.advance();
            }
            return HEX_NUMBER;
        }

        if self.cursor.matches('.') && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
            return FLOAT_NUMBER;
        }

        INT_NUMBER
    }

    /// If the input continues `[0-9A-Fa-f]*[hH]`, the token is hex; returns
    /// how many chars the continuation takes.
    fn hex_suffix_len(&self) -> Option<usize> {
        let mut len = 0;
        let mut chars = self.cursor.lookahead();
        loop {
            match chars.next().unwrap_or(EOF_CHAR) {
                'h' | 'H' => return Some(len + 1),
                c if c.is_ascii_hexdigit() => len += 1,
                _ => return None,
            }
        }
    }
}

/// Lexes the whole input. The trailing EOF token is not included.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token();
        if token.kind == EOF {
            break;
        }
        tokens.push(token);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        tokenize(text).into_iter().map(|token| token.kind).collect()
    }

    fn nontrivia_kinds(text: &str) -> Vec<SyntaxKind> {
        tokenize(text)
            .into_iter()
            .map(|token| token.kind)
            .filter(|kind| !kind.is_trivia())
            .collect()
    }

    #[test]
    fn every_byte_is_covered() {
        let text = "IF (x) THEN ' comment\n  PRINTLN \"hi\"\nENDIF\n";
        let tokens = tokenize(text);

        let mut offset = TextSize::new(0);
        for token in &tokens {
            assert_eq!(token.range.start(), offset, "gap before {:?}", token.kind);
            offset = token.range.end();
        }
        assert_eq!(offset, text.text_len());
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(nontrivia_kinds("if If iF IF"), vec![IF_KW; 4]);
        assert_eq!(nontrivia_kinds("endwhile EndWhile"), vec![ENDWHILE_KW; 2]);
        assert_eq!(nontrivia_kinds("string STRING"), vec![TYPE_NAME; 2]);
        assert_eq!(nontrivia_kinds("println PRINTLN"), vec![BUILTIN_STATEMENT; 2]);
        assert_eq!(nontrivia_kinds("abs ABS"), vec![BUILTIN_FUNCTION; 2]);
    }

    #[test]
    fn identifier_keeps_its_lexeme() {
        let text = "MyVar";
        let tokens = tokenize(text);
        assert_eq!(tokens[0].kind, IDENT);
        assert_eq!(&text[tokens[0].range], "MyVar");
    }

    #[test]
    fn hex_number_forms() {
        assert_eq!(nontrivia_kinds("0x1F"), vec![HEX_NUMBER]);
        assert_eq!(nontrivia_kinds("0X1f"), vec![HEX_NUMBER]);
        assert_eq!(nontrivia_kinds("1Fh"), vec![HEX_NUMBER]);
        assert_eq!(nontrivia_kinds("10H"), vec![HEX_NUMBER]);
        // Letter-initial runs are identifiers, not suffixed hex.
        assert_eq!(nontrivia_kinds("Fh"), vec![IDENT]);
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(nontrivia_kinds("42"), vec![INT_NUMBER]);
        assert_eq!(nontrivia_kinds("3.14"), vec![FLOAT_NUMBER]);
        // `1.` is an integer followed by a dot, not a float.
        assert_eq!(nontrivia_kinds("1."), vec![INT_NUMBER, DOT]);
        // A digit run that is not hex stays split.
        assert_eq!(nontrivia_kinds("1x"), vec![INT_NUMBER, IDENT]);
    }

    #[test]
    fn color_codes() {
        assert_eq!(nontrivia_kinds("@x1F"), vec![COLOR_CODE]);
        assert_eq!(nontrivia_kinds("@X0f"), vec![COLOR_CODE]);
        // Too short, or no `x`: a stray `@` error token.
        assert_eq!(nontrivia_kinds("@x1"), vec![UNKNOWN, IDENT]);
        assert_eq!(nontrivia_kinds("@1F"), vec![UNKNOWN, INT_NUMBER, IDENT]);
    }

    #[test]
    fn string_literals() {
        assert_eq!(nontrivia_kinds(r#""hello""#), vec![STRING_LITERAL]);
        assert_eq!(nontrivia_kinds(r#""a \" b""#), vec![STRING_LITERAL]);
        // Unterminated strings end at the line break as an error token.
        assert_eq!(nontrivia_kinds("\"oops\nPRINT"), vec![UNKNOWN, BUILTIN_STATEMENT]);
    }

    #[test]
    fn comment_forms() {
        assert_eq!(kinds("; semicolon comment"), vec![COMMENT]);
        assert_eq!(kinds("' quote comment"), vec![COMMENT]);
        assert_eq!(kinds("* star comment"), vec![COMMENT]);
    }

    #[test]
    fn star_comment_only_at_line_start() {
        assert_eq!(nontrivia_kinds("a * b"), vec![IDENT, STAR, IDENT]);
        assert_eq!(kinds("a\n* star comment"), vec![IDENT, WHITESPACE, COMMENT]);
        // No space after the star: a multiply token even at line start.
        assert_eq!(nontrivia_kinds("*b"), vec![STAR, IDENT]);
    }

    #[test]
    fn directive_heads() {
        assert_eq!(nontrivia_kinds(";$DEFINE"), vec![DEFINE_DIR]);
        assert_eq!(nontrivia_kinds(";$define"), vec![DEFINE_DIR]);
        assert_eq!(nontrivia_kinds(";$Include"), vec![INCLUDE_DIR]);
        assert_eq!(nontrivia_kinds(";$IF"), vec![IF_DIR]);
        assert_eq!(nontrivia_kinds(";$ELIF"), vec![ELIF_DIR]);
        assert_eq!(nontrivia_kinds(";$ELSE"), vec![ELSE_DIR]);
        assert_eq!(nontrivia_kinds(";$ENDIF"), vec![ENDIF_DIR]);
        assert_eq!(nontrivia_kinds(";$UNDEF"), vec![UNDEF_DIR]);
        assert_eq!(nontrivia_kinds(";#version=400"), vec![VERSION_DIR, IDENT, EQ, INT_NUMBER]);
        // Unknown directive word is an error token, not a comment.
        assert_eq!(nontrivia_kinds(";$BOGUS"), vec![UNKNOWN]);
    }

    #[test]
    fn semicolon_comment_does_not_swallow_directives() {
        assert_eq!(kinds("; $DEFINE is mentioned here"), vec![COMMENT]);
        assert_eq!(kinds(";"), vec![COMMENT]);
    }

    #[test]
    fn operators() {
        assert_eq!(
            nontrivia_kinds("a == b <> c <= d >= e ** f"),
            vec![IDENT, EQ_EQ, IDENT, LT_GT, IDENT, LT_EQ, IDENT, GT_EQ, IDENT, STAR_STAR, IDENT]
        );
        assert_eq!(
            nontrivia_kinds("a += 1 b -= 2 c |= 3"),
            vec![IDENT, PLUS_EQ, INT_NUMBER, IDENT, MINUS_EQ, INT_NUMBER, IDENT, PIPE_EQ, INT_NUMBER]
        );
        assert_eq!(nontrivia_kinds("1 .. 5"), vec![INT_NUMBER, DOT_DOT, INT_NUMBER]);
    }
}
