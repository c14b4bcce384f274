use drop_bomb::DropBomb;
use ppl_errors::Diagnostic;
use ppl_syntax::{SyntaxKind, SyntaxSet};
use ppl_tokenizer::{Token, tokenize};
use rowan::{GreenNode, GreenNodeBuilder};
use text_size::{TextLen, TextRange};

pub(crate) struct Parser<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    /// Index of the next non-trivia token, or `tokens.len()` at the end.
    pos: usize,
    events: Vec<Event>,
    errors: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let tokens = tokenize(text);
        let mut parser =
            Self { text, tokens, pos: 0, events: Vec::new(), errors: Vec::new() };
        parser.pos = parser.skip_trivia(0);
        parser
    }

    fn skip_trivia(&self, mut index: usize) -> usize {
        while index < self.tokens.len() && self.tokens[index].kind.is_trivia() {
            index += 1;
        }
        index
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.tokens.get(self.pos).map_or(SyntaxKind::EOF, |token| token.kind)
    }

    /// Kind of the `n`th non-trivia token ahead; `nth(0)` is the current one.
    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        let mut index = self.pos;
        for _ in 0..n {
            if index >= self.tokens.len() {
                return SyntaxKind::EOF;
            }
            index = self.skip_trivia(index + 1);
        }
        self.tokens.get(index).map_or(SyntaxKind::EOF, |token| token.kind)
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn at_set(&self, set: SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    pub(crate) fn advance(&mut self) {
        if self.pos >= self.tokens.len() {
            return;
        }
        self.events.push(Event::Token);
        self.pos = self.skip_trivia(self.pos + 1);
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind, message: &str) {
        if !self.eat(kind) {
            self.error(message);
        }
    }

    /// True when a line break (or the start of input) separates the current
    /// token from the previous one. Line-oriented rules use this to decide
    /// whether an optional trailing piece belongs to the construct at hand.
    pub(crate) fn at_line_start(&self) -> bool {
        let mut index = self.pos;
        while index > 0 {
            index -= 1;
            let token = self.tokens[index];
            if !token.kind.is_trivia() {
                return false;
            }
            if token.kind == SyntaxKind::WHITESPACE && self.text[token.range].contains('\n') {
                return true;
            }
        }
        true
    }

    /// Like [`Self::at_line_start`], but for the `n`th non-trivia token ahead.
    pub(crate) fn nth_at_line_start(&self, n: usize) -> bool {
        let mut index = self.pos;
        for _ in 0..n {
            if index >= self.tokens.len() {
                return true;
            }
            index = self.skip_trivia(index + 1);
        }

        while index > 0 {
            index -= 1;
            let token = self.tokens[index];
            if !token.kind.is_trivia() {
                return false;
            }
            if token.kind == SyntaxKind::WHITESPACE && self.text[token.range].contains('\n') {
                return true;
            }
        }
        true
    }

    fn current_range(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.text.text_len()), |token| token.range)
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(Diagnostic::error(message, self.current_range()));
    }

    /// Reports `message` and consumes the offending token inside an `ERROR`
    /// node so parsing can continue right after it.
    pub(crate) fn error_and_bump(&mut self, message: &str) {
        let marker = self.start();
        self.error(message);
        self.advance();
        marker.complete(self, SyntaxKind::ERROR);
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    pub(crate) fn build_tree(self) -> (GreenNode, Vec<Diagnostic>) {
        let Parser { text, tokens, pos: _, mut events, errors } = self;
        let mut sink = Sink { builder: GreenNodeBuilder::new(), text, tokens, token_pos: 0 };
        let mut forward_parents = Vec::new();
        let mut depth = 0usize;

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::TOMBSTONE) {
                Event::Start { kind, forward_parent } => {
                    if kind == SyntaxKind::TOMBSTONE {
                        continue;
                    }

                    forward_parents.push(kind);
                    let mut idx = i;
                    let mut fp = forward_parent;
                    while let Some(fwd) = fp {
                        idx += fwd as usize;

                        fp = match std::mem::replace(&mut events[idx], Event::TOMBSTONE) {
                            Event::Start { kind, forward_parent } => {
                                if kind != SyntaxKind::TOMBSTONE {
                                    forward_parents.push(kind);
                                }
                                forward_parent
                            }
                            _ => unreachable!(),
                        };
                    }

                    // Leading trivia stays in the enclosing node, except at
                    // the root, which must cover the whole input.
                    if depth > 0 {
                        sink.eat_trivia();
                    }
                    for kind in forward_parents.drain(..).rev() {
                        sink.builder.start_node(kind.into());
                        depth += 1;
                    }
                }
                Event::Finish => {
                    depth -= 1;
                    if depth == 0 {
                        sink.eat_trivia();
                    }
                    sink.builder.finish_node();
                }
                Event::Token => sink.token(),
            }
        }

        (sink.builder.finish(), errors)
    }
}

struct Sink<'a> {
    builder: GreenNodeBuilder<'static>,
    text: &'a str,
    tokens: Vec<Token>,
    token_pos: usize,
}

impl Sink<'_> {
    fn eat_trivia(&mut self) {
        while let Some(&token) = self.tokens.get(self.token_pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), &self.text[token.range]);
            self.token_pos += 1;
        }
    }

    fn token(&mut self) {
        self.eat_trivia();
        let token = self.tokens[self.token_pos];
        self.builder.token(token.kind.into(), &self.text[token.range]);
        self.token_pos += 1;
    }
}

enum Event {
    Start { kind: SyntaxKind, forward_parent: Option<u32> },
    Token,
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Event::Start { kind: SyntaxKind::TOMBSTONE, forward_parent: None };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Marker {
        Marker {
            position: pos,
            bomb: DropBomb::new("Marker must be either completed or abandoned"),
        }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot, .. } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
        CompletedMarker::new(self.position, kind)
    }
}

pub(crate) struct CompletedMarker {
    pos: u32,
    kind: SyntaxKind,
}

impl CompletedMarker {
    fn new(pos: u32, kind: SyntaxKind) -> Self {
        CompletedMarker { pos, kind }
    }

    pub(crate) fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new_pos = p.start();

        match &mut p.events[self.pos as usize] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.position - self.pos);
            }
            _ => unreachable!(),
        }

        new_pos
    }
}
