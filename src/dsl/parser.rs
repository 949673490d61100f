//! Recursive-descent parser for the circuit notation.

use log::{debug, warn};

use super::ast::Node;
use super::classify::classify;
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{NotationError, Result};

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parser for circuit notation.
///
/// Recovery is local: a missing atom or a stray operator becomes a
/// [`Node::Unresolved`] leaf, an unclosed `(` ends at end of input and a
/// stray `)` at top level is skipped. The only error is nesting deeper than
/// the configured limit.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'_>) -> Self {
        Self::from_tokens(lexer.tokenize())
    }

    /// Create a parser over an already tokenized input.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum parenthesis nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the whole input. Returns `None` when there is nothing to parse.
    pub fn parse(&mut self) -> Result<Option<Node>> {
        self.skip_unmatched_close();
        if self.peek() == TokenKind::Eof {
            return Ok(None);
        }

        let tree = self.parse_series(false)?;
        debug!(
            tokens = self.tokens.len(),
            leaves = tree.leaf_count(),
            unresolved = tree.unresolved_count();
            "Parsed notation"
        );
        if tree.unresolved_count() > 0 {
            warn!(unresolved = tree.unresolved_count(); "Notation contains placeholders");
        }
        Ok(Some(tree))
    }

    fn peek(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Skip `)` tokens that close nothing. Only applies outside parentheses.
    fn skip_unmatched_close(&mut self) {
        while self.depth == 0 && self.peek() == TokenKind::CloseParen {
            warn!(column = self.tokens[self.pos].column; "Skipping unmatched ')'");
            self.advance();
        }
    }

    /// SeriesChain := ParallelGroup ( [series-operator] ParallelGroup )*
    fn parse_series(&mut self, nested: bool) -> Result<Node> {
        let mut children = vec![self.parse_parallel()?];

        loop {
            match self.peek() {
                TokenKind::Eof => break,
                TokenKind::CloseParen if nested => break,
                TokenKind::CloseParen => self.skip_unmatched_close(),
                TokenKind::Series => {
                    self.advance();
                    children.push(self.parse_parallel()?);
                }
                // Adjacent groups with the connector left out.
                _ => children.push(self.parse_parallel()?),
            }
        }

        Ok(collapse(children, Node::Series))
    }

    /// ParallelGroup := Atom ( parallel-operator Atom )*
    fn parse_parallel(&mut self) -> Result<Node> {
        let mut children = vec![self.parse_atom()?];
        while self.peek() == TokenKind::Parallel {
            self.advance();
            children.push(self.parse_atom()?);
        }
        Ok(collapse(children, Node::Parallel))
    }

    /// Atom := '(' Expression ')' | component-name
    fn parse_atom(&mut self) -> Result<Node> {
        self.skip_unmatched_close();
        match self.peek() {
            TokenKind::ComponentName => {
                let text = self.advance().map(|t| t.text.as_str()).unwrap_or_default();
                if text == Node::PLACEHOLDER_LABEL {
                    return Ok(Node::missing());
                }
                let classified = classify(text);
                Ok(Node::component(classified.kind, classified.label))
            }
            TokenKind::OpenParen => {
                self.advance();
                self.depth += 1;
                if self.depth > self.max_depth {
                    return Err(NotationError::nesting_too_deep(self.depth, self.max_depth));
                }
                let inner = self.parse_series(true)?;
                if self.peek() == TokenKind::CloseParen {
                    self.advance();
                }
                self.depth -= 1;
                Ok(inner)
            }
            TokenKind::Series | TokenKind::Parallel => {
                let text = self.advance().map(|t| t.text.clone()).unwrap_or_default();
                Ok(Node::Unresolved { text })
            }
            TokenKind::CloseParen | TokenKind::Eof => Ok(Node::missing()),
        }
    }
}

fn collapse(mut children: Vec<Node>, wrap: fn(Vec<Node>) -> Node) -> Node {
    if children.len() == 1 {
        children.remove(0)
    } else {
        wrap(children)
    }
}
