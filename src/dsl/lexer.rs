//! Lexer (tokenizer) for the circuit notation.

use std::fmt;

use log::trace;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text, exactly as written
    pub text: String,
    /// Character column of the first character (1-indexed)
    pub column: usize,
}

/// Token types in the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A component name such as `R1` or `Kd`
    ComponentName,
    /// Series operator `nt` (any letter case)
    Series,
    /// Parallel operator `//`
    Parallel,
    /// Open parenthesis '('
    OpenParen,
    /// Close parenthesis ')'
    CloseParen,
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::ComponentName => "component-name",
            TokenKind::Series => "series-operator",
            TokenKind::Parallel => "parallel-operator",
            TokenKind::OpenParen => "paren-open",
            TokenKind::CloseParen => "paren-close",
            TokenKind::Eof => "eof",
        };
        f.write_str(name)
    }
}

/// Lexer for tokenizing circuit notation.
///
/// The lexer never fails. Characters that cannot start any token are skipped.
///
/// The letters `nt` are ambiguous: they are the series operator, but they may
/// also appear in a name. An `nt` is read as the operator when either a name
/// has already started accumulating, or when the previous token was an operand
/// (a name or a closing parenthesis). Otherwise, at the start of input, after
/// an operator or after `(`, it begins a name.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    column: usize,
    previous: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            column: 1,
            previous: None,
        }
    }

    /// Get the next token. Returns a [`TokenKind::Eof`] token once the input
    /// is exhausted, and keeps returning it.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let start_column = self.column;
            let ch = match self.peek() {
                Some(ch) => ch,
                None => {
                    return Token {
                        kind: TokenKind::Eof,
                        text: String::new(),
                        column: start_column,
                    };
                }
            };

            let (kind, text) = match ch {
                '(' => {
                    self.advance();
                    (TokenKind::OpenParen, "(".to_string())
                }
                ')' => {
                    self.advance();
                    (TokenKind::CloseParen, ")".to_string())
                }
                '/' if self.rest().starts_with("//") => {
                    self.advance();
                    self.advance();
                    (TokenKind::Parallel, "//".to_string())
                }
                '/' => {
                    // A lone slash is half-typed; drop it.
                    self.advance();
                    trace!(column = start_column; "Skipping lone '/'");
                    continue;
                }
                _ if self.at_series_operator() && self.operand_precedes() => {
                    let text: String = self.rest().chars().take(2).collect();
                    self.advance();
                    self.advance();
                    (TokenKind::Series, text)
                }
                _ => (TokenKind::ComponentName, self.read_name()),
            };

            trace!(kind:% = kind, text = text.as_str(), column = start_column; "Token");
            self.previous = Some(kind);
            return Token {
                kind,
                text,
                column: start_column,
            };
        }
    }

    /// Collect all remaining tokens, excluding the final end-of-input marker.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if token.kind == TokenKind::Eof {
                return tokens;
            }
            tokens.push(token);
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.column += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    fn at_series_operator(&self) -> bool {
        let mut chars = self.rest().chars();
        matches!(
            (chars.next(), chars.next()),
            (Some('n' | 'N'), Some('t' | 'T'))
        )
    }

    fn operand_precedes(&self) -> bool {
        matches!(
            self.previous,
            Some(TokenKind::ComponentName | TokenKind::CloseParen)
        )
    }

    fn read_name(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || matches!(ch, '(' | ')' | '/') {
                break;
            }
            if self.at_series_operator() {
                if !text.is_empty() {
                    break;
                }
                // Leading `nt` with no operand before it belongs to the name.
                text.extend(self.advance());
                text.extend(self.advance());
                continue;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input).tokenize().iter().map(|t| t.kind).collect()
    }

    fn texts(input: &str) -> Vec<String> {
        Lexer::new(input).tokenize().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_lexer_series() {
        assert_eq!(texts("R1ntR2"), vec!["R1", "nt", "R2"]);
        assert_eq!(
            kinds("R1ntR2"),
            vec![TokenKind::ComponentName, TokenKind::Series, TokenKind::ComponentName]
        );
    }

    #[test]
    fn test_lexer_series_any_case() {
        assert_eq!(texts("R1NTR2"), vec!["R1", "NT", "R2"]);
        assert_eq!(texts("R1 nT R2"), vec!["R1", "nT", "R2"]);
    }

    #[test]
    fn test_lexer_parallel_and_parens() {
        assert_eq!(
            kinds("R//R1nt(R2//R3)"),
            vec![
                TokenKind::ComponentName,
                TokenKind::Parallel,
                TokenKind::ComponentName,
                TokenKind::Series,
                TokenKind::OpenParen,
                TokenKind::ComponentName,
                TokenKind::Parallel,
                TokenKind::ComponentName,
                TokenKind::CloseParen,
            ]
        );
    }

    #[test]
    fn test_lexer_chain_of_single_letters() {
        assert_eq!(
            texts("UntKdntR1nt(R2//R3)"),
            vec!["U", "nt", "Kd", "nt", "R1", "nt", "(", "R2", "//", "R3", ")"]
        );
    }

    #[test]
    fn test_lexer_leading_nt_is_name_text() {
        assert_eq!(texts("ntc1"), vec!["ntc1"]);
        assert_eq!(texts("R1ntntc"), vec!["R1", "nt", "ntc"]);
        assert_eq!(texts("(ntc)"), vec!["(", "ntc", ")"]);
    }

    #[test]
    fn test_lexer_nt_after_close_paren_is_operator() {
        assert_eq!(texts("(R1)ntR2"), vec!["(", "R1", ")", "nt", "R2"]);
    }

    #[test]
    fn test_lexer_whitespace_and_lone_slash() {
        assert_eq!(texts("  R1 \t nt\nR2  "), vec!["R1", "nt", "R2"]);
        assert_eq!(texts("R1/R2"), vec!["R1", "R2"]);
    }

    #[test]
    fn test_lexer_trailing_operator_is_lenient() {
        assert_eq!(texts("R1nt"), vec!["R1", "nt"]);
        assert_eq!(texts("R1//"), vec!["R1", "//"]);
    }

    #[test]
    fn test_lexer_accented_names() {
        let tokens = Lexer::new("Dé1//Lampe").tokenize();
        assert_eq!(tokens[0].text, "Dé1");
        assert_eq!(tokens[1].kind, TokenKind::Parallel);
        assert_eq!(tokens[1].column, 4);
        assert_eq!(tokens[2].text, "Lampe");
    }

    #[test]
    fn test_lexer_eof_is_sticky() {
        let mut lexer = Lexer::new("R");
        assert_eq!(lexer.next_token().kind, TokenKind::ComponentName);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
