use crate::error::InterpretError;

/* The tokenizer's job is to turn a character stream into a tagged sequence of
tokens. Unlike a line-oriented scanner, it only ever needs to look one token
ahead: the parser asks `peek()` for the current token, decides what to do
with it, then calls `advance()` to consume it and buffer the next one.

The one tricky bit of lexical grammar here is that `+` and `-` are ambiguous
on their own: `+` heads both the symbol `+` and every positive numeral. The
rule is maximal munch off a one-character lookahead past the sign: if at
least one digit follows, it's a signed `Constant`; otherwise it's the bare
operator `Symbol`. */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Constant(i64),
    Boolean(bool),
    Symbol(String),
    OpenParen,
    CloseParen,
    Quote,
    Dot,
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_start_symbol(c: char) -> bool {
    is_letter(c) || matches!(c, '<' | '=' | '>' | '*' | '/' | '#')
}

fn is_inner_symbol(c: char) -> bool {
    is_start_symbol(c) || is_digit(c) || matches!(c, '?' | '!' | '-')
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Parses a decimal numeral wider than `i64` by wrapping, matching the
/// wrap-on-overflow policy used for `+`/`-`/`*` in the applier. A numeral of
/// this length is vanishingly rare in practice.
fn parse_wrapping(lexeme: &str) -> i64 {
    lexeme
        .parse::<i64>()
        .unwrap_or_else(|_| lexeme.parse::<i128>().map(|n| n as i64).unwrap_or(0))
}

/// Segments a source string into tokens, buffering exactly one token of
/// lookahead. Unlike an eager whole-source scan, this scans lazily, one
/// token at a time, since the parser needs to interleave reads of
/// `peek`/`advance` with its own recursive descent.
pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    current: Option<Token>,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        let mut tokenizer = Tokenizer {
            chars: source.chars().collect(),
            pos: 0,
            current: None,
        };
        tokenizer.scan_next();
        tokenizer
    }

    /// True iff, after skipping whitespace, no further token is buffered.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the currently buffered token without consuming it. Fails with
    /// *Syntax* if the stream is exhausted but a caller needed a token here.
    pub fn peek(&self) -> Result<&Token, InterpretError> {
        self.current
            .as_ref()
            .ok_or_else(|| InterpretError::syntax("unexpected end of input: expected a token"))
    }

    /// Consumes the buffered token and scans the next one into its place.
    pub fn advance(&mut self) -> Result<(), InterpretError> {
        self.peek()?;
        self.scan_next();
        Ok(())
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance_char(&mut self) -> Option<char> {
        let c = self.peek_char();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if is_whitespace(c) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Scans exactly one token (or none, at end of input) into `self.current`.
    /// An unrecognized character stops scanning without being consumed,
    /// leaving `current` empty; callers that track position can tell "ran out
    /// of input" apart from "stopped on junk" by checking `pos` against the
    /// source length.
    fn scan_next(&mut self) {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            self.current = None;
            return;
        };

        log::trace!("lexer: next char '{}' at {}", c, self.pos);

        if is_sign(c) {
            self.advance_char();
            let mut digits = String::new();
            while let Some(d) = self.peek_char() {
                if is_digit(d) {
                    digits.push(d);
                    self.advance_char();
                } else {
                    break;
                }
            }
            self.current = Some(if digits.is_empty() {
                Token::Symbol(c.to_string())
            } else {
                let lexeme = format!("{c}{digits}");
                Token::Constant(parse_wrapping(&lexeme))
            });
        } else if is_digit(c) {
            let mut digits = String::new();
            while let Some(d) = self.peek_char() {
                if is_digit(d) {
                    digits.push(d);
                    self.advance_char();
                } else {
                    break;
                }
            }
            self.current = Some(Token::Constant(parse_wrapping(&digits)));
        } else if is_start_symbol(c) {
            let mut lexeme = String::new();
            while let Some(s) = self.peek_char() {
                if is_inner_symbol(s) {
                    lexeme.push(s);
                    self.advance_char();
                } else {
                    break;
                }
            }
            self.current = Some(match lexeme.as_str() {
                "#t" => Token::Boolean(true),
                "#f" => Token::Boolean(false),
                _ => Token::Symbol(lexeme),
            });
        } else if c == '\'' {
            self.advance_char();
            self.current = Some(Token::Quote);
        } else if c == '(' {
            self.advance_char();
            self.current = Some(Token::OpenParen);
        } else if c == ')' {
            self.advance_char();
            self.current = Some(Token::CloseParen);
        } else if c == '.' {
            self.advance_char();
            self.current = Some(Token::Dot);
        } else {
            self.current = None;
        }

        log::trace!("lexer: emitted {:?}", self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_of(source: &str) -> Vec<Token> {
        let mut tok = Tokenizer::new(source);
        let mut out = Vec::new();
        while !tok.is_end() {
            out.push(tok.peek().unwrap().clone());
            tok.advance().unwrap();
        }
        out
    }

    #[test]
    fn signed_numbers_vs_bare_sign_symbols() {
        assert_eq!(tokens_of("+1"), vec![Token::Constant(1)]);
        assert_eq!(tokens_of("-1"), vec![Token::Constant(-1)]);
        assert_eq!(tokens_of("+"), vec![Token::Symbol("+".to_string())]);
        assert_eq!(tokens_of("-"), vec![Token::Symbol("-".to_string())]);
    }

    #[test]
    fn booleans_and_identifiers() {
        assert_eq!(tokens_of("#t"), vec![Token::Boolean(true)]);
        assert_eq!(tokens_of("#f"), vec![Token::Boolean(false)]);
        assert_eq!(tokens_of("list?"), vec![Token::Symbol("list?".to_string())]);
        assert_eq!(
            tokens_of("list-ref"),
            vec![Token::Symbol("list-ref".to_string())]
        );
    }

    #[test]
    fn brackets_quote_and_dot() {
        assert_eq!(
            tokens_of("(a . b)"),
            vec![
                Token::OpenParen,
                Token::Symbol("a".to_string()),
                Token::Dot,
                Token::Symbol("b".to_string()),
                Token::CloseParen,
            ]
        );
        assert_eq!(
            tokens_of("'x"),
            vec![Token::Quote, Token::Symbol("x".to_string())]
        );
    }

    #[test]
    fn peek_fails_past_end() {
        let mut tok = Tokenizer::new("42");
        tok.advance().unwrap();
        assert!(tok.is_end());
        assert!(tok.peek().is_err());
    }
}
