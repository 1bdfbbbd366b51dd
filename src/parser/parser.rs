use crate::ast::Value;
use crate::error::InterpretError;
use crate::lexer::{Token, Tokenizer};

/* Recursive descent over the grammar:

  expr      := atom | quoted | list
  atom      := Number | Boolean | Symbol
  quoted    := Quote expr
  list      := '(' list-body
  list-body := ')'                         -- Nil
             | Symbol("quote") expr ')'    -- desugars to Quote(expr)
             | expr tail
  tail      := ')'                          -- proper end
             | '.' expr ')'                 -- dotted tail
             | expr tail                    -- recursive

Each rule consumes exactly the tokens it's responsible for and leaves the
tokenizer positioned at the next unconsumed token. There's no
synchronization/error-recovery pass here — a single malformed top-level
expression is simply a *Syntax* error, there's no second expression to
recover into. */

pub struct Parser;

impl Parser {
    /// Parses one expression starting at the tokenizer's current position,
    /// leaving it positioned just past that expression.
    pub fn parse(tokenizer: &mut Tokenizer) -> Result<Value, InterpretError> {
        let token = tokenizer.peek()?.clone();
        match token {
            Token::Quote => {
                tokenizer.advance()?;
                let inner = Self::parse(tokenizer)?;
                Ok(Value::quote(inner))
            }
            Token::OpenParen => {
                tokenizer.advance()?;
                Self::parse_list_body(tokenizer)
            }
            Token::CloseParen => Err(InterpretError::syntax("unexpected ')'")),
            Token::Dot => Err(InterpretError::syntax("unexpected '.'")),
            Token::Constant(n) => {
                tokenizer.advance()?;
                Ok(Value::Num(n))
            }
            Token::Boolean(b) => {
                tokenizer.advance()?;
                Ok(Value::Bool(b))
            }
            Token::Symbol(name) => {
                if name == "quote" {
                    return Err(InterpretError::syntax(
                        "'quote' must head a list form, not appear bare",
                    ));
                }
                tokenizer.advance()?;
                Ok(Value::Sym(name))
            }
        }
    }

    /// Parses the body of a list after the opening `(` has been consumed.
    fn parse_list_body(tokenizer: &mut Tokenizer) -> Result<Value, InterpretError> {
        if matches!(tokenizer.peek()?, Token::CloseParen) {
            tokenizer.advance()?;
            return Ok(Value::Nil);
        }

        if let Token::Symbol(name) = tokenizer.peek()?.clone() {
            if name == "quote" {
                tokenizer.advance()?;
                let inner = Self::parse(tokenizer)?;
                return match tokenizer.peek()? {
                    Token::CloseParen => {
                        tokenizer.advance()?;
                        Ok(Value::quote(inner))
                    }
                    _ => Err(InterpretError::syntax("expected ')' after '(quote ...)'")),
                };
            }
        }

        let first = Self::parse(tokenizer)?;
        let tail = Self::parse_tail(tokenizer)?;
        Ok(Value::pair(first, tail))
    }

    /// Parses what follows the first element of a list body: either the
    /// closing paren, a dotted tail, or another element followed by more
    /// tail. A bare `Dot` as the *first* element of a list (i.e. reached via
    /// `parse_list_body` -> `parse` -> sees `Dot`) is already rejected by
    /// `parse`'s own `Token::Dot` arm, so this function only ever sees `Dot`
    /// in the legal, post-first-element position.
    fn parse_tail(tokenizer: &mut Tokenizer) -> Result<Value, InterpretError> {
        match tokenizer.peek()? {
            Token::CloseParen => {
                tokenizer.advance()?;
                Ok(Value::Nil)
            }
            Token::Dot => {
                tokenizer.advance()?;
                let tail = Self::parse(tokenizer)?;
                match tokenizer.peek()? {
                    Token::CloseParen => {
                        tokenizer.advance()?;
                        Ok(tail)
                    }
                    _ => Err(InterpretError::syntax("expected ')' after dotted tail")),
                }
            }
            _ => {
                let first = Self::parse(tokenizer)?;
                let rest = Self::parse_tail(tokenizer)?;
                Ok(Value::pair(first, rest))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Value {
        let mut tok = Tokenizer::new(source);
        Parser::parse(&mut tok).unwrap()
    }

    #[test]
    fn proper_list_builds_right_leaning_chain() {
        assert_eq!(
            parse("(a b c)"),
            Value::pair(
                Value::Sym("a".into()),
                Value::pair(
                    Value::Sym("b".into()),
                    Value::pair(Value::Sym("c".into()), Value::Nil)
                )
            )
        );
    }

    #[test]
    fn dotted_pair() {
        assert_eq!(
            parse("(a . b)"),
            Value::pair(Value::Sym("a".into()), Value::Sym("b".into()))
        );
        assert_eq!(
            parse("(a b . c)"),
            Value::pair(
                Value::Sym("a".into()),
                Value::pair(Value::Sym("b".into()), Value::Sym("c".into()))
            )
        );
    }

    #[test]
    fn quote_reader_syntax_and_list_form_agree() {
        assert_eq!(parse("'x"), Value::quote(Value::Sym("x".into())));
        assert_eq!(parse("(quote x)"), Value::quote(Value::Sym("x".into())));
    }

    #[test]
    fn bare_quote_symbol_is_a_syntax_error() {
        let mut tok = Tokenizer::new("quote");
        assert!(Parser::parse(&mut tok).is_err());
    }

    #[test]
    fn dot_as_first_list_element_is_a_syntax_error() {
        let mut tok = Tokenizer::new("(. a)");
        assert!(Parser::parse(&mut tok).is_err());
    }

    #[test]
    fn unexpected_close_paren_is_a_syntax_error() {
        let mut tok = Tokenizer::new(")");
        assert!(Parser::parse(&mut tok).is_err());
    }

    #[test]
    fn quote_list_form_with_extra_expression_is_a_syntax_error() {
        let mut tok = Tokenizer::new("(quote a b)");
        assert!(Parser::parse(&mut tok).is_err());
    }
}
