mod lexer;

pub use lexer::{Token, Tokenizer};
