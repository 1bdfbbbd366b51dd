use std::fs::File;
use std::io::{self, Read, Write};

use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::ast::Value;
use crate::error::InterpretError;
use crate::eval::apply;
use crate::lexer::Tokenizer;
use crate::parser::Parser;
use crate::printer::to_text;

/// The whole pipeline: tokenize, parse exactly one expression, confirm there
/// is nothing left over, evaluate it, print the result. A program is a single
/// expression — there's no statement sequencing to loop over.
pub fn run(source: &str) -> Result<String, InterpretError> {
    let mut tokenizer = Tokenizer::new(source);
    let ast: Value = Parser::parse(&mut tokenizer)?;

    if !tokenizer.is_end() {
        return Err(InterpretError::syntax(
            "unexpected trailing input after expression",
        ));
    }

    let result = apply(&ast)?;
    Ok(to_text(&result))
}

/// Reads `path` through `encoding_rs`'s BOM-sniffing decoder (defaulting to
/// UTF-8) rather than assuming the file is already valid UTF-8, then runs it.
/// Exits with the sysexits.h-style code carried on the error.
pub fn run_file(path: &str) -> std::io::Result<()> {
    let file = File::open(path)?;
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding_rs::UTF_8))
        .build(file);
    let mut source = String::new();
    decoder.read_to_string(&mut source)?;

    log::info!("runner: running file '{path}'");

    match run(&source) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            log::error!("runner: {err}");
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
    Ok(())
}

/// Reads one expression per line from stdin and prints its result, looping
/// until EOF. A failed line logs and prints its error but does not exit the
/// loop — one bad line shouldn't tear down the whole session.
pub fn run_prompt() -> std::io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        let bytes_read = stdin.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        match run(&line) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                log::warn!("runner: {err}");
                eprintln!("{err}");
            }
        }
    }
    Ok(())
}
