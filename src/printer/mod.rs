mod printer;

pub use printer::to_text;
