mod runner;

pub use runner::{run, run_file, run_prompt};
