/// The two error kinds the pipeline can raise, each carrying a human-readable
/// message. Syntax errors come from the tokenizer or parser; runtime errors
/// come from the applier.
///
/// Kept as a flat enum rather than per-stage structs because every stage
/// downstream of the tokenizer needs to propagate either kind through `?`
/// without knowing which stage raised it first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpretError {
    #[error("Syntax error: {0}")]
    Syntax(String),
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl InterpretError {
    pub fn syntax(message: impl Into<String>) -> Self {
        InterpretError::Syntax(message.into())
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        InterpretError::Runtime(message.into())
    }

    /// The sysexits.h-style process exit code used to distinguish the two
    /// failure stages (65 = data/syntax, 70 = runtime).
    pub fn exit_code(&self) -> i32 {
        match self {
            InterpretError::Syntax(_) => 65,
            InterpretError::Runtime(_) => 70,
        }
    }
}
