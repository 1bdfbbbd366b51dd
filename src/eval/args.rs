use crate::ast::Value;
use crate::error::InterpretError;

/// Walks the syntactic tail of a call form (the argument expressions,
/// unevaluated) and collects each element. Fails with *Runtime* if the tail
/// is not a proper chain of pairs — an improper argument list, e.g.
/// `(+ 1 . 2)`, is never valid regardless of which builtin it's for.
pub fn collect_syntactic_args(tail: &Value) -> Result<Vec<&Value>, InterpretError> {
    let mut args = Vec::new();
    let mut cursor = tail;
    loop {
        match cursor {
            Value::Nil => break,
            Value::Pair(car, cdr) => {
                args.push(car.as_ref());
                cursor = cdr.as_ref();
            }
            _ => return Err(InterpretError::runtime("expected expression")),
        }
    }
    Ok(args)
}

/// Like [`collect_syntactic_args`], but additionally requires exactly `n`
/// arguments, with the same wording the original interpreter used for a
/// missing operand versus a surplus one.
pub fn exact_args<'a>(name: &str, tail: &'a Value, n: usize) -> Result<Vec<&'a Value>, InterpretError> {
    let args = collect_syntactic_args(tail)?;
    if args.len() < n {
        return Err(InterpretError::runtime(format!(
            "{name} expects {n} operand(s)"
        )));
    }
    if args.len() > n {
        return Err(InterpretError::runtime(format!(
            "{name} expected only {n} argument(s)"
        )));
    }
    Ok(args)
}

/// Like [`collect_syntactic_args`], but requires at least one argument
/// ("one or more" builtins: `-`, `max`, `min`, `abs`).
pub fn at_least_one<'a>(name: &str, tail: &'a Value) -> Result<Vec<&'a Value>, InterpretError> {
    let args = collect_syntactic_args(tail)?;
    if args.is_empty() {
        return Err(InterpretError::runtime(format!("{name} expects operand(s)")));
    }
    Ok(args)
}
