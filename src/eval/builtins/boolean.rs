use crate::ast::Value;
use crate::error::InterpretError;
use crate::eval::apply::apply;
use crate::eval::args::{collect_syntactic_args, exact_args};

pub fn op_is_boolean(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("boolean?", tail, 1)?;
    Ok(Value::Bool(matches!(apply(args[0])?, Value::Bool(_))))
}

/// `#t` iff the argument is exactly `Bool(false)`; every other value
/// (numbers, pairs, symbols, quotes, nil) is truthy and `not`s to `#f`.
pub fn op_not(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("not", tail, 1)?;
    let value = apply(args[0])?;
    Ok(Value::Bool(matches!(value, Value::Bool(false))))
}

fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Bool(false))
}

/// Left-to-right; stops and returns the first `#f`; otherwise returns the
/// last evaluated value. No arguments: `#t`.
pub fn op_and(tail: &Value) -> Result<Value, InterpretError> {
    let args = collect_syntactic_args(tail)?;
    let mut last = Value::Bool(true);
    for a in args {
        last = apply(a)?;
        if !is_truthy(&last) {
            return Ok(last);
        }
    }
    Ok(last)
}

/// Left-to-right; stops and returns the first truthy value; otherwise
/// returns the last evaluated value. No arguments: `#f`.
pub fn op_or(tail: &Value) -> Result<Value, InterpretError> {
    let args = collect_syntactic_args(tail)?;
    let mut last = Value::Bool(false);
    for a in args {
        last = apply(a)?;
        if is_truthy(&last) {
            return Ok(last);
        }
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail_of(items: Vec<Value>) -> Value {
        Value::cons_list(items, Value::Nil)
    }

    #[test]
    fn and_returns_first_false_or_last_value() {
        assert_eq!(
            op_and(&tail_of(vec![Value::Num(1), Value::Num(2), Value::Num(3)])).unwrap(),
            Value::Num(3)
        );
        assert_eq!(
            op_and(&tail_of(vec![Value::Bool(false), Value::Num(2)])).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(op_and(&Value::Nil).unwrap(), Value::Bool(true));
    }

    #[test]
    fn or_returns_first_truthy_or_last_value() {
        assert_eq!(
            op_or(&tail_of(vec![Value::Bool(false), Value::Num(2), Value::Num(3)])).unwrap(),
            Value::Num(2)
        );
        assert_eq!(op_or(&Value::Nil).unwrap(), Value::Bool(false));
    }

    #[test]
    fn not_is_false_only_for_bool_false() {
        assert_eq!(op_not(&tail_of(vec![Value::Bool(false)])).unwrap(), Value::Bool(true));
        assert_eq!(op_not(&tail_of(vec![Value::Num(0)])).unwrap(), Value::Bool(false));
        assert_eq!(op_not(&tail_of(vec![Value::Nil])).unwrap(), Value::Bool(false));
    }
}
