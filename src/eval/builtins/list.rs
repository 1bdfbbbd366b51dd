use crate::ast::Value;
use crate::error::InterpretError;
use crate::eval::apply::apply;
use crate::eval::args::exact_args;

pub fn op_is_list(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("list?", tail, 1)?;
    let value = apply(args[0])?;
    Ok(Value::Bool(value.is_proper_list()))
}

pub fn op_is_null(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("null?", tail, 1)?;
    Ok(Value::Bool(apply(args[0])?.is_nil()))
}

/// A `Pair` whose car and cdr are *both* non-`Nil` — a pair built from two
/// occupied slots, not one with an empty list tucked into either side.
pub fn op_is_pair(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("pair?", tail, 1)?;
    let value = apply(args[0])?;
    let ans = match &value {
        Value::Pair(car, cdr) => !car.is_nil() && !cdr.is_nil(),
        _ => false,
    };
    Ok(Value::Bool(ans))
}

/// Returns the call's own syntactic argument tail, unevaluated — this
/// matches the source's observable behavior and is preserved even though it
/// is unusual for a Lisp `list` form, which would normally evaluate each
/// element before consing up the result.
pub fn op_list(tail: &Value) -> Result<Value, InterpretError> {
    Ok(tail.clone())
}

pub fn op_cons(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("cons", tail, 2)?;
    let car = apply(args[0])?;
    let cdr = apply(args[1])?;
    Ok(Value::pair(car, cdr))
}

pub fn op_car(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("car", tail, 1)?;
    match apply(args[0])? {
        Value::Pair(car, _) => Ok(car.as_ref().clone()),
        _ => Err(InterpretError::runtime("car expected a pair")),
    }
}

pub fn op_cdr(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("cdr", tail, 1)?;
    match apply(args[0])? {
        Value::Pair(_, cdr) => Ok(cdr.as_ref().clone()),
        _ => Err(InterpretError::runtime("cdr expected a pair")),
    }
}

fn non_negative_index(value: Value, context: &str) -> Result<usize, InterpretError> {
    match value {
        Value::Num(n) if n >= 0 => Ok(n as usize),
        Value::Num(_) => Err(InterpretError::runtime(format!("negative index in {context}"))),
        _ => Err(InterpretError::runtime(format!("expected an integer index in {context}"))),
    }
}

/// Both `list-ref` and `list-tail` require the *evaluated* first argument to
/// be a non-empty proper list, mirroring the original's reuse of its `list?`
/// check on the evaluated value (`applier.cpp`'s `OpListRef`/`OpListTail`).
fn evaluated_nonempty_list(expr: &Value, context: &str) -> Result<Value, InterpretError> {
    let value = apply(expr)?;
    if !value.is_proper_list() || !value.is_pair() {
        return Err(InterpretError::runtime(format!("{context} expected a non-empty proper list")));
    }
    Ok(value)
}

pub fn op_list_ref(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("list-ref", tail, 2)?;
    let list = evaluated_nonempty_list(args[0], "list-ref")?;
    let index = non_negative_index(apply(args[1])?, "list-ref")?;

    let mut cursor = &list;
    let mut remaining = index;
    loop {
        match cursor {
            Value::Pair(car, cdr) => {
                if remaining == 0 {
                    return Ok(car.as_ref().clone());
                }
                remaining -= 1;
                cursor = cdr.as_ref();
            }
            _ => return Err(InterpretError::runtime("index out of range in list-ref")),
        }
    }
}

pub fn op_list_tail(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("list-tail", tail, 2)?;
    let list = evaluated_nonempty_list(args[0], "list-tail")?;
    let index = non_negative_index(apply(args[1])?, "list-tail")?;

    let mut cursor = &list;
    let mut remaining = index;
    loop {
        if remaining == 0 {
            return Ok(cursor.clone());
        }
        match cursor {
            Value::Pair(_, cdr) => {
                remaining -= 1;
                cursor = cdr.as_ref();
            }
            _ => return Err(InterpretError::runtime("index out of range in list-tail")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail_of(items: Vec<Value>) -> Value {
        Value::cons_list(items, Value::Nil)
    }

    fn quoted_list(items: Vec<Value>) -> Value {
        Value::quote(Value::cons_list(items, Value::Nil))
    }

    #[test]
    fn list_returns_tail_unevaluated() {
        let tail = tail_of(vec![Value::Num(1), Value::Num(2)]);
        assert_eq!(op_list(&tail).unwrap(), tail);
    }

    #[test]
    fn cons_car_cdr_roundtrip() {
        let pair = op_cons(&tail_of(vec![Value::Num(1), Value::Num(2)])).unwrap();
        assert_eq!(pair, Value::pair(Value::Num(1), Value::Num(2)));
        assert_eq!(
            op_car(&tail_of(vec![quoted_list(vec![Value::Num(1), Value::Num(2), Value::Num(3)])])).unwrap(),
            Value::Num(1)
        );
        assert_eq!(
            op_cdr(&tail_of(vec![quoted_list(vec![Value::Num(1), Value::Num(2), Value::Num(3)])])).unwrap(),
            Value::cons_list(vec![Value::Num(2), Value::Num(3)], Value::Nil)
        );
    }

    #[test]
    fn list_ref_and_list_tail() {
        let list = quoted_list(vec![Value::Num(1), Value::Num(2), Value::Num(3)]);
        assert_eq!(
            op_list_ref(&tail_of(vec![list.clone(), Value::Num(1)])).unwrap(),
            Value::Num(2)
        );
        assert_eq!(
            op_list_tail(&tail_of(vec![list.clone(), Value::Num(3)])).unwrap(),
            Value::Nil
        );
        assert!(op_list_ref(&tail_of(vec![list, Value::Num(7)])).is_err());
    }

    #[test]
    fn pair_predicate_requires_both_slots_occupied() {
        assert_eq!(
            op_is_pair(&tail_of(vec![quoted_list(vec![Value::Num(1), Value::Num(2)])])).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            op_is_pair(&tail_of(vec![Value::quote(Value::Nil)])).unwrap(),
            Value::Bool(false)
        );
    }
}
