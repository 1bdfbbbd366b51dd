use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::ast::Value;
use crate::error::InterpretError;
use crate::eval::builtins::*;

type Builtin = fn(&Value) -> Result<Value, InterpretError>;

/// Flat name -> handler table, built once and looked up by the symbol in a
/// call form's head position.
static BUILTINS: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, Builtin> = HashMap::new();
    m.insert("number?", op_is_number);
    m.insert("+", op_plus);
    m.insert("-", op_minus);
    m.insert("*", op_multiply);
    m.insert("/", op_divide);
    m.insert("max", op_max);
    m.insert("min", op_min);
    m.insert("abs", op_abs);
    m.insert("=", op_equal);
    m.insert("<", op_less);
    m.insert(">", op_greater);
    m.insert("<=", op_less_equal);
    m.insert(">=", op_greater_equal);
    m.insert("boolean?", op_is_boolean);
    m.insert("not", op_not);
    m.insert("and", op_and);
    m.insert("or", op_or);
    m.insert("list?", op_is_list);
    m.insert("null?", op_is_null);
    m.insert("pair?", op_is_pair);
    m.insert("list", op_list);
    m.insert("cons", op_cons);
    m.insert("car", op_car);
    m.insert("cdr", op_cdr);
    m.insert("list-ref", op_list_ref);
    m.insert("list-tail", op_list_tail);
    m
});

/// The whole evaluator. `Num`, `Bool`, `Sym` and `Nil` are self-evaluating;
/// `Quote` strips its own wrapper and yields the wrapped tree untouched; a
/// `Pair` is a call form whose head is evaluated and must land on a `Sym`
/// naming a builtin. There is no variable binding and no user-defined
/// procedure, so the head can never be anything else worth calling.
pub fn apply(value: &Value) -> Result<Value, InterpretError> {
    match value {
        Value::Nil => Ok(Value::Nil),
        Value::Num(_) | Value::Bool(_) | Value::Sym(_) => Ok(value.clone()),
        Value::Quote(inner) => Ok(inner.as_ref().clone()),
        Value::Pair(car, cdr) => {
            log::trace!("apply: call form, head = {:?}", car);
            match apply(car)? {
                Value::Nil => Err(InterpretError::runtime("empty command")),
                Value::Sym(name) => dispatch(&name, cdr),
                other => Err(InterpretError::runtime(format!(
                    "cannot call {other:?}: operator position must be a symbol"
                ))),
            }
        }
    }
}

fn dispatch(name: &str, tail: &Value) -> Result<Value, InterpretError> {
    match BUILTINS.get(name) {
        Some(handler) => handler(tail),
        None => Err(InterpretError::runtime(format!("unknown operator '{name}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_self_evaluate() {
        assert_eq!(apply(&Value::Num(5)).unwrap(), Value::Num(5));
        assert_eq!(apply(&Value::Bool(true)).unwrap(), Value::Bool(true));
        assert_eq!(apply(&Value::Sym("x".into())).unwrap(), Value::Sym("x".into()));
        assert_eq!(apply(&Value::Nil).unwrap(), Value::Nil);
    }

    #[test]
    fn quote_strips_its_wrapper_without_further_evaluation() {
        let quoted = Value::quote(Value::cons_list(
            vec![Value::Sym("+".into()), Value::Num(1)],
            Value::Nil,
        ));
        let expected = Value::cons_list(vec![Value::Sym("+".into()), Value::Num(1)], Value::Nil);
        assert_eq!(apply(&quoted).unwrap(), expected);
    }

    #[test]
    fn simple_call_dispatches_to_builtin() {
        let call = Value::cons_list(
            vec![Value::Sym("+".into()), Value::Num(1), Value::Num(2)],
            Value::Nil,
        );
        assert_eq!(apply(&call).unwrap(), Value::Num(3));
    }

    #[test]
    fn unknown_operator_is_runtime_error() {
        let call = Value::cons_list(vec![Value::Sym("frobnicate".into())], Value::Nil);
        assert!(matches!(apply(&call), Err(InterpretError::Runtime(_))));
    }

    #[test]
    fn nil_head_is_empty_command() {
        let call = Value::pair(Value::Nil, Value::Nil);
        let err = apply(&call).unwrap_err();
        assert_eq!(err, InterpretError::runtime("empty command"));
    }

    #[test]
    fn non_symbol_head_is_a_runtime_error() {
        let call = Value::pair(Value::Num(1), Value::Nil);
        assert!(matches!(apply(&call), Err(InterpretError::Runtime(_))));
    }

    #[test]
    fn nested_calls_compose() {
        let call = Value::cons_list(
            vec![
                Value::Sym("*".into()),
                Value::cons_list(vec![Value::Sym("+".into()), Value::Num(1), Value::Num(2)], Value::Nil),
                Value::Num(3),
            ],
            Value::Nil,
        );
        assert_eq!(apply(&call).unwrap(), Value::Num(9));
    }
}
