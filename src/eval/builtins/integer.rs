use crate::ast::Value;
use crate::error::InterpretError;
use crate::eval::apply::apply;
use crate::eval::args::{at_least_one, collect_syntactic_args, exact_args};

fn eval_number(expr: &Value, context: &str) -> Result<i64, InterpretError> {
    match apply(expr)? {
        Value::Num(n) => Ok(n),
        _ => Err(InterpretError::runtime(format!("expected number in {context}"))),
    }
}

pub fn op_is_number(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("number?", tail, 1)?;
    Ok(Value::Bool(matches!(apply(args[0])?, Value::Num(_))))
}

/// Variadic, 0 or more: empty sum is 0. Overflow wraps rather than panicking,
/// matching the source's native 64-bit signed arithmetic.
pub fn op_plus(tail: &Value) -> Result<Value, InterpretError> {
    let args = collect_syntactic_args(tail)?;
    let mut sum: i64 = 0;
    for a in args {
        sum = sum.wrapping_add(eval_number(a, "+")?);
    }
    Ok(Value::Num(sum))
}

/// `x` for one arg; otherwise `x - y - z - ...`, left-folded.
pub fn op_minus(tail: &Value) -> Result<Value, InterpretError> {
    let args = at_least_one("-", tail)?;
    let mut acc = eval_number(args[0], "-")?;
    for a in &args[1..] {
        acc = acc.wrapping_sub(eval_number(a, "-")?);
    }
    Ok(Value::Num(acc))
}

/// Variadic, 0 or more: empty product is 1.
pub fn op_multiply(tail: &Value) -> Result<Value, InterpretError> {
    let args = collect_syntactic_args(tail)?;
    let mut product: i64 = 1;
    for a in args {
        product = product.wrapping_mul(eval_number(a, "*")?);
    }
    Ok(Value::Num(product))
}

/// Left-fold integer division, truncating toward zero (Rust's native `/`
/// already does this for signed integers). Division by zero, and the one
/// representable overflow (`i64::MIN / -1`), are *Runtime* errors.
pub fn op_divide(tail: &Value) -> Result<Value, InterpretError> {
    let args = at_least_one("/", tail)?;
    if args.len() < 2 {
        return Err(InterpretError::runtime("/ expects operand(s)"));
    }
    let mut acc = eval_number(args[0], "/")?;
    for a in &args[1..] {
        let divisor = eval_number(a, "/")?;
        if divisor == 0 {
            return Err(InterpretError::runtime("division by zero in /"));
        }
        acc = acc
            .checked_div(divisor)
            .ok_or_else(|| InterpretError::runtime("quotient overflow in /"))?;
    }
    Ok(Value::Num(acc))
}

pub fn op_max(tail: &Value) -> Result<Value, InterpretError> {
    let args = at_least_one("max", tail)?;
    let mut best = eval_number(args[0], "max")?;
    for a in &args[1..] {
        best = best.max(eval_number(a, "max")?);
    }
    Ok(Value::Num(best))
}

pub fn op_min(tail: &Value) -> Result<Value, InterpretError> {
    let args = at_least_one("min", tail)?;
    let mut best = eval_number(args[0], "min")?;
    for a in &args[1..] {
        best = best.min(eval_number(a, "min")?);
    }
    Ok(Value::Num(best))
}

pub fn op_abs(tail: &Value) -> Result<Value, InterpretError> {
    let args = exact_args("abs", tail, 1)?;
    let n = eval_number(args[0], "abs")?;
    let abs = n
        .checked_abs()
        .ok_or_else(|| InterpretError::runtime("abs overflow"))?;
    Ok(Value::Num(abs))
}

/// Shared shape for the chained comparisons: zero or more arguments, vacuous
/// case is `#t`, evaluation (and comparison) short-circuits at the first
/// failing adjacent pair.
fn chained_comparison(
    tail: &Value,
    context: &str,
    holds: impl Fn(i64, i64) -> bool,
) -> Result<Value, InterpretError> {
    let args = collect_syntactic_args(tail)?;
    let mut iter = args.into_iter();
    let Some(first) = iter.next() else {
        return Ok(Value::Bool(true));
    };
    let mut last = eval_number(first, context)?;
    for a in iter {
        let next = eval_number(a, context)?;
        if !holds(last, next) {
            return Ok(Value::Bool(false));
        }
        last = next;
    }
    Ok(Value::Bool(true))
}

pub fn op_equal(tail: &Value) -> Result<Value, InterpretError> {
    chained_comparison(tail, "=", |a, b| a == b)
}

pub fn op_less(tail: &Value) -> Result<Value, InterpretError> {
    chained_comparison(tail, "<", |a, b| a < b)
}

pub fn op_greater(tail: &Value) -> Result<Value, InterpretError> {
    chained_comparison(tail, ">", |a, b| a > b)
}

pub fn op_less_equal(tail: &Value) -> Result<Value, InterpretError> {
    chained_comparison(tail, "<=", |a, b| a <= b)
}

pub fn op_greater_equal(tail: &Value) -> Result<Value, InterpretError> {
    chained_comparison(tail, ">=", |a, b| a >= b)
}
