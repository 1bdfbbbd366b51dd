use crate::ast::Value;

/// Renders a value back to the surface syntax it would re-read from. Total,
/// and a left inverse of parsing for any value that doesn't itself contain
/// a call form (printing a parsed-but-not-evaluated tree reproduces text
/// that reparses to an equal value).
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Nil => "()".to_string(),
        Value::Num(n) => n.to_string(),
        Value::Bool(true) => "#t".to_string(),
        Value::Bool(false) => "#f".to_string(),
        Value::Sym(s) => s.clone(),
        Value::Quote(inner) => format!("(quote {})", to_text(inner)),
        Value::Pair(car, cdr) => print_list(car, cdr),
    }
}

/// Walks the cdr chain of a pair, printing `()` for a proper end, ` . <v>`
/// for a dotted tail, and an embedded `Nil` car (an empty list used as a
/// list element) as `()`.
fn print_list(car: &Value, cdr: &Value) -> String {
    let mut out = String::from("(");
    out.push_str(&to_text(car));

    let mut cursor = cdr;
    loop {
        match cursor {
            Value::Nil => break,
            Value::Pair(next_car, next_cdr) => {
                out.push(' ');
                out.push_str(&to_text(next_car));
                cursor = next_cdr;
            }
            other => {
                out.push_str(" . ");
                out.push_str(&to_text(other));
                break;
            }
        }
    }

    out.push(')');
    out
}
