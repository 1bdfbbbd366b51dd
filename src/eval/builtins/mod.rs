mod boolean;
mod integer;
mod list;

pub use boolean::{op_and, op_is_boolean, op_not, op_or};
pub use integer::{
    op_abs, op_divide, op_equal, op_greater, op_greater_equal, op_is_number, op_less,
    op_less_equal, op_max, op_min, op_minus, op_multiply, op_plus,
};
pub use list::{
    op_car, op_cdr, op_cons, op_is_list, op_is_null, op_is_pair, op_list, op_list_ref,
    op_list_tail,
};
