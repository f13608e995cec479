//! Math plugin: FLOOR, CEIL, ABS, ROUND and PI

use super::{num_arg, wrong_count};
use crate::executor::errors::EvalError;
use crate::executor::plugin::Plugin;
use crate::executor::types::{Control, Val};

fn unary(keyword: &str, args: &[Val], op: fn(f64) -> f64) -> Result<Control, EvalError> {
    if args.len() != 1 {
        return Err(wrong_count(keyword, "1", args.len()));
    }
    let n = num_arg(keyword, args, 0)?;
    Ok(Val::Num(op(n)).into())
}

pub fn plugin() -> Plugin {
    Plugin::new("math")
        .native("FLOOR", |_, args| unary("FLOOR", &args, f64::floor))
        .native("CEIL", |_, args| unary("CEIL", &args, f64::ceil))
        .native("ABS", |_, args| unary("ABS", &args, f64::abs))
        .native("ROUND", |_, args| unary("ROUND", &args, f64::round))
        .value("PI", Val::Num(std::f64::consts::PI))
}
