//! Fixed-point complex command

use crate::{ComplexArgs, ComplexOp};
use anyhow::{Context, Result, bail};
use pixkit_math::{Complex, from_fixed, to_fixed};

/// Result of a complex operation: either a complex value or a scalar.
enum Value {
    Complex(Complex),
    Scalar(i32),
}

pub fn run(args: ComplexArgs, verbose: bool) -> Result<()> {
    let a = parse_operand(&args.a, args.raw)?;
    let b = match (&args.b, args.op.is_binary()) {
        (Some(s), true) => Some(parse_operand(s, args.raw)?),
        (None, true) => bail!("{:?} needs a second operand", args.op),
        (Some(_), false) => bail!("{:?} takes a single operand", args.op),
        (None, false) => None,
    };

    if verbose {
        match b {
            Some(b) => println!("a = {}, b = {}", a, b),
            None => println!("a = {}", a),
        }
    }

    let value = evaluate(args.op, a, b)?;
    match value {
        Value::Complex(c) => {
            let (re, im) = c.to_f64_pair();
            println!("{} = {:.4} {:+.4}i", c, re, im);
        }
        Value::Scalar(n) => println!("{} = {:.4}", n, from_fixed(n)),
    }
    Ok(())
}

fn evaluate(op: ComplexOp, a: Complex, b: Option<Complex>) -> Result<Value> {
    let rhs = || b.context("missing second operand");
    let value = match op {
        ComplexOp::Add => Value::Complex(a + rhs()?),
        ComplexOp::Sub => Value::Complex(a - rhs()?),
        ComplexOp::Mul => Value::Complex(a * rhs()?),
        ComplexOp::Div => Value::Complex(a.div(rhs()?)?),
        ComplexOp::Magnitude => Value::Scalar(a.magnitude()?),
        ComplexOp::Square => Value::Scalar(a.square()?),
        ComplexOp::Conj => Value::Complex(a.conjugate()),
    };
    Ok(value)
}

/// Parses `re,im`, scaling real-valued input unless `raw` is set.
fn parse_operand(s: &str, raw: bool) -> Result<Complex> {
    let Some((re, im)) = s.split_once(',') else {
        bail!("invalid operand '{}': expected re,im", s);
    };
    let (re, im) = (re.trim(), im.trim());
    if raw {
        let re = re.parse::<i32>().with_context(|| format!("invalid real part '{}'", re))?;
        let im = im.parse::<i32>().with_context(|| format!("invalid imaginary part '{}'", im))?;
        Ok(Complex::new(re, im))
    } else {
        let re = re.parse::<f64>().with_context(|| format!("invalid real part '{}'", re))?;
        let im = im.parse::<f64>().with_context(|| format!("invalid imaginary part '{}'", im))?;
        Ok(Complex::new(to_fixed(re), to_fixed(im)))
    }
}
