//! The `evec` command-line calculator.
//!
//! Invocations look like `evec [--precision N] <op> <vector> [<vector>|<scalar>]`. Vectors are
//! written as comma-separated numbers (`1,2.5,-3`); an empty argument denotes the vector with no
//! dimensions.

use std::fmt;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::Vector;

/// Name of the environment variable holding the output precision.
pub const PRECISION_VAR: &str = "EVEC_PRECISION";

/// Euclidean vector calculator
#[derive(Debug, Parser)]
#[command(name = "evec")]
#[command(version)]
#[command(about = "Checked arithmetic on Euclidean vectors", long_about = None)]
pub struct Cli {
    /// Number of decimal places to print for each value
    #[arg(short, long, env = PRECISION_VAR)]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub op: Op,
}

/// An operation supported by the calculator, together with its operands.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Op {
    /// Element-wise sum of two vectors
    Add {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        lhs: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        rhs: Vector,
    },
    /// Element-wise difference of two vectors
    Sub {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        lhs: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        rhs: Vector,
    },
    /// Dot product of two vectors
    Dot {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        lhs: Vector,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        rhs: Vector,
    },
    /// Vector scaled by a scalar
    Mul {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
        #[arg(allow_hyphen_values = true)]
        scalar: f64,
    },
    /// Vector divided by a non-zero scalar
    Div {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
        #[arg(allow_hyphen_values = true)]
        scalar: f64,
    },
    /// Euclidean norm of a vector
    Norm {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
    },
    /// Unit vector pointing in the direction of a vector
    Unit {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
    },
    /// Prints a vector unchanged
    Show {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector,
    },
}

impl Op {
    /// Applies the operation to its operands.
    ///
    /// Failures are the vector's own [`Error`][crate::Error]s; malformed invocations are already
    /// rejected while parsing.
    pub fn evaluate(self) -> crate::Result<Value> {
        log::debug!("evaluating {self:?}");

        let value = match self {
            Op::Add { lhs, rhs } => Value::Vector((lhs + &rhs)?),
            Op::Sub { lhs, rhs } => Value::Vector((lhs - &rhs)?),
            Op::Dot { lhs, rhs } => Value::Scalar(lhs.dot(&rhs)?),
            Op::Mul { vector, scalar } => Value::Vector(vector * scalar),
            Op::Div { vector, scalar } => Value::Vector((vector / scalar)?),
            Op::Norm { vector } => Value::Scalar(vector.norm()?),
            Op::Unit { vector } => Value::Vector(vector.normalize()?),
            Op::Show { vector } => Value::Vector(vector),
        };
        Ok(value)
    }
}

/// Result of evaluating an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(Vector),
}

/// Formatting parameters (eg. the precision) are forwarded to the contained value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => fmt::Display::fmt(s, f),
            Value::Vector(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Parses a comma-separated list of numbers into a [`Vector`].
pub fn parse_vector(s: &str) -> anyhow::Result<Vector> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vector::default());
    }
    s.split(',')
        .map(|elem| {
            let elem = elem.trim();
            elem.parse::<f64>()
                .with_context(|| format!("invalid vector element `{elem}`"))
        })
        .collect()
}

/// Renders `value` with the given number of decimal places, or in its default form.
pub fn render(value: &Value, precision: Option<usize>) -> String {
    match precision {
        Some(prec) => format!("{value:.prec$}"),
        None => value.to_string(),
    }
}
