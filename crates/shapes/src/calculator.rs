//! Scientific calculator that sits next to the shape measurements.
//!
//! Free-form expressions go through `evalexpr` with `PI` and `E` bound, the
//! same way parameter formulas are evaluated elsewhere. Bare integer literals
//! are read as floats, so `7 / 2` is `3.5` and large products don't overflow.

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use evalexpr::{build_operator_tree, ContextWithMutableVariables, HashMapContext, Value};

/// Errors from [`Calculator`] and the free functions in this module
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Evaluation error: {0}")]
    Evaluation(String),
    #[error("Expected a number, got {0}")]
    NotANumber(String),
    #[error("{operation} is undefined for {value}")]
    Domain { operation: String, value: f64 },
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

pub type CalculatorResult = Result<f64, CalculatorError>;

/// Single-argument functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm
    Log,
    Ln,
    Sqrt,
    Square,
    Reciprocal,
}

impl Function {
    pub fn symbol(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Square => "x^2",
            Function::Reciprocal => "1/x",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Function {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(Function::Sin),
            "cos" => Ok(Function::Cos),
            "tan" => Ok(Function::Tan),
            "log" => Ok(Function::Log),
            "ln" => Ok(Function::Ln),
            "sqrt" => Ok(Function::Sqrt),
            "x^2" | "square" => Ok(Function::Square),
            "1/x" | "reciprocal" => Ok(Function::Reciprocal),
            other => Err(CalculatorError::UnknownOperation(other.to_string())),
        }
    }
}

/// Two-argument operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Power => "^",
        }
    }
}

impl FromStr for Operator {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            "^" => Ok(Operator::Power),
            other => Err(CalculatorError::UnknownOperation(other.to_string())),
        }
    }
}

/// Apply a unary function, rejecting arguments outside its domain
pub fn apply(function: Function, x: f64) -> CalculatorResult {
    let domain_error = || CalculatorError::Domain {
        operation: function.symbol().to_string(),
        value: x,
    };
    match function {
        Function::Sin => Ok(x.sin()),
        Function::Cos => Ok(x.cos()),
        Function::Tan => Ok(x.tan()),
        Function::Log if x <= 0.0 => Err(domain_error()),
        Function::Log => Ok(x.log10()),
        Function::Ln if x <= 0.0 => Err(domain_error()),
        Function::Ln => Ok(x.ln()),
        Function::Sqrt if x < 0.0 => Err(domain_error()),
        Function::Sqrt => Ok(x.sqrt()),
        Function::Square => Ok(x.powi(2)),
        Function::Reciprocal if x == 0.0 => Err(domain_error()),
        Function::Reciprocal => Ok(1.0 / x),
    }
}

/// Apply a binary operator; division by zero is a domain error
pub fn combine(lhs: f64, operator: Operator, rhs: f64) -> CalculatorResult {
    match operator {
        Operator::Add => Ok(lhs + rhs),
        Operator::Subtract => Ok(lhs - rhs),
        Operator::Multiply => Ok(lhs * rhs),
        Operator::Divide if rhs == 0.0 => Err(CalculatorError::Domain {
            operation: operator.symbol().to_string(),
            value: rhs,
        }),
        Operator::Divide => Ok(lhs / rhs),
        Operator::Power => Ok(lhs.powf(rhs)),
    }
}

/// Evaluate an arithmetic expression with `PI` and `E` bound
pub fn evaluate(expression: &str) -> CalculatorResult {
    evaluate_with(expression, &[])
}

fn evaluate_with(expression: &str, bindings: &[(&str, f64)]) -> CalculatorResult {
    let mut context = HashMapContext::new();
    let constants = [("PI", PI), ("E", E)];
    for (name, value) in constants.iter().chain(bindings) {
        context
            .set_value(name.to_string(), Value::Float(*value))
            .map_err(|e| CalculatorError::Evaluation(e.to_string()))?;
    }

    let tree = build_operator_tree(&float_literals(expression))
        .map_err(|e| CalculatorError::Parse(e.to_string()))?;
    let value = tree
        .eval_with_context(&context)
        .map_err(|e| CalculatorError::Evaluation(e.to_string()))?;

    let value = match value {
        Value::Float(f) => f,
        Value::Int(i) => i as f64,
        other => return Err(CalculatorError::NotANumber(format!("{other:?}"))),
    };
    if !value.is_finite() {
        return Err(CalculatorError::Evaluation(format!("{expression} does not have a finite value")));
    }
    Ok(value)
}

/// Rewrite integer literals as float literals (`7` becomes `7.0`).
///
/// Digits inside identifiers (`x2`) and string literals are left alone, as
/// are literals that already carry a fraction or an exponent.
fn float_literals(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() + 8);
    let mut chars = expression.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if c == '"' {
            while let Some(c) = chars.next() {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == '"' {
                    break;
                }
            }
        } else if c.is_alphabetic() || c == '_' {
            while let Some(&c) = chars.peek() {
                if !(c.is_alphanumeric() || c == '_' || c == ':') {
                    break;
                }
                out.push(c);
                chars.next();
            }
        } else if c.is_ascii_digit() {
            let mut is_float = false;
            while let Some(&c) = chars.peek() {
                let exponent_sign =
                    is_float && matches!(c, '+' | '-') && out.ends_with(|p: char| p == 'e' || p == 'E');
                if matches!(c, '.' | 'e' | 'E') {
                    is_float = true;
                } else if !(c.is_ascii_digit() || exponent_sign) {
                    break;
                }
                out.push(c);
                chars.next();
            }
            if !is_float {
                out.push_str(".0");
            }
        }
    }
    out
}

/// Calculator session: a tape of past calculations, a memory register and
/// the last answer, bound as `ans` in later expressions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    tape: Vec<String>,
    memory: Option<f64>,
    last: Option<f64>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, expression: &str) -> CalculatorResult {
        let bindings: Vec<(&str, f64)> = self.last.map(|v| ("ans", v)).into_iter().collect();
        let value = evaluate_with(expression, &bindings)?;
        self.push(format!("{expression} = {value}"), value);
        Ok(value)
    }

    pub fn apply(&mut self, function: Function, x: f64) -> CalculatorResult {
        let value = apply(function, x)?;
        self.push(format!("{function}({x}) = {value}"), value);
        Ok(value)
    }

    pub fn combine(&mut self, lhs: f64, operator: Operator, rhs: f64) -> CalculatorResult {
        let value = combine(lhs, operator, rhs)?;
        self.push(format!("{lhs} {} {rhs} = {value}", operator.symbol()), value);
        Ok(value)
    }

    fn push(&mut self, entry: String, value: f64) {
        self.tape.push(entry);
        self.last = Some(value);
    }

    pub fn tape(&self) -> &[String] {
        &self.tape
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }

    pub fn memory(&self) -> Option<f64> {
        self.memory
    }

    pub fn memory_add(&mut self, value: f64) {
        self.memory = Some(self.memory.unwrap_or(0.0) + value);
    }

    pub fn memory_subtract(&mut self, value: f64) {
        self.memory = Some(self.memory.unwrap_or(0.0) - value);
    }

    pub fn memory_clear(&mut self) {
        self.memory = None;
    }

    pub fn clear_tape(&mut self) {
        self.tape.clear();
        self.last = None;
    }
}
