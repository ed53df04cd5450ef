//! Runtime values for the Cry evaluator.
//!
//! `Value` is a closed sum over the language's seven value kinds. Adding a
//! kind means every exhaustive `match` in the evaluator has to be revisited,
//! which is the point.
//!
//! Heap-backed payloads (`Str`, `Object`) are built only through factory
//! methods:
//!
//! ```text
//! let s = Value::string("hello");                         // OK
//! let o = Value::object([("a".to_string(), Value::Number(1.0))]); // OK
//! let s = Value::Str(Heap::new(...));                     // ERROR: Heap::new is private
//! ```

mod composite;
mod heap;

use std::fmt;

pub use composite::{FunctionValue, NativeFn, NativeFunctionValue, ObjectValue};
pub use heap::Heap;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// Double-precision number.
    Number(f64),
    /// String value.
    Str(Heap<String>),
    /// Boolean value.
    Bool(bool),
    /// The null singleton.
    Null,
    /// Object: property name to value.
    Object(Heap<ObjectValue>),
    /// User-defined function closing over its declaration environment.
    Function(FunctionValue),
    /// Host-provided function.
    NativeFunction(NativeFunctionValue),
}

// Factory Methods

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create an object value from `(name, value)` pairs.
    pub fn object(properties: impl IntoIterator<Item = (String, Value)>) -> Self {
        Value::Object(Heap::new(properties.into_iter().collect()))
    }

    /// Create a native function value.
    pub fn native(name: &str, func: NativeFn) -> Self {
        Value::NativeFunction(NativeFunctionValue::new(name, func))
    }
}

// Accessors

impl Value {
    /// Kind name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::NativeFunction(_) => "native-function",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Rendering used by `print`: strings bare, everything else as `Display`.
    pub fn to_print_string(&self) -> String {
        match self {
            Value::Str(s) => s.as_str().to_owned(),
            other => other.to_string(),
        }
    }
}

/// Shortest round-trip digits, in plain decimal for magnitudes in
/// `[1e-7, 1e21)` and exponent form (`1e+21`, `1.5e-7`) outside it. The
/// non-finite values use their script spellings and `-0` prints as `0`.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }
    if n < 0.0 {
        f.write_str("-")?;
    }

    // `{:e}` gives the shortest digits that round-trip, e.g. `1.2345e3`.
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => (scientific.as_str(), "0"),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let len = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    // Decimal point position, counted in digits from the left.
    let point = exponent + 1;

    if (len..=21).contains(&point) {
        write!(f, "{digits}{}", zeros(point - len))
    } else if (1..=21).contains(&point) {
        let (int, frac) = digits.split_at(usize::try_from(point).unwrap_or(0));
        write!(f, "{int}.{frac}")
    } else if (-5..=0).contains(&point) {
        write!(f, "0.{}{digits}", zeros(-point))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{lead}e{sign}{}", exponent.unsigned_abs())
        } else {
            write!(f, "{lead}.{rest}e{sign}{}", exponent.unsigned_abs())
        }
    }
}

fn zeros(count: i32) -> String {
    "0".repeat(usize::try_from(count).unwrap_or(0))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => fmt_number(*n, f),
            Value::Str(s) => write!(f, "\"{}\"", s.as_str()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Object(obj) => {
                if obj.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (k, v)) in obj.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, " }}")
            }
            Value::Function(func) => write!(f, "<fn {}>", func.name()),
            Value::NativeFunction(func) => write!(f, "<native fn {}>", func.name()),
        }
    }
}

/// Host-side equality, for tests and embedding code. Script `==` is stricter
/// and lives in `operators`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::NativeFunction(a), Value::NativeFunction(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
