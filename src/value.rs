use std::collections::HashMap;

use crate::output::to_json_string;

/// A runtime value produced by evaluating an argument expression.
///
/// This is a closed union over the shapes the evaluator can produce or
/// receive from the context: the absent marker, booleans, numbers, strings,
/// arrays, and nested string-keyed mappings. There is a single numeric type;
/// all arithmetic is IEEE double precision.
///
/// # Examples
///
/// ```
/// use argot::Value;
/// use std::collections::HashMap;
///
/// // Scalar values
/// let absent = Value::Null;
/// let boolean = Value::Boolean(true);
/// let number = Value::Number(42.0);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let array = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
///
/// let mut obj = HashMap::new();
/// obj.insert("key".to_string(), Value::String("value".to_string()));
/// let object = Value::Object(obj);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent marker (missing, null, or undefined)
    Null,

    /// Boolean (true/false)
    Boolean(bool),

    /// IEEE double-precision number
    Number(f64),

    /// UTF-8 string
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Nested mapping with string keys
    Object(HashMap<String, Value>),
}

impl Value {
    /// Check if the value is truthy (for conditions and `&&`/`||`/`!`).
    ///
    /// Falsy values are: `Null`, `false`, `0` (and NaN), the empty string,
    /// and the case-insensitive strings `"undefined"`, `"null"`, `"false"`
    /// and `"0"`. Everything else is truthy, including empty arrays and
    /// empty objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot::Value;
    ///
    /// assert!(!Value::String("False".to_string()).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(Value::Array(vec![]).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        use Value::*;
        match self {
            Null => false,
            Boolean(b) => *b,
            Number(n) => *n != 0.0 && !n.is_nan(),
            String(s) => {
                !s.is_empty()
                    && !matches!(
                        s.to_lowercase().as_str(),
                        "undefined" | "null" | "false" | "0"
                    )
            }
            Array(_) => true,
            Object(_) => true,
        }
    }

    /// Get as a number, if the value has a well-defined numeric form.
    ///
    /// Numbers pass through, booleans become `1`/`0`, and strings are
    /// parsed as floats after trimming. Anything else is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Total numeric coercion: [`as_number`](Self::as_number) with `0` for
    /// every shape that has no numeric form.
    pub fn coerce_number(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    /// Get the natural string form.
    ///
    /// Used for concatenation, loose equality and batch stringification:
    /// `Null` becomes `"undefined"`, numbers drop a trailing `.0`, and
    /// arrays/objects render as compact JSON.
    pub fn as_string(&self) -> String {
        match self {
            Value::Null => "undefined".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Object(_) => to_json_string(self),
        }
    }

    /// Loose equality.
    ///
    /// Two absent values are equal and an absent value never equals a
    /// present one. Otherwise, if both sides have a well-defined numeric
    /// form the comparison is numeric; if not, it falls back to a
    /// case-insensitive comparison of the string forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use argot::Value;
    ///
    /// assert!(Value::Number(5.0).loose_eq(&Value::String("5".to_string())));
    /// assert!(Value::String("On".to_string()).loose_eq(&Value::String("ON".to_string())));
    /// assert!(!Value::Null.loose_eq(&Value::Number(0.0)));
    /// ```
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => self.as_string().to_lowercase() == other.as_string().to_lowercase(),
            },
        }
    }
}

/// Format a number the way the expression language prints it: whole values
/// without a decimal point, and NaN/infinities spelled out.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        n.to_string()
    }
}
