//! The `number | string` payload constraint.
//!
//! [`Data`] is the compile-time bound carried by [`LinkedList`](crate::LinkedList):
//! it is sealed and only implemented for the numeric primitives and the string
//! types, so `LinkedList<bool>` does not type-check. [`Value`] is the same union
//! at runtime, for payloads that arrive as text or JSON and must be checked
//! before they are stored.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

mod sealed {
    pub trait Sealed {}
}

/// Types allowed as list payloads: numbers and strings.
pub trait Data: fmt::Display + Clone + sealed::Sealed {}

macro_rules! impl_data {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Data for $ty {}
        )*
    };
}

impl_data!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    Box<str>, Value,
);

impl sealed::Sealed for &str {}
impl Data for &str {}

/// A runtime value of the `number | string` union.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
}

impl Value {
    /// Convert a decoded JSON value, rejecting anything that is not a number
    /// or a string.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or(Error::InvalidType { found: "number" }),
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            other => Err(Error::InvalidType {
                found: json_kind(other),
            }),
        }
    }

    /// Interpret a single command-line token.
    ///
    /// JSON literals (`1`, `2.5`, `"a"`, `true`, `[1]`) go through
    /// [`Value::from_json`]. A number literal too large for `f64` becomes
    /// `Infinity` with its sign. A token wrapped in single quotes is a string
    /// with the quotes removed. Anything else that is not valid JSON is taken
    /// as a bare string.
    pub fn parse(token: &str) -> Result<Self> {
        if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
            return Ok(Value::String(token[1..token.len() - 1].to_string()));
        }
        match serde_json::from_str::<serde_json::Value>(token) {
            Ok(json) => Value::from_json(&json),
            Err(_) if is_number_literal(token) => match token.parse::<f64>() {
                Ok(n) => Ok(Value::Number(n)),
                Err(_) => Ok(Value::String(token.to_string())),
            },
            Err(_) => Ok(Value::String(token.to_string())),
        }
    }

    /// The `typeof`-style name of this value.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    /// Narrow on the variant: a string yields its length in UTF-16 code units,
    /// a number is rounded with ties going toward positive infinity.
    pub fn transform(&self) -> f64 {
        match self {
            Value::String(s) => s.encode_utf16().count() as f64,
            Value::Number(n) => round_half_up(*n),
        }
    }
}

/// Whether `token` follows the JSON number grammar:
/// `-? digits (. digits)? ([eE] [+-]? digits)?`.
fn is_number_literal(token: &str) -> bool {
    fn digits(bytes: &[u8], mut i: usize) -> usize {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    }

    let bytes = token.as_bytes();
    let mut i = usize::from(bytes.first() == Some(&b'-'));
    let start = i;
    i = digits(bytes, i);
    if i == start {
        return false;
    }
    if bytes.get(i) == Some(&b'.') {
        let frac = i + 1;
        i = digits(bytes, frac);
        if i == frac {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp = i;
        i = digits(bytes, exp);
        if i == exp {
            return false;
        }
    }
    i == bytes.len()
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn round_half_up(n: f64) -> f64 {
    if n - n.floor() == 0.5 {
        n.ceil()
    } else {
        n.round()
    }
}

/// Whether `n` has no fractional part and fits an `i64` exactly.
fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 prints as 0
        f.write_str("0")
    } else if is_integral(n) {
        write!(f, "{}", n as i64)
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // 1e21 -> "1e+21", 1.5e-7 -> "1.5e-7"
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exp),
        }
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) if is_integral(*n) => serializer.serialize_i64(*n as i64),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_strings() {
        assert_eq!(Value::from_json(&json!(1)).unwrap(), Value::Number(1.0));
        assert_eq!(Value::from_json(&json!("")).unwrap(), Value::from(""));
    }

    #[test]
    fn rejects_other_kinds() {
        for (json, kind) in [
            (json!(true), "boolean"),
            (json!(null), "null"),
            (json!([1]), "array"),
            (json!({"a": 1}), "object"),
        ] {
            match Value::from_json(&json) {
                Err(Error::InvalidType { found }) => assert_eq!(found, kind),
                other => panic!("expected InvalidType for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(Value::parse("42").unwrap(), Value::from(42));
        assert_eq!(Value::parse("-0.5").unwrap(), Value::Number(-0.5));
        assert_eq!(Value::parse("\"b\"").unwrap(), Value::from("b"));
        assert_eq!(Value::parse("'a'").unwrap(), Value::from("a"));
        assert_eq!(Value::parse("''").unwrap(), Value::from(""));
        assert_eq!(Value::parse("hello").unwrap(), Value::from("hello"));
        assert!(matches!(
            Value::parse("false"),
            Err(Error::InvalidType { found: "boolean" })
        ));
    }

    #[test]
    fn transform_narrows_on_variant() {
        assert_eq!(Value::from("abc").transform(), 3.0);
        assert_eq!(Value::from("").transform(), 0.0);
        assert_eq!(Value::Number(2.5).transform(), 3.0);
        assert_eq!(Value::Number(-2.5).transform(), -2.0);
        assert_eq!(Value::Number(1.4).transform(), 1.0);
    }

    #[test]
    fn numbers_display_like_javascript() {
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::Number(1e21).to_string(), "1e+21");
        assert_eq!(Value::Number(-1.5e25).to_string(), "-1.5e+25");
        assert_eq!(Value::Number(1e-7).to_string(), "1e-7");
        assert_eq!(Value::Number(2.5e-8).to_string(), "2.5e-8");
        assert_eq!(Value::Number(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn out_of_range_literals_become_infinity() {
        assert_eq!(Value::parse("1e400").unwrap(), Value::Number(f64::INFINITY));
        assert_eq!(Value::parse("-1e400").unwrap(), Value::Number(f64::NEG_INFINITY));
        assert_eq!(Value::parse("1e400").unwrap().kind(), "number");
        assert_eq!(Value::parse("1e").unwrap(), Value::from("1e"));
        assert_eq!(Value::parse("12abc").unwrap(), Value::from("12abc"));
    }

    #[test]
    fn kind_names_the_variant() {
        assert_eq!(Value::from(3).kind(), "number");
        assert_eq!(Value::from("3").kind(), "string");
        assert_eq!(Value::parse("'3'").unwrap().kind(), "string");
    }

    #[test]
    fn serializes_integral_numbers_without_fraction() {
        let out = serde_json::to_string(&vec![Value::from(1), Value::Number(1.5), Value::from("x")])
            .unwrap();
        assert_eq!(out, r#"[1,1.5,"x"]"#);
    }
}
