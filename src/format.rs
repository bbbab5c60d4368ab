//! # Template Formatter
//!
//! Renders a printf-style message template against a slice of typed argument
//! values. This replaces C-style variadic formatting with a type-safe
//! interpolation: arguments are carried as [`Value`] variants constructed via
//! `From` conversions (usually through the [`vals!`](crate::vals) macro), so
//! an argument/placeholder mismatch can only ever degrade the output, never
//! touch undefined behavior or panic.
//!
//! ## Recognized specifiers
//!
//! `%s` (string), `%d`/`%i` (signed integer), `%u` (unsigned integer),
//! `%f` (float), `%c` (char), `%x` (lowercase hex for integers), and `%%`
//! for a literal percent sign. Every specifier except `%%` consumes one
//! argument and renders it through the value's natural display form; the
//! specifier letter selects intent, not a reinterpretation of the bytes, so
//! passing a string to `%d` simply prints the string.
//!
//! ## Degradation contract
//!
//! Formatting is best-effort and infallible:
//!
//! - More placeholders than arguments: the surplus placeholders are left
//!   verbatim in the output.
//! - More arguments than placeholders: the surplus arguments are ignored.
//! - Unrecognized specifier (e.g. `%q`): copied through verbatim without
//!   consuming an argument.
//! - A trailing lone `%` is copied through verbatim.
//!
//! The output buffer is a dynamically growing `String`, so there is no
//! truncation bound.
//!
//! ## Examples
//!
//! ```rust
//! use duolog::{format::render, vals};
//!
//! assert_eq!(render("%s-%d", vals!["x", 5]), "x-5");
//! assert_eq!(render("%d%% done", vals![80]), "80% done");
//! assert_eq!(render("missing: %s", vals![]), "missing: %s");
//! ```

use std::fmt;

/// A typed formatting argument.
///
/// Constructed through `From` conversions rather than directly, so call sites
/// read like a plain argument list:
///
/// ```rust
/// use duolog::format::Value;
///
/// let args: Vec<Value> = vec!["x".into(), 5.into(), 2.5.into()];
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    /// Borrowed string slice
    Str(&'a str),
    /// Owned string (for values rendered at the call site)
    Owned(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point
    Float(f64),
    /// Single character
    Char(char),
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Owned(s) => f.write_str(s),
            Value::Int(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Char(c) => write!(f, "{}", c),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Str(v)
    }
}

impl From<String> for Value<'_> {
    fn from(v: String) -> Self {
        Value::Owned(v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(v: &'a String) -> Self {
        Value::Str(v)
    }
}

impl From<char> for Value<'_> {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value<'_> {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value<'_> {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value<'_> {
            fn from(v: $t) -> Self {
                Value::UInt(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

/// Build a `&[Value]` argument slice from a plain list of expressions.
///
/// Each expression goes through `Value::from`, so anything with a `From`
/// conversion (strings, integers, floats, chars, bools) can be listed
/// directly:
///
/// ```rust
/// use duolog::{format::render, vals};
///
/// assert_eq!(render("%s took %d ms", vals!["startup", 42]), "startup took 42 ms");
/// ```
#[macro_export]
macro_rules! vals {
    () => {
        &[][..]
    };
    ($($v:expr),+ $(,)?) => {
        &[$($crate::format::Value::from($v)),+][..]
    };
}

/// Render `template` with `args` substituted for printf-style placeholders.
///
/// See the module docs for the recognized specifiers and the degradation
/// contract. This function never panics and never returns an error; malformed
/// templates produce best-effort output so a logging call can never take the
/// host program down.
pub fn render(template: &str, args: &[Value<'_>]) -> String {
    use std::fmt::Write;

    // Grown on demand; template length is the floor, substitutions push past it.
    let mut out = String::with_capacity(template.len() + 32);
    let mut next_arg = 0;
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('%') => out.push('%'),
            Some(spec @ ('s' | 'd' | 'i' | 'u' | 'f' | 'c' | 'x')) => {
                match args.get(next_arg) {
                    Some(value) => {
                        next_arg += 1;
                        // Writing into a String cannot fail.
                        let _ = match (spec, value) {
                            ('x', Value::Int(v)) => write!(out, "{:x}", v),
                            ('x', Value::UInt(v)) => write!(out, "{:x}", v),
                            (_, value) => write!(out, "{}", value),
                        };
                    }
                    None => {
                        // Placeholder without an argument: keep it verbatim.
                        out.push('%');
                        out.push(spec);
                    }
                }
            }
            Some(other) => {
                // Unknown specifier: copy through, consume nothing.
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }

    out
}
