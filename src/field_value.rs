use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

/// A value that can be written as the body of a text part.
///
/// Values are rendered using their `Display` form.
/// So `42` is written as `42`, `false` as `false`,
/// and both a `f32` and a `f64` of `0.42` are written as `0.42`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Float32(f32),
    Float64(f64),
}

impl FieldValue {
    /// Returns true when this holds the zero value for its type.
    ///
    /// That is an empty string, `0`, `false`, or `0.0`.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Int(i) => *i == 0,
            Self::Bool(b) => !*b,
            Self::Float32(f) => *f == 0.0,
            Self::Float64(f) => *f == 0.0,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float32(n) => write!(f, "{n}"),
            Self::Float64(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        Self::Float32(f)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Self::Float64(f)
    }
}

macro_rules! impl_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for FieldValue {
                fn from(i: $int) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);


#[cfg(test)]
mod test_is_default {
    use super::*;

    #[test]
    fn it_should_be_default_for_zero_values() {
        assert!(FieldValue::from("").is_default());
        assert!(FieldValue::from(0).is_default());
        assert!(FieldValue::from(false).is_default());
        assert!(FieldValue::from(0.0_f32).is_default());
        assert!(FieldValue::from(0.0_f64).is_default());
    }

    #[test]
    fn it_should_not_be_default_for_other_values() {
        assert!(!FieldValue::from("a").is_default());
        assert!(!FieldValue::from(1).is_default());
        assert!(!FieldValue::from(true).is_default());
        assert!(!FieldValue::from(0.1_f32).is_default());
        assert!(!FieldValue::from(-0.1_f64).is_default());
    }
}
