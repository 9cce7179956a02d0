use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Caller-supplied extra values attached to a resolve call.
///
/// These never appear in the URL text; they carry out-of-band metadata (an
/// already-decoded payload, a presentation hint) to whatever handles the
/// resulting [`Location`](crate::Location). The router echoes them back
/// verbatim and never merges them into the URL arguments.
pub type Fragments = HashMap<String, FragmentValue>;

/// A single out-of-band value.
///
/// Hosts mostly pass strings and numbers; anything else rides along as an
/// opaque [`Any`] handle retrieved with [`downcast_ref`](Self::downcast_ref).
///
/// ```
/// use beckon::FragmentValue;
///
/// let value = FragmentValue::from("push");
/// assert_eq!(value.as_str(), Some("push"));
///
/// let handle = FragmentValue::opaque(vec![1u8, 2, 3]);
/// assert_eq!(handle.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
/// ```
pub enum FragmentValue {
    Str(String),
    Int(i64),
    Float(f64),
    Opaque(Box<dyn Any + Send + Sync>),
}

impl FragmentValue {
    /// Wraps an arbitrary value as an opaque handle.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Box::new(value))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrows an opaque handle as a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(any) => any.downcast_ref(),
            _ => None,
        }
    }
}

impl From<&str> for FragmentValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FragmentValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FragmentValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FragmentValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

// Any carries no Debug bound, so the impl is written out by hand.
impl fmt::Debug for FragmentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}
