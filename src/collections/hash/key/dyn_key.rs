use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use derive_more::IsVariant;

use super::{InvalidKey, Key};

/// A dynamically typed key, for tables that need to mix keys of different kinds.
///
/// Every variant implements [`Hash`], but not every variant is a valid key:
/// - [`DynKey::None`] is an absent value.
/// - [`DynKey::Bool`] is a boolean.
/// - [`DynKey::List`] is a mutable sequence and is treated as unhashable, along with any
///   [`DynKey::Tuple`] that contains one.
///
/// Equality compares the kind of key before its value, so `Int(1)` and `Float(1.0)` are distinct
/// keys even though they hash identically (and so always share a bucket). Floats are compared by
/// their bit pattern, which keeps equality reflexive for NaN.
#[derive(Debug, Clone, IsVariant)]
pub enum DynKey {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<DynKey>),
    List(Vec<DynKey>),
}

impl DynKey {
    /// Creates a tuple key from the provided items.
    pub fn tuple<I: IntoIterator<Item = DynKey>>(items: I) -> DynKey {
        DynKey::Tuple(items.into_iter().collect())
    }

    /// Creates a list key from the provided items. Lists can't be hashed.
    pub fn list<I: IntoIterator<Item = DynKey>>(items: I) -> DynKey {
        DynKey::List(items.into_iter().collect())
    }

    fn check_hashable(&self) -> Result<(), InvalidKey> {
        match self {
            DynKey::List(_) => Err(InvalidKey::Unhashable),
            DynKey::Tuple(items) => items.iter().try_for_each(DynKey::check_hashable),
            _ => Ok(()),
        }
    }
}

impl Key for DynKey {
    fn validate(&self) -> Result<(), InvalidKey> {
        match self {
            DynKey::None => Err(InvalidKey::Absent),
            DynKey::Bool(_) => Err(InvalidKey::Boolean),
            other => other.check_hashable(),
        }
    }
}

macro_rules! impl_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(impl From<$t> for DynKey {
            fn from(value: $t) -> Self {
                DynKey::$variant(value)
            }
        })*
    };
}

impl_from!(bool => Bool, i64 => Int, f64 => Float, String => Str);

impl From<&str> for DynKey {
    fn from(value: &str) -> Self {
        DynKey::Str(value.to_owned())
    }
}

impl PartialEq for DynKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DynKey::None, DynKey::None) => true,
            (DynKey::Bool(a), DynKey::Bool(b)) => a == b,
            (DynKey::Int(a), DynKey::Int(b)) => a == b,
            (DynKey::Float(a), DynKey::Float(b)) => a.to_bits() == b.to_bits(),
            (DynKey::Str(a), DynKey::Str(b)) => a == b,
            (DynKey::Tuple(a), DynKey::Tuple(b)) => a == b,
            (DynKey::List(a), DynKey::List(b)) => a == b,
            // Different kinds of key are never equal, even if their values look the same.
            _ => false,
        }
    }
}

impl Eq for DynKey {}

impl Hash for DynKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            DynKey::None => 0_u8.hash(state),
            DynKey::Bool(b) => {
                1_u8.hash(state);
                b.hash(state);
            },
            // Integers and integral floats hash the same, through the float's bits.
            DynKey::Int(i) => {
                2_u8.hash(state);
                (*i as f64).to_bits().hash(state);
            },
            DynKey::Float(f) => {
                2_u8.hash(state);
                f.to_bits().hash(state);
            },
            DynKey::Str(s) => {
                3_u8.hash(state);
                s.hash(state);
            },
            DynKey::Tuple(items) => {
                4_u8.hash(state);
                items.hash(state);
            },
            DynKey::List(items) => {
                5_u8.hash(state);
                items.hash(state);
            },
        }
    }
}

impl Display for DynKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DynKey::None => write!(f, "None"),
            DynKey::Bool(b) => write!(f, "{b}"),
            DynKey::Int(i) => write!(f, "{i}"),
            DynKey::Float(v) => write!(f, "{v:?}"),
            DynKey::Str(s) => write!(f, "{s}"),
            DynKey::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{item}")?;
                }
                // A single element tuple keeps its trailing comma.
                if items.len() == 1 { write!(f, ",")?; }
                write!(f, ")")
            },
            DynKey::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
        }
    }
}
