use ordered_float::OrderedFloat;
use std::fmt;
use std::rc::Rc;

use super::{ElementKind, FloatType, IntegerType, UnsignedType};

/// A single numeric or text value.
///
/// The type tag records which Rust type the scalar was built from. Two
/// scalars are only equal when both the tag and the value agree, so `1i16`
/// is not equal to `1i64`, and `1i64` is not equal to `1.0f64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    Float(FloatType, OrderedFloat<f64>),
    Integer(IntegerType, i64),
    Unsigned(UnsignedType, u64),
    Text(Rc<str>),
}

impl Scalar {
    /// The coarse kind of this scalar.
    pub fn kind(&self) -> ElementKind {
        match self {
            Scalar::Float(..) => ElementKind::Float,
            Scalar::Integer(..) => ElementKind::SignedInt,
            Scalar::Unsigned(..) => ElementKind::UnsignedInt,
            Scalar::Text(_) => ElementKind::Text,
        }
    }

    /// Drop the sub-kind, keeping only one representation per
    /// [`ElementKind`].
    ///
    /// `f32` becomes `f64`, every signed width becomes `i64`, every
    /// unsigned width becomes `u64`. Text is unchanged.
    pub fn canonical(&self) -> Scalar {
        match self {
            Scalar::Float(_, f) => Scalar::Float(FloatType::canonical(), *f),
            Scalar::Integer(_, i) => Scalar::Integer(IntegerType::canonical(), *i),
            Scalar::Unsigned(_, u) => Scalar::Unsigned(UnsignedType::canonical(), *u),
            Scalar::Text(s) => Scalar::Text(s.clone()),
        }
    }

    /// Value equality as used for duplicate detection.
    ///
    /// Unlike `==`, floats compare with IEEE semantics here, so NaN never
    /// equals anything, itself included.
    pub fn exact_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Float(a_type, a), Scalar::Float(b_type, b)) => a_type == b_type && a.0 == b.0,
            (a, b) => a == b,
        }
    }

    /// Whether this scalar already has the canonical representation of its
    /// kind.
    pub(crate) fn is_canonical(&self) -> bool {
        match self {
            Scalar::Float(t, _) => *t == FloatType::F64,
            Scalar::Integer(t, _) => *t == IntegerType::I64,
            Scalar::Unsigned(t, _) => *t == UnsignedType::U64,
            Scalar::Text(_) => true,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // an f32 was widened on the way in; narrowing it back is exact
            // and gives the short representation the caller expects
            Scalar::Float(FloatType::F32, v) => write!(f, "{}", v.0 as f32),
            Scalar::Float(FloatType::F64, v) => write!(f, "{}", v.0),
            Scalar::Integer(_, i) => write!(f, "{}", i),
            Scalar::Unsigned(_, u) => write!(f, "{}", u),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

// strings

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s.into())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.into())
    }
}

impl From<&String> for Scalar {
    fn from(s: &String) -> Self {
        Scalar::Text(s.as_str().into())
    }
}

impl From<Rc<str>> for Scalar {
    fn from(s: Rc<str>) -> Self {
        Scalar::Text(s)
    }
}

// floats

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(FloatType::F64, OrderedFloat(f))
    }
}

impl From<f32> for Scalar {
    fn from(f: f32) -> Self {
        Scalar::Float(FloatType::F32, OrderedFloat(f as f64))
    }
}

// signed integers

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Integer(IntegerType::I64, i)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Integer(IntegerType::I32, i.into())
    }
}

impl From<i16> for Scalar {
    fn from(i: i16) -> Self {
        Scalar::Integer(IntegerType::I16, i.into())
    }
}

impl From<i8> for Scalar {
    fn from(i: i8) -> Self {
        Scalar::Integer(IntegerType::I8, i.into())
    }
}

// unsigned integers

impl From<u64> for Scalar {
    fn from(u: u64) -> Self {
        Scalar::Unsigned(UnsignedType::U64, u)
    }
}

impl From<u32> for Scalar {
    fn from(u: u32) -> Self {
        Scalar::Unsigned(UnsignedType::U32, u.into())
    }
}

impl From<u16> for Scalar {
    fn from(u: u16) -> Self {
        Scalar::Unsigned(UnsignedType::U16, u.into())
    }
}

impl From<u8> for Scalar {
    fn from(u: u8) -> Self {
        Scalar::Unsigned(UnsignedType::U8, u.into())
    }
}
