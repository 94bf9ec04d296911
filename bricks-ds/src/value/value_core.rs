use std::fmt;
use std::rc::Rc;

use super::sequence::SequenceElement;
use super::{Scalar, Sequence};

/// Anything that can be stored in an [`Array`](crate::Array).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Sequence),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Scalar(_) => None,
            Value::Sequence(s) => Some(s),
        }
    }

    /// Normalize sequences; scalars are returned unchanged.
    pub(crate) fn normalized(self) -> Self {
        match self {
            Value::Scalar(s) => Value::Scalar(s),
            Value::Sequence(s) => Value::Sequence(s.normalized()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => fmt::Display::fmt(s, f),
            Value::Sequence(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Value::Sequence(s)
    }
}

impl<T: SequenceElement> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into())
    }
}

macro_rules! value_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Scalar(v.into())
                }
            }
        )*
    };
}

value_from_scalar!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
value_from_scalar!(String, &str, &String, Rc<str>);
