use std::fmt;
use std::rc::Rc;

use crate::error;

use super::{ElementKind, Scalar};

/// A Rust type that can be turned into the elements of a [`Sequence`].
///
/// The kind is known from the type alone, so even an empty `Vec<u16>`
/// becomes a sequence of unsigned integers.
pub trait SequenceElement: Into<Scalar> {
    const KIND: ElementKind;
}

macro_rules! sequence_element {
    ($kind:expr => $($t:ty),*) => {
        $(
            impl SequenceElement for $t {
                const KIND: ElementKind = $kind;
            }
        )*
    };
}

sequence_element!(ElementKind::Float => f32, f64);
sequence_element!(ElementKind::SignedInt => i8, i16, i32, i64);
sequence_element!(ElementKind::UnsignedInt => u8, u16, u32, u64);
sequence_element!(ElementKind::Text => String, &str, &String, Rc<str>);

/// An ordered, fixed-length list of scalars of a single kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    kind: ElementKind,
    items: Rc<[Scalar]>,
}

impl Sequence {
    /// Build a sequence of the given kind, checking every item against it.
    pub fn new(kind: ElementKind, items: Vec<Scalar>) -> error::Result<Self> {
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| item.kind() != kind)
        {
            return Err(error::Error::MixedSequence {
                expected: kind,
                found: item.kind(),
                index,
            });
        }
        Ok(Sequence {
            kind,
            items: items.into(),
        })
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Scalar> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.items.iter()
    }

    /// Reduce every element to the canonical representation of its kind.
    ///
    /// Already canonical sequences are returned as they are, without
    /// copying their items.
    pub fn normalized(self) -> Self {
        if self.items.iter().all(Scalar::is_canonical) {
            return self;
        }
        Sequence {
            kind: self.kind,
            items: self.items.iter().map(Scalar::canonical).collect(),
        }
    }
}

impl<T: SequenceElement> From<Vec<T>> for Sequence {
    fn from(items: Vec<T>) -> Self {
        Sequence {
            kind: T::KIND,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: SequenceElement + Clone> From<&[T]> for Sequence {
    fn from(items: &[T]) -> Self {
        Sequence {
            kind: T::KIND,
            items: items.iter().cloned().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
