use strum_macros::{Display, EnumIter};

/// The coarse kind of a scalar.
///
/// Every sequence carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ElementKind {
    #[strum(serialize = "float")]
    Float,
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "signed integer")]
    SignedInt,
    #[strum(serialize = "unsigned integer")]
    UnsignedInt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatType {
    F32,
    F64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerType {
    I8,
    I16,
    I32,
    I64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsignedType {
    U8,
    U16,
    U32,
    U64,
}

impl FloatType {
    pub(crate) fn canonical() -> Self {
        FloatType::F64
    }
}

impl IntegerType {
    pub(crate) fn canonical() -> Self {
        IntegerType::I64
    }
}

impl UnsignedType {
    pub(crate) fn canonical() -> Self {
        UnsignedType::U64
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_element_kind_display() {
        let names = ElementKind::iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["float", "text", "signed integer", "unsigned integer"]
        );
    }
}
