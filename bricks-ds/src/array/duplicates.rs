use crate::value::{Scalar, Sequence, Value};

/// Is `candidate` already among `existing`?
///
/// Scalars are looked up among the existing scalars only; a scalar never
/// matches a sequence.
///
/// Sequences are resolved against a single candidate: the first existing
/// sequence with the same length is compared element by element, and its
/// answer is final. Other sequences of that length are not looked at, so
/// a sequence equal to the second same-length sequence is not reported as a
/// duplicate. Sequences of a different length are never comparable.
pub fn is_duplicate<'a, I>(candidate: &Value, existing: I) -> bool
where
    I: IntoIterator<Item = &'a Value>,
{
    match candidate {
        Value::Scalar(candidate) => scalar_duplicate(candidate, existing),
        Value::Sequence(candidate) => sequence_duplicate(candidate, existing),
    }
}

fn scalar_duplicate<'a, I>(candidate: &Scalar, existing: I) -> bool
where
    I: IntoIterator<Item = &'a Value>,
{
    existing
        .into_iter()
        .filter_map(Value::as_scalar)
        .any(|scalar| scalar.exact_eq(candidate))
}

fn sequence_duplicate<'a, I>(candidate: &Sequence, existing: I) -> bool
where
    I: IntoIterator<Item = &'a Value>,
{
    existing
        .into_iter()
        .filter_map(Value::as_sequence)
        .find(|sequence| sequence.len() == candidate.len())
        .map(|sequence| sequence.iter().zip(candidate.iter()).all(|(a, b)| a.exact_eq(b)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_never_duplicate() {
        let existing: Vec<Value> = Vec::new();
        assert!(!is_duplicate(&1i64.into(), &existing));
        assert!(!is_duplicate(&vec![1i64].into(), &existing));
    }

    #[test]
    fn test_scalar_found() {
        let existing: Vec<Value> = vec![1i64.into(), "a".into(), 3i64.into()];
        assert!(is_duplicate(&3i64.into(), &existing));
        assert!(is_duplicate(&"a".into(), &existing));
        assert!(!is_duplicate(&2i64.into(), &existing));
    }

    #[test]
    fn test_scalar_needs_same_width() {
        let existing: Vec<Value> = vec![1i64.into()];
        assert!(!is_duplicate(&1i32.into(), &existing));
    }

    #[test]
    fn test_scalar_ignores_sequences() {
        let existing: Vec<Value> = vec![vec![5i64].into()];
        assert!(!is_duplicate(&5i64.into(), &existing));
    }

    #[test]
    fn test_scalar_nan_never_duplicate() {
        let existing: Vec<Value> = vec![f64::NAN.into()];
        assert!(!is_duplicate(&f64::NAN.into(), &existing));
    }

    #[test]
    fn test_sequence_with_nan_never_duplicate() {
        let existing: Vec<Value> = vec![vec![1.0f64, f64::NAN].into()];
        assert!(!is_duplicate(&vec![1.0f64, f64::NAN].into(), &existing));
    }

    #[test]
    fn test_sequence_ignores_scalars() {
        let existing: Vec<Value> = vec![5i64.into()];
        assert!(!is_duplicate(&vec![5i64].into(), &existing));
    }

    #[test]
    fn test_sequence_equal() {
        let existing: Vec<Value> = vec![1i64.into(), vec![1i64, 2, 3].into()];
        assert!(is_duplicate(&vec![1i64, 2, 3].into(), &existing));
        assert!(!is_duplicate(&vec![1i64, 2, 4].into(), &existing));
    }

    #[test]
    fn test_sequence_other_length_not_comparable() {
        let existing: Vec<Value> = vec![vec![1i64, 2].into(), vec![1i64, 2, 3, 4].into()];
        assert!(!is_duplicate(&vec![1i64, 2, 3].into(), &existing));
    }

    #[test]
    fn test_sequence_skips_shorter_to_reach_same_length() {
        let existing: Vec<Value> = vec![vec![1i64].into(), vec![7i64, 8].into()];
        assert!(is_duplicate(&vec![7i64, 8].into(), &existing));
    }

    #[test]
    fn test_sequence_first_same_length_decides() {
        let existing: Vec<Value> = vec![vec![1i64, 2, 3].into(), vec![9i64, 8, 7].into()];
        assert!(is_duplicate(&vec![1i64, 2, 3].into(), &existing));
        // only [1 2 3] is consulted
        assert!(!is_duplicate(&vec![9i64, 8, 7].into(), &existing));
    }

    #[test]
    fn test_sequence_kinds_differ() {
        let existing: Vec<Value> = vec![vec![1i64, 2].into()];
        assert!(!is_duplicate(&vec![1.0f64, 2.0].into(), &existing));
    }
}
