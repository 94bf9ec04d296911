use crate::error;
use crate::value::Value;

use super::capacity::ensure_capacity;
use super::duplicates::is_duplicate;

/// Whether an array accepts values that are already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    Allow,
    Reject,
}

impl From<bool> for DuplicatePolicy {
    fn from(allow_duplicates: bool) -> Self {
        if allow_duplicates {
            DuplicatePolicy::Allow
        } else {
            DuplicatePolicy::Reject
        }
    }
}

/// A resizable array of scalars and sequences.
///
/// Occupied slots are always `0..len()`; everything after that up to
/// `capacity()` is empty. With [`DuplicatePolicy::Reject`] no two occupied
/// slots hold values that [`is_duplicate`] considers equal.
#[derive(Debug, Clone)]
pub struct Array {
    slots: Vec<Option<Value>>,
    len: usize,
    policy: DuplicatePolicy,
}

impl Array {
    pub fn new(policy: impl Into<DuplicatePolicy>) -> Self {
        Array {
            slots: Vec::new(),
            len: 0,
            policy: policy.into(),
        }
    }

    /// Create an array and insert `values` into it.
    ///
    /// Without values the array is simply empty.
    pub fn create<I>(policy: impl Into<DuplicatePolicy>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut array = Array::new(policy);
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        if !values.is_empty() {
            array.insert(values);
        }
        array
    }

    /// Add values to the array.
    ///
    /// Each item becomes one slot: to add a sequence, pass it as a single
    /// item (`array.add([vec![1, 2, 3]])`). Sequences are normalized before
    /// they are stored, scalars are stored as they are.
    ///
    /// Duplicates are checked against what is stored at the moment each
    /// value is looked at, which includes values accepted earlier in the same
    /// call. A rejected duplicate is skipped silently.
    ///
    /// Adding nothing is an error and leaves the array untouched.
    pub fn add<I>(&mut self, values: I) -> error::Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        if values.is_empty() {
            return Err(error::Error::EmptyInsertion);
        }
        self.insert(values);
        Ok(())
    }

    fn insert(&mut self, values: Vec<Value>) {
        // capacity is reserved for the whole batch, even the values that end
        // up rejected
        ensure_capacity(&mut self.slots, self.len + values.len());
        for value in values {
            let value = value.normalized();
            if self.policy == DuplicatePolicy::Reject && is_duplicate(&value, self.iter()) {
                log::trace!("skipping duplicate value {}", value);
                continue;
            }
            self.slots[self.len] = Some(value);
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        if index < self.len {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// The stored values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.slots[..self.len].iter().flatten()
    }

    /// Would `value` be rejected as a duplicate of something stored?
    ///
    /// Works the same regardless of this array's policy.
    pub fn contains(&self, value: &Value) -> bool {
        is_duplicate(&value.clone().normalized(), self.iter())
    }

    pub(crate) fn slots(&self) -> &[Option<Value>] {
        &self.slots
    }
}
