/// Result of a capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    /// Capacity after the check.
    pub capacity: usize,
    /// Whether storage has to be reallocated.
    pub relocated: bool,
}

/// Decide the capacity needed to hold `required` slots.
///
/// When `required` doesn't fit, the new capacity is twice `required`, not
/// twice the current capacity.
pub fn grow(current: usize, required: usize) -> Growth {
    if required <= current {
        Growth {
            capacity: current,
            relocated: false,
        }
    } else {
        Growth {
            capacity: 2 * required,
            relocated: true,
        }
    }
}

/// Make sure `slots` has room for `required` entries.
///
/// On relocation a fresh store is allocated and the existing slots are moved
/// over in order; the new tail is filled with empty slots.
pub(crate) fn ensure_capacity<T>(slots: &mut Vec<Option<T>>, required: usize) -> Growth {
    let previous = slots.len();
    let growth = grow(previous, required);
    if growth.relocated {
        let mut relocated = Vec::with_capacity(growth.capacity);
        relocated.append(slots);
        relocated.resize_with(growth.capacity, || None);
        log::debug!(
            "array storage relocated: capacity {} -> {}",
            previous,
            growth.capacity
        );
        *slots = relocated;
    }
    growth
}
