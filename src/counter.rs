//! The click counter

/// Monotonic click count, starting at zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add exactly one to the count.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn get_count(&self) -> u64 {
        self.value
    }

    #[cfg(test)]
    pub(crate) fn starting_at(value: u64) -> Self {
        Self { value }
    }
}
