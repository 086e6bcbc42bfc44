//! Read-only projections over several slices.

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;

/// A derived summary computed from the current values of other slices.
///
/// Implementations reload their dependencies on every call and never write
/// back; the summary itself is never persisted.
pub trait AggregateView {
    type Summary;

    fn compute(&self) -> Self::Summary;
}
