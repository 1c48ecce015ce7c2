/// Pool aggregation, filtering and grouping
///
/// The pipeline stages between the fetcher and the config mapper:
/// per-token results are merged into one address-keyed set, run through
/// the predicate filters, then bucketed by token pair.
pub mod aggregator;
pub mod filtering;
pub mod grouping;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregator::PoolSet;
pub use filtering::FilterReport;
