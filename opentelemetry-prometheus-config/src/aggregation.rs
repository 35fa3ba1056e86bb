//! Per-instrument aggregation selection.
use opentelemetry_sdk::metrics::{Aggregation, InstrumentKind};

/// Chooses the [Aggregation] a reader applies to an instrument based on its
/// kind.
///
/// Returning `None` leaves the choice to the reader, which falls back to the
/// default aggregation for that instrument kind.
///
/// Any `Fn(InstrumentKind) -> Option<Aggregation>` closure is a selector:
///
/// ```
/// use opentelemetry_prometheus_config::AggregationSelector;
/// use opentelemetry_sdk::metrics::{Aggregation, InstrumentKind};
///
/// let drop_histograms = |kind: InstrumentKind| match kind {
///     InstrumentKind::Histogram => Some(Aggregation::Drop),
///     _ => None,
/// };
///
/// assert!(matches!(
///     drop_histograms.aggregation(InstrumentKind::Histogram),
///     Some(Aggregation::Drop)
/// ));
/// assert!(drop_histograms.aggregation(InstrumentKind::Counter).is_none());
/// ```
pub trait AggregationSelector: Send + Sync {
    /// Selects the aggregation for instruments of the given kind.
    fn aggregation(&self, kind: InstrumentKind) -> Option<Aggregation>;
}

impl<T> AggregationSelector for T
where
    T: Fn(InstrumentKind) -> Option<Aggregation> + Send + Sync,
{
    fn aggregation(&self, kind: InstrumentKind) -> Option<Aggregation> {
        self(kind)
    }
}
