//! Options for the pull-based [ManualReader] backing the exporter.
use std::{fmt, sync::Arc};

use opentelemetry_sdk::metrics::{
    reader::AggregationSelector as SdkAggregationSelector, Aggregation, InstrumentKind,
    ManualReader, ManualReaderBuilder,
};

use crate::aggregation::AggregationSelector;

/// A setting forwarded to the [ManualReader] the exporter reads from.
///
/// Produced by [Config::manual_reader_options].
///
/// [Config::manual_reader_options]: crate::Config::manual_reader_options
#[derive(Clone)]
#[non_exhaustive]
pub enum ReaderOption {
    /// Installs an aggregation selector into the reader.
    AggregationSelector(Arc<dyn AggregationSelector>),
}

impl fmt::Debug for ReaderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderOption::AggregationSelector(_) => f.write_str("AggregationSelector"),
        }
    }
}

impl ReaderOption {
    /// Applies this option to a reader builder.
    pub fn apply(self, builder: ManualReaderBuilder) -> ManualReaderBuilder {
        match self {
            ReaderOption::AggregationSelector(selector) => {
                builder.with_aggregation_selector(SelectorAdapter(selector))
            }
        }
    }
}

/// Builds a [ManualReader], applying `options` in order.
pub fn build_manual_reader<I>(options: I) -> ManualReader
where
    I: IntoIterator<Item = ReaderOption>,
{
    let options: Vec<ReaderOption> = options.into_iter().collect();
    let applied = options.len();
    let reader = options
        .into_iter()
        .fold(ManualReader::builder(), |builder, option| option.apply(builder))
        .build();

    otel_debug!(name: "ManualReader.Built", options = applied);
    reader
}

// Bridges selectors that may decline to choose onto the SDK's selector, which
// always answers. Declining maps to the kind's default aggregation.
struct SelectorAdapter(Arc<dyn AggregationSelector>);

impl fmt::Debug for SelectorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectorAdapter")
    }
}

impl SdkAggregationSelector for SelectorAdapter {
    fn aggregation(&self, kind: InstrumentKind) -> Aggregation {
        self.0.aggregation(kind).unwrap_or(Aggregation::Default)
    }
}
