//! Configuration for exporting OpenTelemetry metrics through a [Prometheus]
//! registry.
//!
//! A [Config] is resolved from an ordered list of [ExporterOption]s. It always
//! names the registry metrics are published into (the prometheus default
//! registry unless one is configured) and optionally an
//! [AggregationSelector], which is forwarded to the SDK's [ManualReader]
//! through [Config::manual_reader_options].
//!
//! [Prometheus]: https://prometheus.io
//! [ManualReader]: opentelemetry_sdk::metrics::ManualReader
//!
//! ```
//! use opentelemetry_prometheus_config::{with_aggregation_selector, with_registry, Config};
//! use opentelemetry_sdk::metrics::{Aggregation, InstrumentKind};
//!
//! // create a new prometheus registry
//! let registry = prometheus::Registry::new();
//!
//! // publish into that registry and drop histogram data
//! let config = Config::new([
//!     with_registry(registry.clone()),
//!     with_aggregation_selector(|kind: InstrumentKind| match kind {
//!         InstrumentKind::Histogram => Some(Aggregation::Drop),
//!         _ => None,
//!     }),
//! ]);
//!
//! assert_eq!(config.manual_reader_options().len(), 1);
//!
//! // the reader to hand to the meter provider
//! let reader = config.build_reader();
//! # drop(reader)
//! ```
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(
    docsrs,
    feature(doc_cfg, doc_auto_cfg),
    deny(rustdoc::broken_intra_doc_links)
)]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/open-telemetry/opentelemetry-rust/main/assets/logo.svg"
)]
#![cfg_attr(test, deny(warnings))]

#[macro_use]
mod internal_logging;

mod aggregation;
mod config;
mod error;
mod reader;

pub use aggregation::AggregationSelector;
pub use config::{with_aggregation_selector, with_registry, Config, ConfigBuilder, ExporterOption};
pub use error::ConfigError;
pub use reader::{build_manual_reader, ReaderOption};
