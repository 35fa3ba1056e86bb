use core::fmt;
use opentelemetry_sdk::metrics::ManualReader;
use prometheus::{core::Collector, Registry};
use std::sync::Arc;

use crate::{
    aggregation::AggregationSelector,
    error::ConfigError,
    reader::{build_manual_reader, ReaderOption},
};

/// A single change to an exporter [Config].
///
/// Options are applied in the order they are given. A later option overrides
/// an earlier one for the same setting, except that an empty registry option
/// never overrides anything.
///
/// See [with_registry] and [with_aggregation_selector].
#[derive(Clone)]
#[non_exhaustive]
pub enum ExporterOption {
    /// Publishes metrics into the given registry, if any.
    Registry(Option<Registry>),
    /// Selects aggregations for the exporter's reader.
    AggregationSelector(Arc<dyn AggregationSelector>),
}

impl fmt::Debug for ExporterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExporterOption::Registry(registry) => {
                f.debug_tuple("Registry").field(registry).finish()
            }
            ExporterOption::AggregationSelector(_) => f.write_str("AggregationSelector"),
        }
    }
}

/// Configures which [prometheus::Registry] the exporter will use.
///
/// Passing `None` produces an option that leaves the registry untouched, so the
/// prometheus default registry (or the one set by an earlier option) is used.
///
/// ```
/// use opentelemetry_prometheus_config::{with_registry, Config};
///
/// let registry = prometheus::Registry::new();
/// let config = Config::new([with_registry(registry), with_registry(None::<prometheus::Registry>)]);
/// # drop(config)
/// ```
pub fn with_registry(registry: impl Into<Option<Registry>>) -> ExporterOption {
    ExporterOption::Registry(registry.into())
}

/// Configures the [AggregationSelector] installed into the exporter's reader.
///
/// If no selector is configured, the reader uses its default aggregation for
/// every instrument kind.
pub fn with_aggregation_selector(selector: impl AggregationSelector + 'static) -> ExporterOption {
    ExporterOption::AggregationSelector(Arc::new(selector))
}

/// Resolved exporter configuration.
///
/// A `Config` always holds a registry. Its settings cannot change after
/// construction; cloning is cheap as both the registry and the selector are
/// shared handles.
#[derive(Clone)]
pub struct Config {
    registry: Registry,
    aggregation: Option<Arc<dyn AggregationSelector>>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("registry", &self.registry)
            .field("aggregation_selector", &self.aggregation.is_some())
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Vec::new())
    }
}

#[derive(Default)]
struct PendingConfig {
    registry: Option<Registry>,
    aggregation: Option<Arc<dyn AggregationSelector>>,
}

impl PendingConfig {
    fn apply(mut self, option: ExporterOption) -> Self {
        match option {
            ExporterOption::Registry(Some(registry)) => self.registry = Some(registry),
            ExporterOption::Registry(None) => {
                otel_debug!(name: "ExporterConfig.EmptyRegistryIgnored");
            }
            ExporterOption::AggregationSelector(selector) => self.aggregation = Some(selector),
        }
        self
    }
}

impl Config {
    /// Creates a configuration from `options`, falling back to the prometheus
    /// default registry when none of them sets one.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ExporterOption>,
    {
        Config::with_fallback_registry(prometheus::default_registry().clone(), options)
    }

    /// Creates a configuration from `options`, falling back to `fallback` when
    /// none of them sets a registry.
    pub fn with_fallback_registry<I>(fallback: Registry, options: I) -> Self
    where
        I: IntoIterator<Item = ExporterOption>,
    {
        let pending = options
            .into_iter()
            .fold(PendingConfig::default(), PendingConfig::apply);

        otel_debug!(
            name: "ExporterConfig.Resolved",
            fallback_registry = pending.registry.is_none(),
            aggregation_selector = pending.aggregation.is_some(),
        );

        Config {
            registry: pending.registry.unwrap_or(fallback),
            aggregation: pending.aggregation,
        }
    }

    /// Creates a builder to configure an exporter step by step.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The registry metrics are published into.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The configured aggregation selector, if any.
    pub fn aggregation_selector(&self) -> Option<&Arc<dyn AggregationSelector>> {
        self.aggregation.as_ref()
    }

    /// Options for the [ManualReader] backing the exporter.
    ///
    /// Empty unless an aggregation selector was configured.
    pub fn manual_reader_options(&self) -> Vec<ReaderOption> {
        let mut opts = Vec::new();
        if let Some(selector) = &self.aggregation {
            opts.push(ReaderOption::AggregationSelector(Arc::clone(selector)));
        }
        opts
    }

    /// Builds the [ManualReader] described by [Config::manual_reader_options].
    pub fn build_reader(&self) -> ManualReader {
        build_manual_reader(self.manual_reader_options())
    }

    /// Publishes `collector` into the configured registry.
    pub fn register(&self, collector: Box<dyn Collector>) -> Result<(), ConfigError> {
        self.registry.register(collector).map_err(|err| {
            otel_warn!(
                name: "ExporterConfig.RegistrationFailed",
                error = err.to_string(),
            );
            ConfigError::from(err)
        })
    }
}

/// Fluent construction of a [Config].
///
/// Settings are recorded as [ExporterOption]s in call order and resolved by
/// [Config::new] on [ConfigBuilder::build].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    options: Vec<ExporterOption>,
}

impl ConfigBuilder {
    /// Configures which [prometheus::Registry] the exporter will use.
    ///
    /// If no registry is specified, the prometheus default is used.
    pub fn with_registry(self, registry: impl Into<Option<Registry>>) -> Self {
        self.with_option(with_registry(registry))
    }

    /// Configures the [AggregationSelector] installed into the exporter's reader.
    pub fn with_aggregation_selector(self, selector: impl AggregationSelector + 'static) -> Self {
        self.with_option(with_aggregation_selector(selector))
    }

    /// Appends an already constructed option.
    pub fn with_option(mut self, option: ExporterOption) -> Self {
        self.options.push(option);
        self
    }

    /// Resolves the recorded options into a [Config].
    pub fn build(self) -> Config {
        Config::new(self.options)
    }
}
