use opentelemetry_prometheus_config::{
    build_manual_reader, with_aggregation_selector, with_registry, Config, ConfigError,
    ExporterOption, ReaderOption,
};
use opentelemetry_sdk::metrics::{
    reader::AggregationSelector as _, Aggregation, InstrumentKind,
};
use prometheus::{IntCounter, Registry};

fn bucket_histograms(kind: InstrumentKind) -> Option<Aggregation> {
    match kind {
        InstrumentKind::Histogram => Some(Aggregation::ExplicitBucketHistogram {
            boundaries: vec![0.0, 10.0, 100.0],
            record_min_max: false,
        }),
        _ => None,
    }
}

fn gathered_names(registry: &Registry) -> Vec<String> {
    registry
        .gather()
        .iter()
        .map(|mf| mf.get_name().to_string())
        .collect()
}

#[test]
fn default_config() {
    let config = Config::new(Vec::<ExporterOption>::new());

    assert!(config.aggregation_selector().is_none());
    assert!(config.manual_reader_options().is_empty());

    let counter = IntCounter::new("scenario_default_total", "default registry probe").unwrap();
    config.register(Box::new(counter)).unwrap();
    assert!(gathered_names(prometheus::default_registry())
        .contains(&"scenario_default_total".to_string()));
}

#[test]
fn explicit_registry() {
    let registry = Registry::new();
    let config = Config::new([with_registry(registry.clone())]);

    let counter = IntCounter::new("scenario_explicit_total", "explicit registry probe").unwrap();
    config.register(Box::new(counter)).unwrap();
    assert_eq!(gathered_names(&registry), vec!["scenario_explicit_total"]);
}

#[test]
fn explicit_registry_and_selector() {
    let registry = Registry::new();
    let config = Config::new([
        with_registry(registry.clone()),
        with_aggregation_selector(bucket_histograms),
    ]);

    let options = config.manual_reader_options();
    assert_eq!(options.len(), 1);
    assert!(matches!(options[0], ReaderOption::AggregationSelector(_)));

    let counter = IntCounter::new("scenario_both_total", "explicit registry probe").unwrap();
    config.register(Box::new(counter)).unwrap();
    assert_eq!(gathered_names(&registry), vec!["scenario_both_total"]);

    let reader = config.build_reader();
    match reader.aggregation(InstrumentKind::Histogram) {
        Aggregation::ExplicitBucketHistogram { boundaries, .. } => {
            assert_eq!(boundaries, vec![0.0, 10.0, 100.0])
        }
        other => panic!("unexpected histogram aggregation {other:?}"),
    }
    assert!(matches!(
        reader.aggregation(InstrumentKind::Counter),
        Aggregation::Default
    ));
}

#[test]
fn empty_registry_falls_back_to_default() {
    let config = Config::new([with_registry(None::<Registry>)]);

    let counter = IntCounter::new("scenario_empty_total", "default registry probe").unwrap();
    config.register(Box::new(counter)).unwrap();
    assert!(gathered_names(prometheus::default_registry())
        .contains(&"scenario_empty_total".to_string()));
}

#[test]
fn registering_twice_fails() {
    let config = Config::builder().with_registry(Registry::new()).build();
    let counter = IntCounter::new("scenario_twice_total", "duplicate probe").unwrap();

    config.register(Box::new(counter.clone())).unwrap();
    let err = config.register(Box::new(counter)).unwrap_err();
    assert!(matches!(err, ConfigError::Registration(_)));
    assert!(err.to_string().starts_with("Failed to register collector"));
}

#[test]
fn reader_without_options_uses_sdk_defaults() {
    let from_config = Config::default().build_reader();
    let direct = build_manual_reader(Vec::new());

    for kind in [
        InstrumentKind::Counter,
        InstrumentKind::Histogram,
        InstrumentKind::ObservableGauge,
    ] {
        assert_eq!(from_config.aggregation(kind), direct.aggregation(kind));
    }
}
