use plumb_deflection::utils::logging;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn log_records_respect_the_configured_level() {
    logging::init(LevelFilter::WARN).expect("first install succeeds");

    assert!(log::log_enabled!(log::Level::Warn));
    assert!(!log::log_enabled!(log::Level::Info));

    assert!(logging::init(LevelFilter::TRACE).is_err());
}
