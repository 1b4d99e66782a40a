//! Observability helpers.

mod logging;

pub use logging::setup_logging;
