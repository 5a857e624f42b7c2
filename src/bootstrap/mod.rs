pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, AppConfig};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, AppDeps, UseCases, WiringError, WiringResult};
