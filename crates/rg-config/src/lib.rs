pub mod generator;
pub mod logging;
pub mod reviewgen;
pub mod validate;

pub use generator::GeneratorConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use reviewgen::ReviewGenConfig;
