mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{LoggingSettings, SarvamSettings, ServerSettings, Settings};
