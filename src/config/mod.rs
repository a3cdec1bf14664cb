mod settings;

pub use settings::{AppConfig, Settings};
