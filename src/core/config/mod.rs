pub mod config;

pub use config::{NoteConfig, PersistenceConfig, UiConfig, WindowConfig, DEFAULT_CONFIG_PATHS};
