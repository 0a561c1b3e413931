pub mod config;
pub mod system;
