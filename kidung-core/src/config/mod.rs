pub mod defaults;
pub mod engine_config;

pub use engine_config::EngineConfig;
