pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{EcoError, Result};
pub use types::{AnimalId, Species, Turn};
