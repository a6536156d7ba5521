pub mod engine;
pub mod turn;

pub use engine::SimulationEngine;
