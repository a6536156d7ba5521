//! Ecosim - Turn-based ecosystem simulation engine

pub mod core;
pub mod ecosystem;
pub mod simulation;
