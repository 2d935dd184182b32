//! Deductive solving
//!
//! Candidate-set filtering plus pluggable guess selection policies.

mod engine;
pub mod strategy;

pub use engine::{Solver, SolverError};
pub use strategy::{FirstCandidateStrategy, RandomStrategy, Strategy, StrategyType};
