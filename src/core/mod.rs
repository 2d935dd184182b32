//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero game-loop
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod code;
mod colour;
mod feedback;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use colour::Colour;
pub use feedback::Feedback;
