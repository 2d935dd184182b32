//! Mastermind Solver
//!
//! A Mastermind feedback scorer and deductive codebreaker: the solver keeps
//! the set of codes consistent with every observed feedback and narrows it
//! each turn until the secret is pinned down.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback};
//!
//! // Create codes
//! let secret = Code::parse("red red green blue").unwrap();
//! let guess = Code::parse("red green red blue").unwrap();
//!
//! // Score the guess
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!(feedback.perfect(), 2);
//! assert_eq!(feedback.exists(), 2);
//! ```

// Core domain types
pub mod core;

// Deductive solving
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
