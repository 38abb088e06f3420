//! This crate solves sliding-tile puzzles (the N-puzzle on any W x H grid) by
//! searching the space of reachable boards with breadth-first, greedy
//! best-first or A* search.
//!
pub mod action;
pub mod board;
pub mod error;
pub mod heuristic;
pub mod solver;
pub mod strategy;

pub use crate::error::SolveError;
pub use crate::solver::{SolveResult, Solver, solve};
pub use crate::strategy::Strategy;
