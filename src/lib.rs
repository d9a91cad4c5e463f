//! videodb - interactive aggregation quickstart for the VideoDB sample data
//!
//! Connects to MongoDB, offers a fixed menu of analytical questions, runs
//! the matching aggregation pipeline and prints the results.

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod observability;
pub mod session;
pub mod style;
