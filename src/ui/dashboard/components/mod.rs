//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod chart;
pub mod footer;
pub mod header;
pub mod logs;
pub mod prediction;
pub mod stats;
pub mod transactions;
