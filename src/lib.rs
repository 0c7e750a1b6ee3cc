//! HST: Hose Selection Toolkit
//!
//! A small query utility for industrial hose catalogs: load a delimited
//! catalog file, filter it against operating constraints, and recommend
//! the best-fitting hose.

pub mod cli;
pub mod core;
