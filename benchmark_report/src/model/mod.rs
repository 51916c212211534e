//!
//! The benchmark suite result data model.
//!

pub mod collection;
pub mod suite;
