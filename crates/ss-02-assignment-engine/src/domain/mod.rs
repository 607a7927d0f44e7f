//! Domain module for the Assignment Engine
//!
//! Contains the finished draw and the error taxonomy.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
