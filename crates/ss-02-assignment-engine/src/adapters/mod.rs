//! Adapters module for the Assignment Engine
//!
//! Implementations of the `RandomSource` outbound port.

pub mod random;

pub use random::{EntropyRandomSource, ScriptedRandomSource, SeededRandomSource};
