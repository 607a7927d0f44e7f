//! # Shared Types Crate
//!
//! Value types shared by the registry, the assignment engine and the runtime.
//!
//! ## Design Principles
//!
//! - **Value Identity**: participants are compared by their name, never by
//!   address or allocation. `ParticipantId` is the join key everywhere.
//! - **Opaque Contact**: the draw never looks inside a `Contact`; only the
//!   delivery adapters interpret it.
//! - **Raw Records**: `ParticipantRecord` is the unvalidated shape produced by
//!   a record source. Validation belongs to the registry.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
