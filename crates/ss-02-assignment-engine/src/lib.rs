//! # SS-02: Assignment Engine
//!
//! Finds a gift-giving assignment by rejection sampling with full restarts.
//!
//! ## Architecture
//!
//! - **Domain**: `Assignment` (the finished draw) and `AssignmentError`
//! - **Algorithms**: per-giver draw loop, single attempt pass
//! - **Ports**: Inbound (`AssignmentApi`) and Outbound (`RandomSource`)
//! - **Adapters**: seeded, entropy-backed and scripted random sources
//! - **Application**: `AssignmentService`, the bounded restart state machine
//!
//! ## State Machine
//!
//! ```text
//! Start ──fresh attempt──→ Matching ──all matched──→ Success
//!   ↑                         │
//!   │                      giver stuck
//!   │                         ↓
//!   └──attempts < max──── Restart ──attempts = max──→ Infeasible
//! ```
//!
//! The engine never proves infeasibility. It reports how many attempts it made
//! and leaves the interpretation to the caller.

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{EntropyRandomSource, ScriptedRandomSource, SeededRandomSource};
pub use application::service::AssignmentService;
pub use config::{DrawMode, EngineConfig};
pub use domain::entities::{Assignment, Pairing};
pub use domain::errors::AssignmentError;
pub use ports::inbound::AssignmentApi;
pub use ports::outbound::RandomSource;
