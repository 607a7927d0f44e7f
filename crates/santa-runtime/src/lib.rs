//! # Secret Santa Runtime
//!
//! Wires the registry and the assignment engine to the outside world.
//!
//! ## Modular Structure
//!
//! - `config` - Runtime configuration with environment overrides
//! - `domain/` - Message template, assignment cards and outgoing messages
//! - `ports/` - Record source, artifact writer and deliverer traits plus their errors
//! - `adapters/` - JSON file source, filesystem writer, maildrop, SMTP and dry-run delivery
//! - `pipeline` - `SantaRuntime`, the end-to-end run
//! - `exit_codes` - Process exit code registry
//!
//! ## Run Sequence
//!
//! ```text
//! template ──→ records ──→ registry ──→ pre-flight ──→ draw
//!                                                       │
//!                              ┌────────────────────────┘
//!                              ↓
//!                          artifacts ──→ delivery (optional) ──→ RunSummary
//! ```
//!
//! Nothing is written and nothing is sent unless the draw succeeds.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod exit_codes;
pub mod pipeline;
pub mod ports;

pub use config::{
    DeliveryConfig, DrawSettings, OutputConfig, RuntimeConfig, SmtpConfig, Transport,
};
pub use pipeline::{RunError, RunInputs, RunSummary, SantaRuntime};
