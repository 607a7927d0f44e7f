//! # Secret Santa Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Participant lists and templates on disk
//! └── integration/      # Cross-crate flows
//!     ├── scenarios.rs  # Reference rosters through registry + engine
//!     └── pipeline.rs   # Full runs through SantaRuntime
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p santa-tests
//! cargo test -p santa-tests integration::pipeline::
//!
//! # Benchmarks
//! cargo bench -p santa-tests
//! ```

pub mod fixtures;
pub mod integration;
