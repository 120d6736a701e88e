//! Groundwork - a one-shot post-generation provisioner for scaffolded projects.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── provision     # Provision a freshly generated project
//! │   ├── check         # Validate a generation context, no side effects
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── context       # Generation context loading and validation
//!     ├── frontend      # Frontend variant table
//!     ├── secrets       # Secret material generation
//!     ├── record        # Ordered KEY=VALUE environment records
//!     └── provision     # plan/apply provisioning pipeline
//! ```
//!
//! # Features
//!
//! - Fresh secret material on every run (OS RNG, never reused)
//! - Ordered, dotenv-style `.env` and `.env.frontend` output
//! - Removal of the non-selected frontend variant skeleton
//! - Injectable randomness for exact-output testing

pub mod cli;
pub mod core;
pub mod error;
