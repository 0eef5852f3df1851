//! RelocateCLI - Terminal-based relocation planning dashboard
//!
//! This library provides the core functionality for RelocateCLI, a planning
//! tool for international moves. It tracks the costs of the move (with
//! payments in multiple currencies), the paperwork, the to-do list, the
//! family roster, and the baggage checklist, all from the command line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (cost items, payments, rates, tasks, ...)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Aggregate views over the stored data
//! - `display`: Terminal output formatting
//! - `export`: CSV/JSON/YAML exporters
//! - `audit`: Audit logging system
//! - `backup`: Rolling backup management
//! - `cli`: clap subcommand definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use relocate::config::{paths::RelocatePaths, settings::Settings};
//!
//! let paths = RelocatePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{RelocateError, RelocateResult};
