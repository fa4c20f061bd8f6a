//! # Roster Core
//!
//! Core library for Roster - a console-driven employee record manager.
//!
//! This crate provides the record engine - data model, validation, CRUD,
//! queries, and flat-file persistence - independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **record**: Employee data model and display-identifier derivation
//! - **validate**: Parsing user-supplied fields into typed values
//! - **store**: The live record collection and its CRUD operations
//! - **query**: Search, sort, and aggregate reporting
//! - **storage**: Persistence backends (delimited flat file, in-memory)
//!
//! `validate` and `storage` are leaves; `store` depends on both; `query`
//! operates on record slices handed out by the store.

pub mod error;
pub mod fs;
pub mod query;
pub mod record;
pub mod storage;
pub mod store;
pub mod validate;

pub use error::{Result, RosterError};
pub use record::{Employee, EmployeeUpdate, NewEmployee};
pub use store::{EmployeeStore, ListQuery};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
