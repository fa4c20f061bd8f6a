//! Persistence backends for the employee store.
//!
//! The `RecordStorage` trait is the seam between the store and the disk:
//! the store rewrites the full record list through it after every
//! mutation. `CsvFile` is the flat-file backend used by the CLI; `Memory`
//! backs tests and ephemeral runs.

mod csv_file;
mod memory;
mod traits;

// Re-export public API
pub use csv_file::CsvFile;
pub use memory::Memory;
pub use traits::RecordStorage;
