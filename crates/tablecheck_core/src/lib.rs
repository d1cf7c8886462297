//! # Table Check Core
//!
//! Core data structures for tablecheck.
//!
//! This crate provides the table model that checks run against and the types
//! used to configure checks and report their outcome.
//!
//! ## Key Concepts
//!
//! - **Table**: named columns of equal length, one [`CellValue`] per cell
//! - **TabularData**: the read-only view validators consume
//! - **CheckContext / CheckProfile**: tunable check settings
//! - **CheckReport**: diagnostic outcome of a check run
//!
//! ## Example
//!
//! ```rust
//! use tablecheck_core::{CellValue, TableBuilder, TabularData};
//!
//! let table = TableBuilder::new()
//!     .column("col1", [Some(1i64), None])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.column("col1").unwrap()[1], CellValue::Null);
//! ```

pub mod context;
pub mod error;
pub mod table;
pub mod value;

pub use context::*;
pub use error::*;
pub use table::*;
pub use value::*;
