//! # Table Check Validator
//!
//! Check engine for tabular data. This crate answers four questions about a
//! table:
//!
//! - Are all columns expected? (part of `sanity_check`)
//! - Is every column type-consistent? (`type_check`)
//! - Does it contain missing values? (`nan_check`, `true` means yes)
//! - Does it have rows at all? (`row_check`)
//!
//! `sanity_check` combines column membership, type consistency and a minimum
//! of 10 rows. `sanity_report` explains why a sanity check failed.
//!
//! ## Example
//!
//! ```rust
//! use tablecheck_core::{CheckContext, TableBuilder};
//! use tablecheck_validator::TableValidator;
//!
//! let table = TableBuilder::new()
//!     .column("id", 0i64..5)
//!     .build()
//!     .unwrap();
//!
//! let validator = TableValidator::new();
//! let report = validator.sanity_report(&table, ["id"], &CheckContext::new());
//!
//! if report.passed {
//!     println!("Table is sane");
//! } else {
//!     println!("Sanity check failed: {:?}", report.errors);
//! }
//! ```

mod engine;
mod error;
mod quality;
mod schema;

pub use engine::*;
pub use error::*;
pub use quality::*;
pub use schema::*;
