//! # dispatch_report
//!
//! A Rust library for reading warehouse dock dispatch files (packed binary
//! records) and producing per-dock summary reports.
//!
//! This library provides support for:
//! - **Binary format**: fixed-layout 37-byte dispatch records (little-endian)
//! - **Aggregation**: per-dock event counts and per-product quantity totals
//! - **Text report**: human-readable breakdown plus minimum-activity analysis
//! - **JSON report**: the same sections as machine-readable JSON
//!
//! ## Quick Start
//!
//! ```no_run
//! use dispatch_report::binary::read_records;
//! use dispatch_report::aggregate::summarize;
//! use dispatch_report::report::write_report;
//! use std::fs;
//!
//! // Read a dispatch file
//! let data = fs::read("Datos.bin")?;
//! let records = read_records(&data)?;
//!
//! // Aggregate once, consume everywhere
//! let summary = summarize(&records);
//!
//! // Render the text report
//! let report = write_report(&records, &summary)?;
//! fs::write("salida.txt", report)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Queries
//!
//! ```
//! use dispatch_report::record::DispatchRecord;
//! use dispatch_report::aggregate::summarize;
//!
//! let records = vec![
//!     DispatchRecord::new(1, "X", "Prov1", 10),
//!     DispatchRecord::new(1, "Y", "Prov2", 5),
//!     DispatchRecord::new(2, "X", "Prov3", 3),
//! ];
//! let summary = summarize(&records);
//!
//! // Dock 2 has the fewest dispatch events; "X" is its top product.
//! assert_eq!(summary.least_active_dock(), Some(2));
//! assert_eq!(summary.top_product(2), Some("X"));
//! ```

pub mod aggregate;
pub mod binary;
pub mod json;
pub mod record;
pub mod report;

pub use record::DispatchRecord;
