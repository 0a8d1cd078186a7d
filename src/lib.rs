//! # fieldcheck - fixed-shape record validation
//!
//! fieldcheck validates records with five fixed fields (id, name, age,
//! password, email) and reports every failed rule as data.
//!
//! ## Core Concepts
//!
//! - **Record**: the fixed-shape entity being validated
//! - **Violation**: a (kind, message) pair describing one failed rule
//! - **Baseline**: a JSON Schema rendition of the same rules, used to
//!   cross-check and benchmark the hand-written validator
//!
//! ## Modules
//!
//! - [`record`] - The record type and record-file loading
//! - [`validator`] - Hand-written validation rules
//! - [`violation`] - Violation kinds and messages
//! - [`email`] - Email-address grammar
//! - [`schema`] - Schema-driven baseline validator
//! - [`report`] - Per-record reports and rendering
//! - [`config`] - Configuration management
//!
//! ## Example
//!
//! ```
//! use fieldcheck::{validate, Record, ViolationKind};
//!
//! let record = Record::new(1, "", 30, "123456789", "user@mail.ru");
//! let violations = validate(&record);
//!
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].kind, ViolationKind::InvalidName);
//! ```

pub mod config;
pub mod email;
pub mod record;
pub mod report;
pub mod schema;
pub mod ui;
pub mod validator;
pub mod violation;

pub use record::Record;
pub use validator::validate;
pub use violation::{Violation, ViolationKind};
