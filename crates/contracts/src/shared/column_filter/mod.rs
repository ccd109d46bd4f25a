//! Column filter contracts
//!
//! Value shapes of the built-in column filters, row matching, and the
//! grid configuration consumed by the frontend filter controls.

pub mod config;
pub mod predicate;
pub mod value;

pub use config::*;
pub use predicate::*;
pub use value::*;
