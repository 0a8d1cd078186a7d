//! Command module structure for fieldcheck CLI

pub mod schema;
pub mod validate;
