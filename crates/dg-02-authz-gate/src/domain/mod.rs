//! Domain layer: authorization context and error taxonomy.

pub mod context;
pub mod errors;
