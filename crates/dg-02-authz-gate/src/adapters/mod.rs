//! Adapters layer: shipped authorization capability implementations.

pub mod noop;
