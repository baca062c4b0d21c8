//! Ports layer: trait definitions for the pluggable authorization capability.

pub mod outbound;
