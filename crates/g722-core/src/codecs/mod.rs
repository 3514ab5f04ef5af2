//! Codec implementations

pub mod g722;
