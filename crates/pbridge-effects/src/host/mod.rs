//! Host runtime implementations that live in the engine's process

pub mod memory;

pub use memory::{MemoryHost, ViewState, DEFAULT_KEY_STRENGTHS};
