//! Infrastructure layer implementations.

pub mod memory;
pub mod observability;
pub mod seed;

pub use memory::InMemoryStore;
pub use observability::{LogFormat, init_tracing};
