//! Observability: `tracing` with an `EnvFilter` read from `SDT_LOG`.

pub mod fields;
pub mod setup;

pub use setup::init_tracing;
