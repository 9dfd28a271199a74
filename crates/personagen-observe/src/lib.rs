//! Observability setup for personagen.

pub mod tracing_setup;
