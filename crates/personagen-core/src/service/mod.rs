//! Use cases.
//!
//! Services depend on traits (ports) and never on concrete infrastructure.

pub mod fs;
pub mod persona;
