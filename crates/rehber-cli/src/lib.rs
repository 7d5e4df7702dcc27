//! Command-line launcher for the Rehber LDAP client toolkit
//!
//! A single binary fronts every tool: the first argument selects the tool,
//! the remaining arguments are handed to it unchanged.

pub mod launcher;
pub mod sink;
pub mod tools;

pub use launcher::run;
pub use sink::Sink;
