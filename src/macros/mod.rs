//! Declarative macros for catch-this.

// The try_catch! macro is defined here with #[macro_export], which exports it at crate root
#[macro_use]
mod try_catch;
