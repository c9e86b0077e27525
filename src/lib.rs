pub mod config;
pub mod error;
pub mod optimizer;
pub mod scorer;
// cmd and reports belong to the binary crate (main.rs).
