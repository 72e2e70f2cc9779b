pub mod cli;
pub mod core;
pub mod domain;
pub mod infra;
