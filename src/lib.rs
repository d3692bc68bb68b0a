pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod uberon;
pub mod utils;
pub mod vista;
