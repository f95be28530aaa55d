//! Natural disaster rescue assistant.
//!
//! Resolves the user's location from a typed address or a browser position,
//! asks a language model for a rescue plan and maps nearby hospitals, police
//! stations and shelters.

pub mod cli;
pub mod config;
pub mod llm;
pub mod map;
pub mod models;
pub mod providers;
pub mod server;
pub mod shell;
