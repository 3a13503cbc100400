// src/infrastructure/mod.rs
pub mod config;
pub mod export_writer;
pub mod file_store;
pub mod memory;

pub use config::Config;
pub use file_store::JsonFileStore;
pub use memory::InMemoryStore;
