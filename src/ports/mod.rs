// src/ports/mod.rs
pub mod list;

pub use list::ListPresenter;
