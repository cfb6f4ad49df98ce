//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod error;
pub mod health;
pub mod logic;
pub mod pagination;
pub mod store;
