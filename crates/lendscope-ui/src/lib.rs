#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Lendscope Web UI.
//! The DOM-free core (pagination, health colour, config, store) builds and tests
//! natively; the Yew views compile for wasm32 only.

pub mod core;
pub mod models;

pub use crate::core::error::{DashboardError, Result};
pub use crate::core::health::{HealthBand, Rgb, color_for};
pub use crate::core::pagination::{PageAction, PageSlice, PaginationState, paginate};

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
