//! Portfolio feature slice.
//!
//! # Design
//! - Read the snapshot from the `AppStore` only.
//! - Colour and caption come from `select_gauge`; the view only lays them out.

pub(crate) mod view;

pub(crate) use view::PortfolioSection;
