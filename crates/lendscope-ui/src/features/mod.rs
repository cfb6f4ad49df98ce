//! Dashboard feature slices.

pub(crate) mod market;
pub(crate) mod portfolio;
