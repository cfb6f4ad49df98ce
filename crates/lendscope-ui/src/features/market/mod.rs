//! Lending market feature slice.

pub(crate) mod view;

pub(crate) use view::MarketPanel;
