//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Reducers are plain functions over the slices so they test without a DOM.
//! - The market slice owns the only pagination state; replacing the offers
//!   re-clamps the current page.

use crate::core::config::DashboardConfig;
use crate::core::error::Result;
use crate::core::health::{HealthBand, Rgb, color_for};
use crate::core::logic::health_label;
use crate::core::pagination::{PageAction, PaginationState};
use lendscope_api_models::{LoanOffer, PortfolioSnapshot};
use std::rc::Rc;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Asset overview and health score.
    pub portfolio: PortfolioState,
    /// Lending market rows and their pagination.
    pub market: MarketState,
}

/// Portfolio slice.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PortfolioState {
    /// Latest snapshot from the aggregation collaborator.
    pub snapshot: PortfolioSnapshot,
}

/// Lending market slice.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MarketState {
    /// Full offer collection in display order.
    pub offers: Rc<Vec<LoanOffer>>,
    /// Current page request and page size.
    pub pagination: PaginationState,
}

/// Owned view of the current market page for component props.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketPage {
    /// Offers on the effective page.
    pub rows: Vec<LoanOffer>,
    /// Effective one-based page.
    pub current_page: usize,
    /// Page count, at least 1.
    pub total_pages: usize,
    /// One-based first/last visible row.
    pub range: Option<(usize, usize)>,
    /// Size of the full collection.
    pub total_items: usize,
}

/// Gauge rendering inputs derived from the health score.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeView {
    /// Score caption.
    pub label: String,
    /// Band of the raw score.
    pub band: HealthBand,
    /// Mapped colour, possibly outside the byte range.
    pub raw_color: Rgb,
    /// Colour clamped for styling.
    pub color: Rgb,
}

/// Replace the portfolio snapshot.
pub fn set_portfolio(state: &mut PortfolioState, snapshot: PortfolioSnapshot) {
    state.snapshot = snapshot;
}

/// Apply a dashboard configuration to the market slice.
///
/// # Errors
/// Returns [`crate::core::error::DashboardError::InvalidConfiguration`] when the
/// configured page size is zero; the slice is left untouched.
pub fn configure_market(state: &mut MarketState, config: &DashboardConfig) -> Result<()> {
    state.pagination = PaginationState::from_config(config)?;
    let count = state.offers.len();
    let current = state.pagination.current_page(count);
    state.pagination.set_page(current, count);
    Ok(())
}

/// Replace the offer collection and re-clamp the current page.
pub fn set_offers(state: &mut MarketState, offers: Vec<LoanOffer>) {
    let count = offers.len();
    state.offers = Rc::new(offers);
    let current = state.pagination.current_page(count);
    state.pagination.set_page(current, count);
}

/// Apply a navigation action and return the effective page.
pub fn apply_page_action(state: &mut MarketState, action: PageAction) -> usize {
    let count = state.offers.len();
    state.pagination = state.pagination.reduce(action, count);
    state.pagination.current_page(count)
}

/// Select the current market page.
#[must_use]
pub fn select_market_page(state: &MarketState) -> MarketPage {
    let page = state.pagination.view(state.offers.as_slice());
    MarketPage {
        rows: page.visible.to_vec(),
        current_page: page.current_page,
        total_pages: page.total_pages,
        range: page.item_range(),
        total_items: page.total_items,
    }
}

/// Select the gauge inputs for the current health score.
#[must_use]
pub fn select_gauge(state: &PortfolioState) -> GaugeView {
    let health = state.snapshot.health;
    let raw_color = color_for(health);
    GaugeView {
        label: health_label(health),
        band: HealthBand::for_score(health),
        raw_color,
        color: raw_color.clamped(),
    }
}
