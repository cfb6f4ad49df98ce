//! Pure UI helpers extracted from components for non-wasm testing.

use lendscope_api_models::{LoanOffer, OverviewEntry, OverviewField, UserAssetOverview};

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;

/// Column headers of the lending market table, in cell order.
pub const MARKET_HEADERS: [&str; 6] = [
    "Lender",
    "Amount",
    "Collateral",
    "Interest",
    "Duration",
    "Status",
];

/// Title shown on an overview card.
#[must_use]
pub const fn overview_label(field: OverviewField) -> &'static str {
    match field {
        OverviewField::AvailableBalance => "Available Balance",
        OverviewField::TotalLent => "Total Lent",
        OverviewField::TotalBorrowed => "Total Borrowed",
        OverviewField::InterestEarned => "Interest Earned",
    }
}

const fn overview_info(field: OverviewField) -> Option<&'static str> {
    match field {
        OverviewField::AvailableBalance => Some("Deposited funds not committed to a loan"),
        OverviewField::InterestEarned => Some("Interest accrued on lent positions"),
        OverviewField::TotalLent | OverviewField::TotalBorrowed => None,
    }
}

/// Build the four overview cards in display order.
#[must_use]
pub fn overview_entries(overview: &UserAssetOverview) -> Vec<OverviewEntry> {
    OverviewField::ALL
        .iter()
        .map(|&field| OverviewEntry {
            id: field,
            label: overview_label(field).to_string(),
            value: field.amount(overview).to_string(),
            info: overview_info(field).map(str::to_string),
        })
        .collect()
}

/// Render a duration in whole days, falling back to hours below a day.
#[must_use]
pub fn format_duration(secs: u64) -> String {
    if secs >= SECS_PER_DAY {
        format!("{}d", secs / SECS_PER_DAY)
    } else {
        format!("{}h", secs / SECS_PER_HOUR)
    }
}

/// Render an interest rate with at most two decimals.
#[must_use]
pub fn format_rate(percent: f64) -> String {
    let text = format!("{percent:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

/// Table cells for a loan offer, aligned with [`MARKET_HEADERS`].
#[must_use]
pub fn loan_offer_cells(offer: &LoanOffer) -> Vec<String> {
    vec![
        offer.lender.clone(),
        offer.amount.to_string(),
        offer.collateral.to_string(),
        format_rate(offer.interest_rate),
        format_duration(offer.duration_secs),
        offer.status.as_str().to_string(),
    ]
}

/// Pager caption, e.g. `Page 2 / 5`.
#[must_use]
pub fn pager_label(current: usize, total: usize) -> String {
    format!("Page {current} / {}", total.max(1))
}

/// Caption describing the visible rows, e.g. `Showing 6-10 of 23`.
#[must_use]
pub fn range_label(range: Option<(usize, usize)>, total_items: usize) -> String {
    match range {
        Some((first, last)) => format!("Showing {first}-{last} of {total_items}"),
        None => "No offers".to_string(),
    }
}

/// Score shown inside the health gauge.
#[must_use]
pub fn health_label(health: f64) -> String {
    format!("{health}%")
}
