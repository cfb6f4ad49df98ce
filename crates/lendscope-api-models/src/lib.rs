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
#![allow(clippy::multiple_crate_versions)]
//! Shared DTOs for the Lendscope lending dashboard.
//!
//! Token amounts are carried as `u128` base units so on-chain balances survive
//! decoding without precision loss. The UI consumes these types as-is; any
//! display shaping happens in the UI crate.
use serde::{Deserialize, Serialize};

/// Aggregated position of a user across every token they hold in the protocol.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserAssetOverview {
    /// Total amount lent out to borrowers.
    pub total_lent: u128,
    /// Total amount currently borrowed.
    pub total_borrowed: u128,
    /// Interest accrued on lent positions.
    pub interest_earned: u128,
    /// Balance deposited but not committed to a loan.
    pub available_balance: u128,
}

impl UserAssetOverview {
    /// Sum per-token positions into a single overview.
    ///
    /// Uses saturating addition; a saturated field means the aggregate is not
    /// representable rather than silently wrapping.
    #[must_use]
    pub fn aggregate(assets: &[UserAsset]) -> Self {
        assets.iter().fold(Self::default(), |acc, asset| Self {
            total_lent: acc.total_lent.saturating_add(asset.total_lent),
            total_borrowed: acc.total_borrowed.saturating_add(asset.total_borrowed),
            interest_earned: acc.interest_earned.saturating_add(asset.interest_earned),
            available_balance: acc
                .available_balance
                .saturating_add(asset.available_balance),
        })
    }
}

/// Position of a user in a single token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserAsset {
    /// Mint address of the token.
    pub token_address: String,
    /// Amount of this token lent out.
    pub total_lent: u128,
    /// Amount of this token borrowed.
    pub total_borrowed: u128,
    /// Interest accrued in this token.
    pub interest_earned: u128,
    /// Uncommitted balance of this token.
    pub available_balance: u128,
}

/// Identifies one of the four overview cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OverviewField {
    /// Uncommitted balance.
    AvailableBalance,
    /// Amount lent out.
    TotalLent,
    /// Amount borrowed.
    TotalBorrowed,
    /// Interest accrued.
    InterestEarned,
}

impl OverviewField {
    /// Display order used by the overview section.
    pub const ALL: [Self; 4] = [
        Self::AvailableBalance,
        Self::TotalLent,
        Self::TotalBorrowed,
        Self::InterestEarned,
    ];

    /// Select the matching amount from an overview.
    #[must_use]
    pub const fn amount(self, overview: &UserAssetOverview) -> u128 {
        match self {
            Self::AvailableBalance => overview.available_balance,
            Self::TotalLent => overview.total_lent,
            Self::TotalBorrowed => overview.total_borrowed,
            Self::InterestEarned => overview.interest_earned,
        }
    }
}

/// A single overview card ready for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewEntry {
    /// Which amount this card shows.
    pub id: OverviewField,
    /// Card title.
    pub label: String,
    /// Pre-rendered value.
    pub value: String,
    /// Optional tooltip text for the info icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Lifecycle of a loan offer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Accepting borrowers.
    #[default]
    Open,
    /// Taken or withdrawn.
    Closed,
}

impl LoanStatus {
    /// Lowercase label used in tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Row of the lending market table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanOffer {
    /// Per-lender offer index.
    pub idx: u8,
    /// Lender wallet address.
    pub lender: String,
    /// Principal offered, in token base units.
    pub amount: u64,
    /// Collateral required, in token base units.
    pub collateral: u64,
    /// Interest rate in percent.
    pub interest_rate: f64,
    /// Loan duration in seconds.
    pub duration_secs: u64,
    /// Offer status.
    #[serde(default)]
    pub status: LoanStatus,
}

/// Snapshot driving the portfolio section of the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSnapshot {
    /// Aggregated position.
    pub overview: UserAssetOverview,
    /// Total ever deposited.
    pub total_deposit: u128,
    /// Account health score, nominally in `[0, 100]`.
    pub health: f64,
}
