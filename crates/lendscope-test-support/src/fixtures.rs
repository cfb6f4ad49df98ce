//! Sample market rows and portfolios.

use lendscope_api_models::{
    LoanOffer, LoanStatus, PortfolioSnapshot, UserAsset, UserAssetOverview,
};

const DAY_SECS: u64 = 86_400;

/// Build `count` loan offers with distinct, ordered indices.
///
/// Every third offer is closed so status rendering has something to show.
#[must_use]
pub fn loan_offers(count: usize) -> Vec<LoanOffer> {
    (0..count).map(loan_offer).collect()
}

/// Build the offer at position `n` of [`loan_offers`].
#[must_use]
pub fn loan_offer(n: usize) -> LoanOffer {
    let step = u64::try_from(n).unwrap_or(u64::MAX);
    LoanOffer {
        idx: u8::try_from(n % 256).unwrap_or(u8::MAX),
        lender: format!("lender-{n:03}"),
        amount: 1_000 + step.saturating_mul(250),
        collateral: 1_500 + step.saturating_mul(375),
        interest_rate: 4.0 + f64::from(u32::try_from(n % 8).unwrap_or(0)) * 0.5,
        duration_secs: DAY_SECS * (7 + step % 4 * 7),
        status: if n % 3 == 2 {
            LoanStatus::Closed
        } else {
            LoanStatus::Open
        },
    }
}

/// Per-token positions for a wallet holding two tokens.
#[must_use]
pub fn user_assets() -> Vec<UserAsset> {
    vec![
        UserAsset {
            token_address: "So11111111111111111111111111111111111111112".to_string(),
            total_lent: 4_000,
            total_borrowed: 1_200,
            interest_earned: 180,
            available_balance: 2_500,
        },
        UserAsset {
            token_address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            total_lent: 6_000,
            total_borrowed: 800,
            interest_earned: 320,
            available_balance: 1_500,
        },
    ]
}

/// Portfolio built from [`user_assets`] with the given health score.
#[must_use]
pub fn portfolio(health: f64) -> PortfolioSnapshot {
    let overview = UserAssetOverview::aggregate(&user_assets());
    PortfolioSnapshot {
        overview,
        total_deposit: overview
            .available_balance
            .saturating_add(overview.total_lent),
        health,
    }
}
