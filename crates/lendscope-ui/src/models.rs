//! Dashboard DTO re-exports and the demo data set shown before a host wires a
//! real portfolio in.

pub use lendscope_api_models::{
    LoanOffer, LoanStatus, OverviewEntry, OverviewField, PortfolioSnapshot, UserAsset,
    UserAssetOverview,
};

const DAY: u64 = 86_400;

/// Per-token positions of the demo wallet.
#[must_use]
pub fn demo_assets() -> Vec<UserAsset> {
    vec![
        UserAsset {
            token_address: "So11111111111111111111111111111111111111112".to_string(),
            total_lent: 12_400,
            total_borrowed: 3_150,
            interest_earned: 642,
            available_balance: 8_900,
        },
        UserAsset {
            token_address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            total_lent: 5_000,
            total_borrowed: 0,
            interest_earned: 215,
            available_balance: 1_250,
        },
    ]
}

/// Portfolio snapshot of the demo wallet.
#[must_use]
pub fn demo_portfolio() -> PortfolioSnapshot {
    let overview = UserAssetOverview::aggregate(&demo_assets());
    PortfolioSnapshot {
        overview,
        total_deposit: overview
            .available_balance
            .saturating_add(overview.total_lent),
        health: 68.0,
    }
}

/// Lending market rows of the demo data set.
#[must_use]
pub fn demo_offers() -> Vec<LoanOffer> {
    let lenders = [
        "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
        "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM",
        "HN7cABqLq46Es1jh92dQQisAq662SmxELLLsHHe4YWrH",
        "3Kzh9qAqVWQhEsfQsxx6ATGqGXg2S8grUZz8tW9hCh8p",
    ];
    (0..23_u8)
        .map(|idx| {
            let step = u64::from(idx);
            LoanOffer {
                idx,
                lender: lenders[usize::from(idx) % lenders.len()].to_string(),
                amount: 500 + step * 125,
                collateral: 750 + step * 190,
                interest_rate: 3.5 + f64::from(idx % 6) * 0.75,
                duration_secs: DAY * (7 + (step % 3) * 7),
                status: if idx % 5 == 4 {
                    LoanStatus::Closed
                } else {
                    LoanStatus::Open
                },
            }
        })
        .collect()
}
