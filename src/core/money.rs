use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, half-up.
///
/// Every intermediate figure in the invoice computation passes through
/// this before it feeds the next step; the cascade is part of the
/// invoicing contract and must stay byte-stable across runs.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
