//! Monthly revenue, cost and profit calculation.
//!
//! This module validates the estimator inputs at the boundary and then
//! computes the [`FinancialResult`] with exact decimal arithmetic, so
//! `net_profit == monthly_revenue - monthly_costs` holds without rounding.

use rust_decimal::Decimal;

use crate::error::{HubError, HubResult};
use crate::format::format_currency;
use crate::models::{CostAssumptions, CostLine, FinancialResult, ProfitStatus, RevenueAssumptions};

/// Upper bound for `operating_days`.
pub const MAX_OPERATING_DAYS: u32 = 31;

/// Lowest accepted price per item ($0.50).
pub const MIN_PRICE_PER_ITEM: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

fn reject(field: &str, message: String) -> HubError {
    HubError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn require_non_negative(field: &str, value: Decimal) -> HubResult<()> {
    if value < Decimal::ZERO {
        return Err(reject(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}

/// Checks that every cost is non-negative and `operating_days` is within 0..=31.
pub fn validate_costs(cost: &CostAssumptions) -> HubResult<()> {
    if cost.operating_days > MAX_OPERATING_DAYS {
        return Err(reject(
            "operating_days",
            format!(
                "must be between 0 and {}, got {}",
                MAX_OPERATING_DAYS, cost.operating_days
            ),
        ));
    }

    require_non_negative("rent", cost.rent)?;
    require_non_negative("manpower", cost.manpower)?;
    require_non_negative("cleaning_fee", cost.cleaning_fee)?;
    require_non_negative("scc_fee", cost.scc_fee)?;
    require_non_negative("utilities", cost.utilities)?;
    require_non_negative("misc", cost.misc)?;
    Ok(())
}

/// Checks that the price per item is at least [`MIN_PRICE_PER_ITEM`].
pub fn validate_revenue(revenue: &RevenueAssumptions) -> HubResult<()> {
    if revenue.price_per_item < MIN_PRICE_PER_ITEM {
        return Err(reject(
            "price_per_item",
            format!(
                "must be at least {}, got {}",
                MIN_PRICE_PER_ITEM, revenue.price_per_item
            ),
        ));
    }
    Ok(())
}

/// Estimates monthly revenue, costs and net profit.
///
/// - revenue = price per item x items sold per day x operating days
/// - costs = rent + manpower + cleaning + S&CC + utilities + misc
/// - net profit = revenue - costs
///
/// # Errors
///
/// Returns `InvalidInput` if any input is out of bounds, or if the figures
/// are too large to represent.
///
/// # Examples
///
/// ```
/// use hawker_hub::estimator::estimate;
/// use hawker_hub::models::{CostAssumptions, ProfitStatus, RevenueAssumptions};
/// use rust_decimal::Decimal;
///
/// let result = estimate(&CostAssumptions::default(), &RevenueAssumptions::default()).unwrap();
///
/// // $5.00 x 80 items x 26 days
/// assert_eq!(result.monthly_revenue, Decimal::from(10400));
/// assert_eq!(result.monthly_costs, Decimal::from(5775));
/// assert_eq!(result.net_profit, Decimal::from(4625));
/// assert_eq!(result.status, ProfitStatus::Profit);
/// ```
pub fn estimate(
    cost: &CostAssumptions,
    revenue: &RevenueAssumptions,
) -> HubResult<FinancialResult> {
    validate_costs(cost)?;
    validate_revenue(revenue)?;

    let monthly_revenue = revenue
        .price_per_item
        .checked_mul(Decimal::from(revenue.items_sold_per_day))
        .and_then(|daily| daily.checked_mul(Decimal::from(cost.operating_days)))
        .ok_or_else(|| reject("price_per_item", "monthly revenue is too large".to_string()))?;

    let monthly_costs = cost_breakdown(cost)
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
        .ok_or_else(|| reject("rent", "monthly costs are too large".to_string()))?;

    let net_profit = monthly_revenue
        .checked_sub(monthly_costs)
        .ok_or_else(|| reject("rent", "net profit is too large".to_string()))?;

    Ok(FinancialResult {
        monthly_revenue,
        monthly_costs,
        net_profit,
        status: ProfitStatus::from_net_profit(net_profit),
    })
}

/// Lists the six monthly cost components in display order.
pub fn cost_breakdown(cost: &CostAssumptions) -> Vec<CostLine> {
    [
        ("Rent", cost.rent),
        ("Manpower", cost.manpower),
        ("Cleaning Fee", cost.cleaning_fee),
        ("S&CC Fee", cost.scc_fee),
        ("Utilities", cost.utilities),
        ("Miscellaneous", cost.misc),
    ]
    .into_iter()
    .map(|(label, amount)| CostLine {
        label: label.to_string(),
        amount,
    })
    .collect()
}

/// The one-line summary shown under the results.
pub fn headline(result: &FinancialResult) -> String {
    match result.status {
        ProfitStatus::Profit => format!(
            "You're making a profit of {} per month!",
            format_currency(result.net_profit)
        ),
        ProfitStatus::Loss => format!(
            "You're losing {} per month.",
            format_currency(-result.net_profit)
        ),
        ProfitStatus::BreakEven => "You're breaking even.".to_string(),
    }
}
