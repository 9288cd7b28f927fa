//! Bracket arithmetic shared by the statutory calculations.
//!
//! Two shapes appear on an Israeli payslip: bounded contribution brackets
//! (national and health insurance collect a rate per bracket, up to the top
//! of the last bracket) and progressive income-tax brackets where each
//! bracket taxes only the income falling inside it, with an open-ended top
//! bracket.

use rust_decimal::Decimal;

use crate::config::{ContributionBracket, TaxBracket};

/// Sums the per-bracket contributions on `amount`.
///
/// Each bracket contributes `max(0, min(amount, to) - from) × rate`.
/// Income above the last bracket's top contributes nothing.
///
/// # Example
///
/// ```
/// use payslip_engine::config::ContributionBracket;
/// use payslip_engine::tax::bracketed_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let brackets = vec![
///     ContributionBracket {
///         from_amount: Decimal::ZERO,
///         to_amount: Decimal::from(7522),
///         rate: Decimal::from_str("0.0104").unwrap(),
///     },
///     ContributionBracket {
///         from_amount: Decimal::from(7522),
///         to_amount: Decimal::from(50695),
///         rate: Decimal::from_str("0.07").unwrap(),
///     },
/// ];
///
/// // 10,000: 7,522 at 1.04% plus 2,478 at 7%.
/// let contribution = bracketed_contribution(Decimal::from(10000), &brackets);
/// assert_eq!(contribution, Decimal::from_str("251.6888").unwrap());
/// ```
pub fn bracketed_contribution(amount: Decimal, brackets: &[ContributionBracket]) -> Decimal {
    brackets
        .iter()
        .map(|bracket| bracket_share(amount, bracket) * bracket.rate)
        .sum()
}

/// Like [`bracketed_contribution`], but applies one flat rate in every
/// bracket — the reduced-rate path for employees under 18 or 67 and over.
/// The bracket bounds still cap the contributable amount.
pub fn bracketed_contribution_at(
    amount: Decimal,
    brackets: &[ContributionBracket],
    flat_rate: Decimal,
) -> Decimal {
    brackets
        .iter()
        .map(|bracket| bracket_share(amount, bracket) * flat_rate)
        .sum()
}

fn bracket_share(amount: Decimal, bracket: &ContributionBracket) -> Decimal {
    (amount.min(bracket.to_amount) - bracket.from_amount).max(Decimal::ZERO)
}

/// Walks the progressive brackets and accumulates the tax on `taxable`.
///
/// Each bracket taxes at most its own width (`to - from`); the open-ended
/// top bracket takes whatever remains. Taxable income under one yields
/// zero.
pub fn progressive_tax(taxable: Decimal, brackets: &[TaxBracket]) -> Decimal {
    if taxable < Decimal::ONE {
        return Decimal::ZERO;
    }

    let mut total = Decimal::ZERO;
    let mut remaining = taxable;

    for bracket in brackets {
        let slice = match bracket.to_amount {
            Some(to) => remaining.min(to - bracket.from_amount),
            None => remaining,
        };
        if slice > Decimal::ZERO {
            total += slice * bracket.rate;
            remaining -= slice;
        }
        if remaining <= Decimal::ZERO {
            break;
        }
    }

    total
}

/// Returns the rate of the bracket containing `amount`, or zero when no
/// bracket matches.
///
/// A bracket matches when `from <= amount < to`; the open-ended top
/// bracket matches everything at or above its lower bound.
pub fn marginal_rate(amount: Decimal, brackets: &[TaxBracket]) -> Decimal {
    brackets
        .iter()
        .find(|bracket| {
            amount >= bracket.from_amount
                && bracket.to_amount.is_none_or(|to| amount < to)
        })
        .map(|bracket| bracket.rate)
        .unwrap_or(Decimal::ZERO)
}
