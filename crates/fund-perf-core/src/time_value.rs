use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::FundPerfError;
use crate::types::{Money, Rate};
use crate::FundPerfResult;

const CONVERGENCE_THRESHOLD: Decimal = dec!(0.0000001);
const MAX_XIRR_ITERATIONS: u32 = 100;

/// Actual/365 day count: whole calendar days over 365.
const DAYS_PER_YEAR: Decimal = dec!(365);

fn year_fraction(base: NaiveDate, date: NaiveDate) -> Decimal {
    Decimal::from((date - base).num_days()) / DAYS_PER_YEAR
}

fn overflow(context: &str) -> FundPerfError {
    FundPerfError::NumericalOverflow {
        context: context.into(),
    }
}

/// (1 + rate)^years, with pow overflow and underflow-to-zero both reported
/// rather than silently dropping the term.
fn discount_factor(one_plus_r: Decimal, years: Decimal) -> FundPerfResult<Decimal> {
    match one_plus_r.checked_powd(years) {
        Some(d) if !d.is_zero() => Ok(d),
        _ => Err(overflow("discount factor")),
    }
}

/// Net Present Value of dated cash flows, discounted to the first entry's
/// date at actual/365. The first entry carries exponent 0.
pub fn xnpv(rate: Rate, flows: &[(NaiveDate, Money)]) -> FundPerfResult<Money> {
    let one_plus_r = Decimal::ONE + rate;
    if one_plus_r <= Decimal::ZERO {
        return Err(FundPerfError::InvalidInput {
            field: "rate".into(),
            reason: "Discount rate must be greater than -100%".into(),
        });
    }

    let Some(&(base_date, _)) = flows.first() else {
        return Ok(Decimal::ZERO);
    };

    let mut result = Decimal::ZERO;
    for &(date, amount) in flows {
        let years = year_fraction(base_date, date);
        let discount = discount_factor(one_plus_r, years)?;
        let term = amount
            .checked_div(discount)
            .ok_or_else(|| overflow("discounted cash flow term"))?;
        result = result
            .checked_add(term)
            .ok_or_else(|| overflow("NPV accumulation"))?;
    }

    Ok(result)
}

/// Extended IRR for irregular cash flow dates using Newton-Raphson.
///
/// Returns the annualized rate as a decimal (0.10 = 10%). Iteration
/// exhaustion, a vanishing derivative, and numerical overflow all surface as
/// error values; callers treat any of them as "no rate found".
pub fn xirr(flows: &[(NaiveDate, Money)], guess: Rate) -> FundPerfResult<Rate> {
    if flows.len() < 2 {
        return Err(FundPerfError::InsufficientData(
            "XIRR requires at least 2 dated cash flows".into(),
        ));
    }

    let base_date = flows[0].0;
    let mut rate = guess;

    for i in 0..MAX_XIRR_ITERATIONS {
        let one_plus_r = Decimal::ONE + rate;
        if one_plus_r <= Decimal::ZERO {
            return Err(FundPerfError::ConvergenceFailure {
                iterations: i,
                last_delta: rate,
            });
        }

        let mut npv = Decimal::ZERO;
        let mut dnpv = Decimal::ZERO;

        for &(date, amount) in flows {
            let years = year_fraction(base_date, date);
            let discount = discount_factor(one_plus_r, years)?;
            let term = amount
                .checked_div(discount)
                .ok_or_else(|| overflow("discounted cash flow term"))?;
            npv = npv
                .checked_add(term)
                .ok_or_else(|| overflow("NPV accumulation"))?;

            // d/dr of amount * (1+r)^(-t) is -t * amount / ((1+r)^(t+1))
            let dterm = years
                .checked_mul(term)
                .and_then(|t| t.checked_div(one_plus_r))
                .ok_or_else(|| overflow("NPV derivative term"))?;
            dnpv = dnpv
                .checked_sub(dterm)
                .ok_or_else(|| overflow("NPV derivative accumulation"))?;
        }

        if npv.abs() < CONVERGENCE_THRESHOLD {
            return Ok(rate);
        }

        if dnpv.is_zero() {
            return Err(FundPerfError::ConvergenceFailure {
                iterations: i,
                last_delta: npv,
            });
        }

        let step = npv
            .checked_div(dnpv)
            .ok_or_else(|| overflow("Newton step"))?;
        rate = rate
            .checked_sub(step)
            .ok_or_else(|| overflow("Newton update"))?;

        // Guard against divergence
        if rate < dec!(-0.99) {
            rate = dec!(-0.99);
        } else if rate > dec!(100.0) {
            rate = dec!(100.0);
        }
    }

    Err(FundPerfError::ConvergenceFailure {
        iterations: MAX_XIRR_ITERATIONS,
        last_delta: xnpv(rate, flows).unwrap_or(Decimal::MAX),
    })
}
