// src/loan.rs

use std::error::Error;
use std::fmt;

/// The fixed-EMI breakdown for a home loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amortization {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

#[derive(Debug)]
pub enum LoanError {
    /// Principal, rate, and term must all be finite and strictly positive.
    InvalidArgument(String),
}

impl fmt::Display for LoanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanError::InvalidArgument(msg) => write!(f, "Invalid loan argument: {msg}"),
        }
    }
}

impl Error for LoanError {}

/// Standard amortization formula: the fixed monthly payment that fully
/// repays `principal` with interest at `annual_rate_percent` over
/// `term_years`.
///
/// The calculator form validates before calling; anything non-positive (a
/// zero rate included, which would divide by zero below) is rejected here
/// rather than producing garbage.
pub fn amortize(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Result<Amortization, LoanError> {
    for (name, v) in [
        ("principal", principal),
        ("rate", annual_rate_percent),
        ("term", term_years),
    ] {
        if !v.is_finite() || v <= 0.0 {
            return Err(LoanError::InvalidArgument(format!("{name} must be > 0, got {v}")));
        }
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let months = term_years * 12.0;
    let growth = (1.0 + monthly_rate).powf(months);

    let monthly_payment = principal * monthly_rate * growth / (growth - 1.0);
    let total_payment = monthly_payment * months;

    Ok(Amortization {
        monthly_payment,
        total_interest: total_payment - principal,
        total_payment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_twenty_year_emi() {
        // ₹10,00,000 at 8.5% over 20 years.
        let a = amortize(1_000_000.0, 8.5, 20.0).unwrap();
        assert!((a.monthly_payment - 8678.0).abs() < 1.0, "got {}", a.monthly_payment);
        assert!((a.total_payment - a.monthly_payment * 240.0).abs() < 1e-6);
        assert!((a.total_interest - (a.total_payment - 1_000_000.0)).abs() < 1e-6);
    }

    #[test]
    fn one_year_sanity() {
        // Payment must exceed straight principal/12 but stay under
        // principal/12 plus full first-month interest per installment.
        let a = amortize(120_000.0, 12.0, 1.0).unwrap();
        assert!(a.monthly_payment > 10_000.0);
        assert!(a.monthly_payment < 11_200.0);
        assert!(a.total_interest > 0.0);
    }

    #[test]
    fn rejects_non_positive_input() {
        assert!(amortize(0.0, 8.5, 20.0).is_err());
        assert!(amortize(1_000_000.0, 0.0, 20.0).is_err());
        assert!(amortize(1_000_000.0, 8.5, 0.0).is_err());
        assert!(amortize(-5.0, 8.5, 20.0).is_err());
        assert!(amortize(f64::NAN, 8.5, 20.0).is_err());
    }
}
