pub mod recalc;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::Loan;

pub use recalc::{EditedField, RateSource, TermsForm, TermsRecalculator};

/// derived loan terms
///
/// a derivation populates exactly the subset of fields it could compute from
/// valid inputs; a partially filled form yields a partially filled result,
/// never an error
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoanTerms {
    pub principal: Option<Money>,
    pub term_months: Option<u32>,
    pub annual_rate_percent: Option<Rate>,
    pub total_interest: Option<Money>,
    pub monthly_interest: Option<Money>,
    pub total_repayable: Option<Money>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl LoanTerms {
    /// seed terms from a stored loan when an edit session opens
    pub fn from_loan(loan: &Loan) -> Self {
        let total_interest = loan.interest_rate.total_interest_rupees;
        Self {
            principal: Some(loan.principal),
            term_months: Some(loan.term_months),
            annual_rate_percent: Some(loan.interest_rate.annual_percentage),
            total_interest: Some(total_interest),
            monthly_interest: (loan.term_months >= 1)
                .then(|| total_interest / Decimal::from(loan.term_months)),
            total_repayable: Some(loan.principal + total_interest),
            start_date: Some(loan.start_date),
            end_date: Some(loan.end_date),
        }
    }
}

fn valid_principal(principal: Option<Money>) -> Option<Money> {
    principal.filter(|p| p.is_positive())
}

fn valid_term(term_months: Option<u32>) -> Option<u32> {
    term_months.filter(|t| *t >= 1)
}

/// derive amount-side fields from an annual percentage rate
///
/// `total_interest = principal * rate * term / (100 * 12)`, rounded half-up
/// to paisa; invalid or missing inputs leave their dependents uncomputed
pub fn derive_from_rate(
    principal: Option<Money>,
    annual_rate: Option<Rate>,
    term_months: Option<u32>,
) -> LoanTerms {
    let principal = valid_principal(principal);
    let term_months = valid_term(term_months);
    let annual_rate = annual_rate.filter(|r| !r.is_negative());

    let mut terms = LoanTerms {
        principal,
        term_months,
        annual_rate_percent: annual_rate,
        ..LoanTerms::default()
    };

    if let (Some(p), Some(r), Some(t)) = (principal, annual_rate, term_months) {
        let total = Money::from_decimal(
            p.as_decimal() * r.as_percent() * Decimal::from(t) / Decimal::from(1200),
        );
        terms.total_interest = Some(total);
        terms.monthly_interest = Some(total / Decimal::from(t));
        terms.total_repayable = Some(p + total);
    }

    terms
}

/// derive the annual percentage rate from an absolute interest amount
///
/// inverse of [`derive_from_rate`]; a non-positive principal or term yields
/// no rate, while the amount-side fields that remain computable are still
/// populated
pub fn derive_from_amount(
    principal: Option<Money>,
    total_interest: Option<Money>,
    term_months: Option<u32>,
) -> LoanTerms {
    let principal = valid_principal(principal);
    let term_months = valid_term(term_months);
    let total_interest = total_interest.filter(|a| !a.is_negative());

    let mut terms = LoanTerms {
        principal,
        term_months,
        total_interest,
        ..LoanTerms::default()
    };

    if let (Some(a), Some(t)) = (total_interest, term_months) {
        terms.monthly_interest = Some(a / Decimal::from(t));
    }
    if let (Some(p), Some(a)) = (principal, total_interest) {
        terms.total_repayable = Some(p + a);
    }
    if let (Some(p), Some(a), Some(t)) = (principal, total_interest, term_months) {
        let rate = a.as_decimal() * Decimal::from(1200) / (p.as_decimal() * Decimal::from(t));
        terms.annual_rate_percent = Some(Rate::from_percent(rate).round_display());
    }

    terms
}

/// maturity date: start plus term in calendar months
///
/// day-of-month overflow clamps to the last valid day of the target month
/// (jan 31 + 1 month is feb 28, or feb 29 in a leap year)
pub fn derive_end_date(start_date: NaiveDate, term_months: u32) -> NaiveDate {
    start_date
        .checked_add_months(Months::new(term_months))
        .unwrap_or(start_date)
}

/// annual percentage equivalent of a paisa rate
///
/// 1 paisa per rupee per month is 1% per month, 12% per year
pub fn paisa_to_annual_percent(paisa_rate: Decimal) -> Rate {
    Rate::from_percent(paisa_rate * Decimal::from(12))
}

/// paisa rate equivalent of an annual percentage
pub fn annual_percent_to_paisa(rate: Rate) -> Decimal {
    rate.as_percent() / Decimal::from(12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rupees(amount: i64) -> Option<Money> {
        Some(Money::from_rupees(amount))
    }

    #[test]
    fn test_derive_from_rate() {
        let terms = derive_from_rate(rupees(100_000), Some(Rate::from_percent(dec!(18))), Some(12));

        assert_eq!(terms.total_interest, rupees(18_000));
        assert_eq!(terms.monthly_interest, rupees(1_500));
        assert_eq!(terms.total_repayable, rupees(118_000));
    }

    #[test]
    fn test_derive_from_amount() {
        let terms = derive_from_amount(rupees(100_000), rupees(9_000), Some(6));

        assert_eq!(terms.annual_rate_percent, Some(Rate::from_percent(dec!(18.00))));
        assert_eq!(terms.monthly_interest, rupees(1_500));
        assert_eq!(terms.total_repayable, rupees(109_000));
    }

    #[test]
    fn test_rate_amount_round_trip() {
        for (p, r, t) in [
            (100_000, dec!(18), 12),
            (250_000, dec!(12.5), 36),
            (40_000, dec!(21.75), 7),
            (1_000, dec!(0), 24),
        ] {
            let forward =
                derive_from_rate(rupees(p), Some(Rate::from_percent(r)), Some(t));
            let back = derive_from_amount(rupees(p), forward.total_interest, Some(t));

            let recovered = back.annual_rate_percent.unwrap().as_percent();
            assert!(
                (recovered - r).abs() <= dec!(0.01),
                "rate {} round-tripped to {}",
                r,
                recovered
            );
        }
    }

    #[test]
    fn test_total_repayable_is_exact_sum() {
        let terms = derive_from_rate(rupees(99_999), Some(Rate::from_percent(dec!(17.33))), Some(11));

        let principal = terms.principal.unwrap();
        let interest = terms.total_interest.unwrap();
        assert_eq!(terms.total_repayable.unwrap(), principal + interest);
    }

    #[test]
    fn test_invalid_principal_leaves_dependents_uncomputed() {
        let terms = derive_from_rate(rupees(0), Some(Rate::from_percent(dec!(18))), Some(12));

        assert_eq!(terms.principal, None);
        assert_eq!(terms.annual_rate_percent, Some(Rate::from_percent(dec!(18))));
        assert_eq!(terms.term_months, Some(12));
        assert_eq!(terms.total_interest, None);
        assert_eq!(terms.monthly_interest, None);
        assert_eq!(terms.total_repayable, None);
    }

    #[test]
    fn test_zero_term_yields_no_rate() {
        let terms = derive_from_amount(rupees(100_000), rupees(9_000), Some(0));

        assert_eq!(terms.annual_rate_percent, None);
        // amount-side fields that need no term are still populated
        assert_eq!(terms.total_interest, rupees(9_000));
        assert_eq!(terms.total_repayable, rupees(109_000));
        assert_eq!(terms.monthly_interest, None);
    }

    #[test]
    fn test_missing_inputs_degrade_to_partial_result() {
        let terms = derive_from_rate(None, None, Some(12));

        assert_eq!(
            terms,
            LoanTerms {
                term_months: Some(12),
                ..LoanTerms::default()
            }
        );
    }

    #[test]
    fn test_end_date_zero_term_is_identity() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(derive_end_date(start, 0), start);
    }

    #[test]
    fn test_end_date_clamps_to_month_end() {
        let jan31_leap = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            derive_end_date(jan31_leap, 1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        let jan31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        assert_eq!(
            derive_end_date(jan31, 1),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_end_date_crosses_year_boundary() {
        let start = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
        assert_eq!(
            derive_end_date(start, 15),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_terms_seeded_from_stored_loan() {
        use crate::types::{InterestRate, InterestType, Loan, LoanStatus};
        use chrono::{TimeZone, Utc};

        let loan = Loan {
            loan_id: "LOAN001".to_string(),
            customer_id: "CUST001".to_string(),
            principal: Money::from_rupees(100_000),
            interest_rate: InterestRate {
                interest_type: InterestType::Percentage,
                annual_percentage: Rate::from_percent(dec!(18)),
                total_interest_rupees: Money::from_rupees(18_000),
            },
            term_months: 12,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            status: LoanStatus::Active,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        };

        let terms = LoanTerms::from_loan(&loan);
        assert_eq!(terms.monthly_interest, rupees(1_500));
        assert_eq!(terms.total_repayable, rupees(118_000));

        let form = TermsForm::from_loan(&loan);
        assert_eq!(form.principal, rupees(100_000));
        assert_eq!(form.total_interest, rupees(18_000));
        assert_eq!(form.term_months, Some(12));
    }

    #[test]
    fn test_paisa_equivalence() {
        // 1.5 paisa per rupee per month is 18% p.a.
        assert_eq!(paisa_to_annual_percent(dec!(1.5)), Rate::from_percent(dec!(18)));
        assert_eq!(annual_percent_to_paisa(Rate::from_percent(dec!(18))), dec!(1.5));

        for paisa in [dec!(0.5), dec!(1), dec!(2.25)] {
            assert_eq!(annual_percent_to_paisa(paisa_to_annual_percent(paisa)), paisa);
        }
    }
}
