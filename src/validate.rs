use chrono::NaiveDate;

use crate::changeset::COUNTRY_CODE_PREFIX;
use crate::decimal::{Money, Rate};
use crate::errors::{Result, ValidationError};

/// new-loan payload as entered, checked before submission
///
/// create flows send the full payload rather than a change set, so the whole
/// draft is validated in one pass
#[derive(Debug, Clone)]
pub struct LoanDraft {
    pub customer_id: String,
    pub principal: Money,
    pub annual_rate_percent: Option<Rate>,
    pub total_interest: Option<Money>,
    pub term_months: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
}

impl LoanDraft {
    pub fn validate(&self) -> Result<()> {
        if self.customer_id.trim().is_empty() {
            return Err(ValidationError::BlankField {
                field: "customerId",
            });
        }
        if !self.principal.is_positive() {
            return Err(ValidationError::NonPositivePrincipal {
                amount: self.principal,
            });
        }
        if self.term_months < 1 {
            return Err(ValidationError::InvalidTerm {
                months: self.term_months,
            });
        }
        match (self.annual_rate_percent, self.total_interest) {
            (None, None) => return Err(ValidationError::MissingInterestSource),
            (Some(rate), _) if rate.is_negative() => {
                return Err(ValidationError::NegativeRate { rate });
            }
            (_, Some(amount)) if amount.is_negative() => {
                return Err(ValidationError::NegativeInterest { amount });
            }
            _ => {}
        }
        if self.end_date < self.start_date {
            return Err(ValidationError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

/// new-customer payload as entered, checked before submission
#[derive(Debug, Clone)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub alternate_phone_number: Option<String>,
}

impl CustomerDraft {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::BlankField { field });
            }
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail {
                value: self.email.clone(),
            });
        }
        check_phone(&self.phone_number)?;
        if let Some(alternate) = &self.alternate_phone_number {
            check_phone(alternate)?;
        }
        Ok(())
    }
}

/// ten digits, with or without the country-code prefix
fn check_phone(value: &str) -> Result<()> {
    let digits = value
        .trim()
        .strip_prefix(COUNTRY_CODE_PREFIX)
        .unwrap_or_else(|| value.trim());
    if digits.len() != 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone {
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> LoanDraft {
        LoanDraft {
            customer_id: "CUST001".to_string(),
            principal: Money::from_rupees(100_000),
            annual_rate_percent: Some(Rate::from_percent(dec!(18))),
            total_interest: None,
            term_months: 12,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_valid_loan_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_zero_principal_rejected() {
        let mut d = draft();
        d.principal = Money::ZERO;
        assert!(matches!(
            d.validate(),
            Err(ValidationError::NonPositivePrincipal { .. })
        ));
    }

    #[test]
    fn test_zero_term_rejected() {
        let mut d = draft();
        d.term_months = 0;
        assert!(matches!(d.validate(), Err(ValidationError::InvalidTerm { months: 0 })));
    }

    #[test]
    fn test_missing_interest_source_rejected() {
        let mut d = draft();
        d.annual_rate_percent = None;
        d.total_interest = None;
        assert!(matches!(
            d.validate(),
            Err(ValidationError::MissingInterestSource)
        ));
    }

    #[test]
    fn test_amount_only_draft_passes() {
        let mut d = draft();
        d.annual_rate_percent = None;
        d.total_interest = Some(Money::from_rupees(18_000));
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut d = draft();
        d.end_date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert!(matches!(
            d.validate(),
            Err(ValidationError::EndBeforeStart { .. })
        ));
    }

    fn customer_draft() -> CustomerDraft {
        CustomerDraft {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            alternate_phone_number: None,
        }
    }

    #[test]
    fn test_valid_customer_draft_passes() {
        assert!(customer_draft().validate().is_ok());
    }

    #[test]
    fn test_prefixed_phone_accepted() {
        let mut d = customer_draft();
        d.phone_number = "+919876543210".to_string();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut d = customer_draft();
        d.phone_number = "98765".to_string();
        assert!(matches!(d.validate(), Err(ValidationError::InvalidPhone { .. })));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut d = customer_draft();
        d.first_name = "  ".to_string();
        assert!(matches!(
            d.validate(),
            Err(ValidationError::BlankField { field: "firstName" })
        ));
    }

    #[test]
    fn test_mailless_email_rejected() {
        let mut d = customer_draft();
        d.email = "asha.rao.example.com".to_string();
        assert!(matches!(d.validate(), Err(ValidationError::InvalidEmail { .. })));
    }
}
