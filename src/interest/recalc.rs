use chrono::NaiveDate;

use crate::decimal::{Money, Rate};
use crate::types::Loan;

use super::{derive_end_date, derive_from_amount, derive_from_rate, LoanTerms};

/// live loan-terms form state
///
/// owned by the host component and passed in on every change event; the
/// recalculator never holds form values itself
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TermsForm {
    pub principal: Option<Money>,
    pub annual_rate_percent: Option<Rate>,
    pub total_interest: Option<Money>,
    pub term_months: Option<u32>,
    pub start_date: Option<NaiveDate>,
}

impl TermsForm {
    /// seed the form from a stored loan when an edit session opens
    pub fn from_loan(loan: &Loan) -> Self {
        Self {
            principal: Some(loan.principal),
            annual_rate_percent: Some(loan.interest_rate.annual_percentage),
            total_interest: Some(loan.interest_rate.total_interest_rupees),
            term_months: Some(loan.term_months),
            start_date: Some(loan.start_date),
        }
    }
}

/// which editable field produced a change event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditedField {
    Principal,
    AnnualRate,
    TotalInterest,
    TermMonths,
    StartDate,
}

/// which of the two mutually derivable fields is the source of truth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    Rate,
    Amount,
}

impl RateSource {
    /// the editable field a derivation from this source writes
    fn written_field(self) -> EditedField {
        match self {
            RateSource::Rate => EditedField::TotalInterest,
            RateSource::Amount => EditedField::AnnualRate,
        }
    }
}

/// recalculation pipeline for one loan form instance
///
/// tracks which of rate/amount the user last edited and suppresses, for one
/// tick, the change event a derivation's own write echoes back from the
/// complementary bound input; without the suppression the two fields would
/// re-derive each other forever
#[derive(Debug)]
pub struct TermsRecalculator {
    source: RateSource,
    suppressed: Option<EditedField>,
}

impl TermsRecalculator {
    /// new-loan form, rate entry is the default source
    pub fn new() -> Self {
        Self::with_source(RateSource::Rate)
    }

    pub fn with_source(source: RateSource) -> Self {
        Self {
            source,
            suppressed: None,
        }
    }

    /// the current source of truth
    pub fn source(&self) -> RateSource {
        self.source
    }

    /// handle one change event from the form
    ///
    /// returns the freshly derived terms, or `None` when the event is the
    /// echo of the previous derivation's own write and must not re-derive;
    /// monthly interest, total repayable and end date are read-only inputs
    /// that never emit change events, so only the complement field is guarded
    pub fn field_changed(&mut self, form: &TermsForm, edited: EditedField) -> Option<LoanTerms> {
        // a genuine edit of any other field also clears a pending suppression
        if self.suppressed.take() == Some(edited) {
            return None;
        }

        match edited {
            EditedField::AnnualRate => self.source = RateSource::Rate,
            EditedField::TotalInterest => self.source = RateSource::Amount,
            EditedField::Principal | EditedField::TermMonths | EditedField::StartDate => {}
        }

        let mut terms = match self.source {
            RateSource::Rate => {
                derive_from_rate(form.principal, form.annual_rate_percent, form.term_months)
            }
            RateSource::Amount => {
                derive_from_amount(form.principal, form.total_interest, form.term_months)
            }
        };

        terms.start_date = form.start_date;
        if let (Some(start), Some(t)) = (form.start_date, form.term_months) {
            terms.end_date = Some(derive_end_date(start, t));
        }

        // the complement was written into its bound input only when the
        // derivation could compute it
        let written = self.source.written_field();
        let wrote_complement = match written {
            EditedField::TotalInterest => terms.total_interest.is_some(),
            _ => terms.annual_rate_percent.is_some(),
        };
        if wrote_complement {
            self.suppressed = Some(written);
        }

        Some(terms)
    }
}

impl Default for TermsRecalculator {
    fn default() -> Self {
        Self::new()
    }
}
