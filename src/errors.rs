use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::{Money, Rate};

/// rejection produced by create-flow draft validation
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("principal must be positive: {amount}")]
    NonPositivePrincipal {
        amount: Money,
    },

    #[error("term must be at least one month: {months}")]
    InvalidTerm {
        months: u32,
    },

    #[error("either annual rate or total interest must be supplied")]
    MissingInterestSource,

    #[error("negative interest rate: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("negative interest amount: {amount}")]
    NegativeInterest {
        amount: Money,
    },

    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("required field is blank: {field}")]
    BlankField {
        field: &'static str,
    },

    #[error("invalid email address: {value}")]
    InvalidEmail {
        value: String,
    },

    #[error("invalid phone number: {value}")]
    InvalidPhone {
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
