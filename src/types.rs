use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// how a loan's interest is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterestType {
    /// fixed paise per rupee of principal per month
    Paisa,
    /// annual percentage rate
    Percentage,
}

/// loan lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    Pending,
    Active,
    Closed,
    Defaulted,
}

/// interest terms as stored on a loan record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRate {
    pub interest_type: InterestType,
    pub annual_percentage: Rate,
    pub total_interest_rupees: Money,
}

/// loan record as served by the REST api
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub loan_id: String,
    pub customer_id: String,
    pub principal: Money,
    pub interest_rate: InterestRate,
    pub term_months: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LoanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// postal address block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub address_type: String,
    pub residence_since: String,
}

/// employment block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentDetails {
    pub employment_status: String,
    pub employer_name: String,
    pub designation: String,
    pub work_experience: u32,
    pub monthly_income: Money,
    pub annual_income: Money,
}

/// identity document attached to a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationDocument {
    pub document_type: String,
    pub document_number: String,
    pub issuing_authority: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_image_url: Option<String>,
}

/// customer record as served by the REST api
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub nationality: String,
    pub marital_status: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_phone_number: Option<String>,
    pub current_address: Address,
    pub permanent_address: Address,
    pub employment_details: EmploymentDetails,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identification_documents: Vec<IdentificationDocument>,
    pub credit_score: u16,
    pub kyc_status: String,
    pub risk_profile: String,
    pub account_status: String,
    pub fatca_status: bool,
    pub pep_status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}
