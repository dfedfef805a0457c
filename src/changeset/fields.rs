use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::types::{Customer, Loan};

use super::{FieldValue, Snapshot, TrackedField};

fn composite<T: Serialize>(value: &T) -> FieldValue {
    FieldValue::Composite(serde_json::to_value(value).unwrap_or(Value::Null))
}

/// tracked fields of a customer record
///
/// the closed set eligible for change detection; server-managed fields
/// (customer id, audit timestamps, created-by) are deliberately absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CustomerField {
    FirstName,
    MiddleName,
    LastName,
    DateOfBirth,
    Gender,
    Nationality,
    MaritalStatus,
    Email,
    PhoneNumber,
    AlternatePhoneNumber,
    CurrentAddress,
    PermanentAddress,
    EmploymentDetails,
    IdentificationDocuments,
    CreditScore,
    KycStatus,
    RiskProfile,
    AccountStatus,
    FatcaStatus,
    PepStatus,
    CustomerNotes,
    PhotoUrl,
}

impl CustomerField {
    pub const TRACKED: &'static [CustomerField] = &[
        CustomerField::FirstName,
        CustomerField::MiddleName,
        CustomerField::LastName,
        CustomerField::DateOfBirth,
        CustomerField::Gender,
        CustomerField::Nationality,
        CustomerField::MaritalStatus,
        CustomerField::Email,
        CustomerField::PhoneNumber,
        CustomerField::AlternatePhoneNumber,
        CustomerField::CurrentAddress,
        CustomerField::PermanentAddress,
        CustomerField::EmploymentDetails,
        CustomerField::IdentificationDocuments,
        CustomerField::CreditScore,
        CustomerField::KycStatus,
        CustomerField::RiskProfile,
        CustomerField::AccountStatus,
        CustomerField::FatcaStatus,
        CustomerField::PepStatus,
        CustomerField::CustomerNotes,
        CustomerField::PhotoUrl,
    ];
}

impl TrackedField for CustomerField {
    fn api_name(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "firstName",
            CustomerField::MiddleName => "middleName",
            CustomerField::LastName => "lastName",
            CustomerField::DateOfBirth => "dateOfBirth",
            CustomerField::Gender => "gender",
            CustomerField::Nationality => "nationality",
            CustomerField::MaritalStatus => "maritalStatus",
            CustomerField::Email => "email",
            CustomerField::PhoneNumber => "phoneNumber",
            CustomerField::AlternatePhoneNumber => "alternatePhoneNumber",
            CustomerField::CurrentAddress => "currentAddress",
            CustomerField::PermanentAddress => "permanentAddress",
            CustomerField::EmploymentDetails => "employmentDetails",
            CustomerField::IdentificationDocuments => "identificationDocuments",
            CustomerField::CreditScore => "creditScore",
            CustomerField::KycStatus => "kycStatus",
            CustomerField::RiskProfile => "riskProfile",
            CustomerField::AccountStatus => "accountStatus",
            CustomerField::FatcaStatus => "fatcaStatus",
            CustomerField::PepStatus => "pepStatus",
            CustomerField::CustomerNotes => "customerNotes",
            CustomerField::PhotoUrl => "photoUrl",
        }
    }
}

impl Snapshot for Customer {
    type Field = CustomerField;

    fn tracked_fields() -> &'static [CustomerField] {
        CustomerField::TRACKED
    }

    fn field_value(&self, field: CustomerField) -> FieldValue {
        match field {
            CustomerField::FirstName => FieldValue::Text(Some(self.first_name.clone())),
            CustomerField::MiddleName => FieldValue::Text(self.middle_name.clone()),
            CustomerField::LastName => FieldValue::Text(Some(self.last_name.clone())),
            CustomerField::DateOfBirth => FieldValue::Date(Some(self.date_of_birth)),
            CustomerField::Gender => FieldValue::Text(Some(self.gender.clone())),
            CustomerField::Nationality => FieldValue::Text(Some(self.nationality.clone())),
            CustomerField::MaritalStatus => FieldValue::Text(Some(self.marital_status.clone())),
            CustomerField::Email => FieldValue::Text(Some(self.email.clone())),
            CustomerField::PhoneNumber => FieldValue::Phone(Some(self.phone_number.clone())),
            CustomerField::AlternatePhoneNumber => {
                FieldValue::Phone(self.alternate_phone_number.clone())
            }
            CustomerField::CurrentAddress => composite(&self.current_address),
            CustomerField::PermanentAddress => composite(&self.permanent_address),
            CustomerField::EmploymentDetails => composite(&self.employment_details),
            CustomerField::IdentificationDocuments => composite(&self.identification_documents),
            CustomerField::CreditScore => {
                FieldValue::Number(Some(Decimal::from(self.credit_score)))
            }
            CustomerField::KycStatus => FieldValue::Text(Some(self.kyc_status.clone())),
            CustomerField::RiskProfile => FieldValue::Text(Some(self.risk_profile.clone())),
            CustomerField::AccountStatus => FieldValue::Text(Some(self.account_status.clone())),
            CustomerField::FatcaStatus => FieldValue::Flag(self.fatca_status),
            CustomerField::PepStatus => FieldValue::Flag(self.pep_status),
            CustomerField::CustomerNotes => FieldValue::Text(self.customer_notes.clone()),
            CustomerField::PhotoUrl => FieldValue::Text(self.photo_url.clone()),
        }
    }
}

/// tracked fields of a loan record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoanField {
    CustomerId,
    Principal,
    InterestRate,
    TermMonths,
    StartDate,
    EndDate,
    Status,
    Notes,
}

impl LoanField {
    pub const TRACKED: &'static [LoanField] = &[
        LoanField::CustomerId,
        LoanField::Principal,
        LoanField::InterestRate,
        LoanField::TermMonths,
        LoanField::StartDate,
        LoanField::EndDate,
        LoanField::Status,
        LoanField::Notes,
    ];
}

impl TrackedField for LoanField {
    fn api_name(&self) -> &'static str {
        match self {
            LoanField::CustomerId => "customerId",
            LoanField::Principal => "principal",
            LoanField::InterestRate => "interestRate",
            LoanField::TermMonths => "termMonths",
            LoanField::StartDate => "startDate",
            LoanField::EndDate => "endDate",
            LoanField::Status => "status",
            LoanField::Notes => "notes",
        }
    }
}

impl Snapshot for Loan {
    type Field = LoanField;

    fn tracked_fields() -> &'static [LoanField] {
        LoanField::TRACKED
    }

    fn field_value(&self, field: LoanField) -> FieldValue {
        match field {
            LoanField::CustomerId => FieldValue::Text(Some(self.customer_id.clone())),
            LoanField::Principal => FieldValue::Number(Some(self.principal.as_decimal())),
            LoanField::InterestRate => composite(&self.interest_rate),
            LoanField::TermMonths => FieldValue::Number(Some(Decimal::from(self.term_months))),
            LoanField::StartDate => FieldValue::Date(Some(self.start_date)),
            LoanField::EndDate => FieldValue::Date(Some(self.end_date)),
            LoanField::Status => composite(&self.status),
            LoanField::Notes => FieldValue::Text(self.notes.clone()),
        }
    }
}
