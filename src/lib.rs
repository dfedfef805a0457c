pub mod changeset;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod session;
pub mod types;
pub mod validate;

// re-export key types
pub use changeset::{
    compute_changes, ChangeSet, CustomerField, FieldValue, LoanField, Snapshot, TrackedField,
};
pub use decimal::{Money, Rate};
pub use errors::{Result, ValidationError};
pub use interest::{
    annual_percent_to_paisa, derive_end_date, derive_from_amount, derive_from_rate,
    paisa_to_annual_percent, EditedField, LoanTerms, RateSource, TermsForm, TermsRecalculator,
};
pub use session::EditSession;
pub use types::{
    Address, Customer, EmploymentDetails, IdentificationDocument, InterestRate, InterestType,
    Loan, LoanStatus,
};
pub use validate::{CustomerDraft, LoanDraft};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use serde_json;
pub use uuid::Uuid;
