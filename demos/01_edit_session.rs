/// edit session - change detection gating a customer update
use loan_desk_rs::chrono::{NaiveDate, TimeZone, Utc};
use loan_desk_rs::{
    Address, Customer, CustomerField, EditSession, EmploymentDetails, Money,
};

fn customer() -> Customer {
    let address = Address {
        street: "14 MG Road".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        postal_code: "411001".to_string(),
        country: "India".to_string(),
        address_type: "RESIDENTIAL".to_string(),
        residence_since: "2019".to_string(),
    };
    Customer {
        customer_id: "CUST001".to_string(),
        first_name: "Asha".to_string(),
        middle_name: None,
        last_name: "Rao".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        gender: "FEMALE".to_string(),
        nationality: "Indian".to_string(),
        marital_status: "MARRIED".to_string(),
        email: "asha.rao@example.com".to_string(),
        phone_number: "+919876543210".to_string(),
        alternate_phone_number: None,
        current_address: address.clone(),
        permanent_address: address,
        employment_details: EmploymentDetails {
            employment_status: "SALARIED".to_string(),
            employer_name: "Deccan Textiles".to_string(),
            designation: "Accountant".to_string(),
            work_experience: 8,
            monthly_income: Money::from_rupees(65_000),
            annual_income: Money::from_rupees(780_000),
        },
        identification_documents: vec![],
        credit_score: 742,
        kyc_status: "VERIFIED".to_string(),
        risk_profile: "LOW".to_string(),
        account_status: "ACTIVE".to_string(),
        fatca_status: false,
        pep_status: false,
        customer_notes: None,
        photo_url: None,
        created_at: Utc.with_ymd_and_hms(2023, 6, 1, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
        created_by: "admin".to_string(),
    }
}

fn main() {
    let session = EditSession::open(customer());
    let mut live = session.original().clone();

    // phone re-entered without the stored country code: not a change
    live.phone_number = "9876543210".to_string();
    println!("submit enabled: {}", session.can_submit(&live));

    // one address sub-field marks the whole block changed
    live.current_address.postal_code = "411002".to_string();
    let changes = session.changes(&live);
    println!("submit enabled: {}", changes.has_changes());
    println!("changed: {:?}", changes.fields().collect::<Vec<_>>());
    assert!(changes.contains(CustomerField::CurrentAddress));

    // the PATCH body carries only the changed fields, wire-named
    let payload = changes.into_payload();
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
}
