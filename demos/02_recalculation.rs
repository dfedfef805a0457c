/// recalculation pipeline - rate and amount entry without feedback loops
use loan_desk_rs::chrono::NaiveDate;
use loan_desk_rs::{EditedField, Money, Rate, TermsForm, TermsRecalculator};
use rust_decimal_macros::dec;

fn main() {
    let mut recalc = TermsRecalculator::new();
    let mut form = TermsForm {
        principal: Some(Money::from_rupees(100_000)),
        annual_rate_percent: Some(Rate::from_percent(dec!(18))),
        total_interest: None,
        term_months: Some(12),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
    };

    // user types the rate; the amount side is derived
    let terms = recalc.field_changed(&form, EditedField::AnnualRate).unwrap();
    form.total_interest = terms.total_interest;
    println!("rate 18% => interest {}", terms.total_interest.unwrap());

    // the bound amount input echoes the write; the guard swallows it
    assert!(recalc.field_changed(&form, EditedField::TotalInterest).is_none());
    println!("echo suppressed, no re-derivation");

    // a genuine amount edit flips the source of truth
    form.total_interest = Some(Money::from_rupees(9_000));
    let terms = recalc.field_changed(&form, EditedField::TotalInterest).unwrap();
    println!(
        "amount 9000 => rate {}",
        terms.annual_rate_percent.unwrap()
    );
}
