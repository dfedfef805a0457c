/// quick start - derive loan terms from a rate
use loan_desk_rs::chrono::NaiveDate;
use loan_desk_rs::{derive_end_date, derive_from_rate, Money, Rate};
use rust_decimal_macros::dec;

fn main() {
    // Rs 100,000 at 18% p.a. over 12 months
    let terms = derive_from_rate(
        Some(Money::from_rupees(100_000)),
        Some(Rate::from_percent(dec!(18))),
        Some(12),
    );

    println!("total interest:  {}", terms.total_interest.unwrap());
    println!("monthly:         {}", terms.monthly_interest.unwrap());
    println!("total repayable: {}", terms.total_repayable.unwrap());

    let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    println!("matures:         {}", derive_end_date(start, 12));
}
