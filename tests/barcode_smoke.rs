use boleto::{Bank, Boleto, BoletoError, Issuer};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn itau_issuer() -> Issuer {
    Issuer {
        agency: 1234,
        account: 56789,
        wallet: 175,
        our_number: 12_345_678,
        ..Issuer::default()
    }
}

#[test]
fn itau_reference_slip() {
    let slip = Boleto::builder()
        .with_amount(Decimal::new(100_000, 2)) // 1000.00
        .with_due_date(date(2024, 1, 1))
        .with_issuer(itau_issuer())
        .build()
        .unwrap();

    let barcode = Bank::Itau.encode_barcode(&slip).unwrap();
    assert_eq!(barcode.as_str().len(), 44);
    assert!(barcode.as_str().starts_with("34191"));
    assert_eq!(
        barcode.as_str(),
        "34191958200001000001751234567851234567897000"
    );
    assert_eq!(barcode.maturity_factor(), "9582");
    assert_eq!(barcode.amount(), Decimal::new(100_000, 2));
    assert!(barcode.has_valid_check_digit());
}

#[test]
fn santander_reference_slip() {
    let slip = Boleto::builder()
        .with_amount(Decimal::new(219_589, 2)) // 2195.89
        .with_due_date(date(2024, 6, 10))
        .with_issuer(Issuer {
            agency_code: 1_234_567,
            our_number: 566_612_457_800,
            wallet: 102,
            ..Issuer::default()
        })
        .build()
        .unwrap();

    let barcode = Bank::Santander.encode_barcode(&slip).unwrap();
    assert_eq!(
        barcode.as_str(),
        "03395974300002195899123456705666124578000102"
    );
    assert!(barcode.has_valid_check_digit());
    assert_eq!(barcode.bank_code(), Bank::Santander.registry_code());
}

#[test]
fn amount_wider_than_ten_digits_is_rejected() {
    let slip = Boleto::builder()
        .with_amount(Decimal::new(10_000_000_001, 2)) // 100000000.01
        .with_due_date(date(2024, 1, 1))
        .with_issuer(itau_issuer())
        .build()
        .unwrap();

    for bank in Bank::all() {
        assert!(matches!(
            bank.encode_barcode(&slip),
            Err(BoletoError::FieldOverflow { width: 10, .. })
        ));
    }
}

#[test]
fn due_date_past_the_window_is_rejected() {
    let slip = Boleto::builder()
        .with_amount(Decimal::ONE)
        .with_due_date(date(2025, 8, 4)) // epoch + 10163 days
        .with_issuer(itau_issuer())
        .build()
        .unwrap();

    assert_eq!(
        Bank::Itau.encode_barcode(&slip),
        Err(BoletoError::DateOutOfRange {
            date: date(2025, 8, 4)
        })
    );
}

#[test]
fn window_edges_encode() {
    for (due, factor) in [(date(1997, 10, 7), "0000"), (date(2025, 2, 21), "9999")] {
        let slip = Boleto::builder()
            .with_amount(Decimal::ONE)
            .with_due_date(due)
            .with_issuer(itau_issuer())
            .build()
            .unwrap();
        let barcode = Bank::Itau.encode_barcode(&slip).unwrap();
        assert_eq!(barcode.maturity_factor(), factor);
        assert_eq!(barcode.due_date(), due);
    }
}
