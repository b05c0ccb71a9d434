use boleto::{Bank, Barcode, Boleto, BoletoError, Issuer, TypeableLine};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

const ITAU: &str = "34191958200001000001751234567851234567897000";
const SANTANDER: &str = "03395974300002195899123456705666124578000102";

#[test]
fn itau_blocks() {
    let line = TypeableLine::from_barcode(&Barcode::parse(ITAU).unwrap()).unwrap();
    assert_eq!(line.block1, "3419175124");
    assert_eq!(line.block2, "34567851232");
    assert_eq!(line.block3, "45678970000");
    assert_eq!(line.block4, "1");
    assert_eq!(line.block5, "95820000100000");
}

#[test]
fn santander_blocks() {
    let line = TypeableLine::from_barcode(&Barcode::parse(SANTANDER).unwrap()).unwrap();
    assert_eq!(line.block1, "0339912347");
    assert_eq!(line.block2, "56705666123");
    assert_eq!(line.block3, "45780001025");
    assert_eq!(line.block4, "5");
    assert_eq!(line.block5, "97430000219589");
}

#[test]
fn round_trip_law_for_encoded_slips() {
    let slip = Boleto::builder()
        .with_amount(Decimal::new(54_321, 2))
        .with_due_date(NaiveDate::from_ymd_opt(2020, 7, 15).unwrap())
        .with_issuer(Issuer {
            agency: 42,
            account: 91_827,
            wallet: 109,
            our_number: 87_654_321,
            agency_code: 7_654_321,
            ..Issuer::default()
        })
        .build()
        .unwrap();

    for bank in Bank::all() {
        let (barcode, line) = boleto::encode(*bank, &slip).unwrap();
        assert_eq!(line.reconstruct_barcode().unwrap(), barcode);
        assert_eq!(barcode.as_str().len(), 44);
    }
}

#[test]
fn malformed_input_is_rejected_before_composition() {
    assert_eq!(
        Barcode::parse("123"),
        Err(BoletoError::InvalidBarcodeLength { got: 3 })
    );
    assert!(matches!(
        Barcode::parse("3419195820000100000175123456785123456789700x"),
        Err(BoletoError::NonDigit { found: 'x', .. })
    ));
}

#[test]
fn display_grouping() {
    let line = TypeableLine::from_barcode(&Barcode::parse(SANTANDER).unwrap()).unwrap();
    assert_eq!(
        line.to_string(),
        "03399.12347 56705.666123 45780.001025 5 97430000219589"
    );
}
