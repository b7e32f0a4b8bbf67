use zemen_calendar::{Era, EthiopicDate, GregorianDate};
use zemen_locale::{AMHARIC, ENGLISH, full_date_from_gregorian, full_ethiopic_date};

#[test]
fn millennium_day_amharic() {
    // Meskerem 1, 2000 AM fell on Wednesday, September 12, 2007.
    let date = EthiopicDate::new(2000, 1, 1).unwrap();
    assert_eq!(
        full_ethiopic_date(date, Era::AmeteMihret, &AMHARIC),
        "ረቡዕ፣ መስከረም 1 ቀን 2000 ዓ/ም"
    );
}

#[test]
fn millennium_day_english() {
    let date = EthiopicDate::new(2000, 1, 1).unwrap();
    assert_eq!(
        full_ethiopic_date(date, Era::AmeteMihret, &ENGLISH),
        "Wednesday, Meskerem 1 2000 E.C."
    );
}

#[test]
fn amete_alem_suffix() {
    let date = EthiopicDate::new(7516, 4, 22).unwrap();
    let line = full_ethiopic_date(date, Era::AmeteAlem, &AMHARIC);
    assert!(line.ends_with("ዓ/ዓ"), "unexpected line: {line}");
    assert!(line.contains("7516"), "unexpected line: {line}");
}

#[test]
fn gregorian_direction() {
    assert_eq!(
        full_date_from_gregorian(GregorianDate::new(2024, 1, 1).unwrap(), &ENGLISH),
        "Monday, Tahsas 22 2016 E.C."
    );
}

#[test]
fn pagume_formats() {
    // Pagume 6, 2015 AM = September 11, 2023.
    let date = EthiopicDate::new(2015, 13, 6).unwrap();
    let line = full_ethiopic_date(date, Era::AmeteMihret, &ENGLISH);
    assert_eq!(line, "Monday, Pagume 6 2015 E.C.");
}
