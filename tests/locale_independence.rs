//! The canonical decimal form must not vary with the process locale.
//!
//! A German or French locale would render 1234567890 with grouping
//! separators ("1.234.567.890" / "1 234 567 890") in locale-aware
//! formatters. Account numbers must stay plain ASCII digits.

use bank_domain::AccountNo;
use serial_test::serial;

// Every test in this binary is #[serial]: no other thread touches the
// environment while these mutate it.
fn with_locale(locale: &str) -> AccountNo {
    unsafe {
        std::env::set_var("LC_ALL", locale);
        std::env::set_var("LC_NUMERIC", locale);
        std::env::set_var("LANG", locale);
    }
    AccountNo::from_number(Some(1_234_567_890)).unwrap()
}

#[test]
#[serial]
fn rendering_ignores_german_locale() {
    let no = with_locale("de_DE.UTF-8");
    assert_eq!(no.to_string(), "1234567890");
}

#[test]
#[serial]
fn rendering_ignores_french_locale() {
    let no = with_locale("fr_FR.UTF-8");
    assert_eq!(no.to_string(), "1234567890");
}

#[test]
#[serial]
fn parsing_ignores_locale() {
    let _ = with_locale("de_DE.UTF-8");
    let no = AccountNo::from_text(Some("1234567890")).unwrap();
    assert_eq!(no.as_i64(), 1_234_567_890);

    // Locale-style grouped input is still rejected.
    assert!(AccountNo::from_text(Some("1.234.567.890")).is_err());
}
