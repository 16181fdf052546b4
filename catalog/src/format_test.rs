use super::*;

#[test]
fn small_amounts_have_no_separator() {
    assert_eq!(format_rubles(0), "0 ₽");
    assert_eq!(format_rubles(350), "350 ₽");
}

#[test]
fn thousands_are_grouped() {
    assert_eq!(format_rubles(8000), "8,000 ₽");
    assert_eq!(format_rubles(45000), "45,000 ₽");
    assert_eq!(format_rubles(235_800), "235,800 ₽");
}

#[test]
fn millions_get_two_separators() {
    assert_eq!(format_rubles(1_234_567), "1,234,567 ₽");
}
