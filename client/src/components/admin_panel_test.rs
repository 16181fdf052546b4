use super::*;

#[test]
fn empty_balance_is_red() {
    assert_eq!(balance_class(0), "text-danger");
}

#[test]
fn positive_balance_is_green() {
    assert_eq!(balance_class(1), "text-success");
    assert_eq!(balance_class(8), "text-success");
}

#[test]
fn rate_caption_is_per_student() {
    assert_eq!(rate_caption(350), "350 ₽/ученик");
}

#[test]
fn finance_totals_render_published_figures() {
    assert_eq!(format_rubles(MARCH_FINANCE.income_total), "235,800 ₽");
    assert_eq!(format_rubles(MARCH_FINANCE.expense_total), "225,000 ₽");
    assert_eq!(format_rubles(MARCH_FINANCE.profit), "10,800 ₽");
}
