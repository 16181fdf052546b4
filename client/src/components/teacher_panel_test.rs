use super::*;

#[test]
fn paid_student_gets_default_badge() {
    assert_eq!(payment_badge(true), (BadgeVariant::Default, "Оплачено"));
}

#[test]
fn unpaid_student_gets_destructive_badge() {
    assert_eq!(payment_badge(false), (BadgeVariant::Destructive, "Не оплачено"));
}
