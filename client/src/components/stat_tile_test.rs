use super::*;

#[test]
fn income_uses_money_accent() {
    assert_eq!(stat_accent(StatKind::Income), "stat__value--money");
    assert_eq!(stat_icon(StatKind::Income), IconName::DollarSign);
}

#[test]
fn teacher_and_salary_share_accent_but_not_icon() {
    assert_eq!(stat_accent(StatKind::Teachers), stat_accent(StatKind::Salary));
    assert_ne!(stat_icon(StatKind::Teachers), stat_icon(StatKind::Salary));
}
