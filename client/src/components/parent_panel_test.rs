use super::*;

#[test]
fn present_lesson_shows_green_check() {
    let (variant, icon, caption) = attendance_badge(AttendanceStatus::Present);
    assert_eq!(variant, BadgeVariant::Success);
    assert_eq!(icon, IconName::Check);
    assert_eq!(caption, "Присутствовал");
}

#[test]
fn absent_lesson_is_destructive() {
    let (variant, icon, _) = attendance_badge(AttendanceStatus::Absent);
    assert_eq!(variant, BadgeVariant::Destructive);
    assert_eq!(icon, IconName::X);
}

#[test]
fn upcoming_lesson_is_outlined() {
    let (variant, icon, caption) = attendance_badge(AttendanceStatus::Upcoming);
    assert_eq!(variant, BadgeVariant::Outline);
    assert_eq!(icon, IconName::Clock);
    assert_eq!(caption, "Предстоит");
}
