use super::*;

// =============================================================
// Parent
// =============================================================

#[test]
fn only_absences_carry_a_reason() {
    for row in ATTENDANCE {
        match row.status {
            AttendanceStatus::Absent => assert!(row.reason.is_some()),
            AttendanceStatus::Present | AttendanceStatus::Upcoming => assert!(row.reason.is_none()),
        }
    }
}

#[test]
fn attendance_lists_four_lessons_ending_with_upcoming() {
    assert_eq!(ATTENDANCE.len(), 4);
    assert_eq!(ATTENDANCE[3].status, AttendanceStatus::Upcoming);
}

// =============================================================
// Teacher
// =============================================================

#[test]
fn teacher_stats_have_notes() {
    assert_eq!(TEACHER_STATS.len(), 3);
    assert!(TEACHER_STATS.iter().all(|s| s.note.is_some()));
}

#[test]
fn one_teacher_student_is_unpaid() {
    let unpaid: Vec<_> = TEACHER_STUDENTS.iter().filter(|s| !s.paid).map(|s| s.name).collect();
    assert_eq!(unpaid, vec!["Дмитрий Козлов"]);
}

// =============================================================
// Admin
// =============================================================

#[test]
fn managed_courses_are_first_three_of_catalog() {
    let ids: Vec<u32> = managed_courses().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn headline_income_is_kept_as_published() {
    let income = ADMIN_STATS.iter().find(|s| s.kind == StatKind::Income).map(|s| s.value);
    assert_eq!(income, Some("224,000 ₽"));
    assert_eq!(MARCH_FINANCE.income_total, 235_800);
}

#[test]
fn finance_totals_are_literal_fields() {
    assert_eq!(MARCH_FINANCE.expense_total, 225_000);
    assert_eq!(MARCH_FINANCE.profit, 10_800);
    assert_eq!(MARCH_FINANCE.income.len(), 5);
    assert_eq!(MARCH_FINANCE.expenses.len(), 5);
}

#[test]
fn zero_balance_student_is_present() {
    assert!(ADMIN_STUDENTS.iter().any(|s| s.balance == 0));
}

#[test]
fn staff_course_lists_are_non_empty() {
    for member in ADMIN_TEACHERS {
        assert!(!member.courses.is_empty(), "{} teaches nothing", member.name);
    }
    assert_eq!(ADMIN_TEACHERS[0].courses.join(", "), "Робототехника, Программирование");
}
