//! Mock records shown on the parent, teacher, and admin dashboards.
//!
//! DESIGN
//! ======
//! These are display literals with no identity or lifecycle. Totals and
//! headline figures are stored exactly as published and are never derived
//! from the itemized rows next to them, even where the two disagree
//! (the admin headline income is `224,000 ₽` while the finance tab lists
//! `235,800 ₽`).

use crate::course::{COURSES, Course};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

// =============================================================================
// SHARED
// =============================================================================

/// What a summary card counts. The client maps this to an icon and accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    Courses,
    Students,
    Teachers,
    Salary,
    Income,
}

/// A headline figure card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub kind: StatKind,
    pub title: &'static str,
    pub value: &'static str,
    pub note: Option<&'static str>,
}

// =============================================================================
// PARENT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentProfile {
    pub name: &'static str,
    pub age: &'static str,
    pub parent: &'static str,
    pub phone: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LessonBalance {
    pub remaining: &'static str,
    pub paid_until: &'static str,
}

/// Attendance outcome of one lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Upcoming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttendanceRow {
    pub date: &'static str,
    pub course: &'static str,
    pub time: &'static str,
    pub status: AttendanceStatus,
    /// Excuse recorded for an absence, if any.
    pub reason: Option<&'static str>,
}

pub static STUDENT_PROFILE: StudentProfile = StudentProfile {
    name: "Иван Петров",
    age: "9 лет",
    parent: "Петрова Мария",
    phone: "+7 (999) 123-45-67",
};

pub static LESSON_BALANCE: LessonBalance = LessonBalance {
    remaining: "8 занятий",
    paid_until: "Оплачено до 15 марта 2024",
};

pub static ACTIVE_COURSES: &[&str] = &["🤖 Робототехника", "💻 Программирование"];

pub static ATTENDANCE: &[AttendanceRow] = &[
    AttendanceRow {
        date: "4 марта (ПН)",
        course: "Робототехника",
        time: "16:00-17:30",
        status: AttendanceStatus::Present,
        reason: None,
    },
    AttendanceRow {
        date: "5 марта (ВТ)",
        course: "Программирование",
        time: "17:30-19:00",
        status: AttendanceStatus::Present,
        reason: None,
    },
    AttendanceRow {
        date: "6 марта (СР)",
        course: "Робототехника",
        time: "16:00-17:30",
        status: AttendanceStatus::Absent,
        reason: Some("Болезнь (справка)"),
    },
    AttendanceRow {
        date: "8 марта (ПТ)",
        course: "Программирование",
        time: "17:30-19:00",
        status: AttendanceStatus::Upcoming,
        reason: None,
    },
];

// =============================================================================
// TEACHER
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeacherLesson {
    pub date: &'static str,
    pub course: &'static str,
    pub lesson: &'static str,
    pub time: &'static str,
    pub students: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentProgress {
    pub name: &'static str,
    pub course: &'static str,
    pub paid: bool,
    pub attendance: &'static str,
}

pub static TEACHER_STATS: &[StatCard] = &[
    StatCard {
        kind: StatKind::Courses,
        title: "Мои курсы",
        value: "2 курса",
        note: Some("Робототехника, Программирование"),
    },
    StatCard {
        kind: StatKind::Students,
        title: "Учеников",
        value: "18 человек",
        note: Some("Всего в группах"),
    },
    StatCard {
        kind: StatKind::Salary,
        title: "Зарплата (март)",
        value: "45,000 ₽",
        note: Some("За 12 проведенных занятий"),
    },
];

pub static TEACHER_LESSONS: &[TeacherLesson] = &[
    TeacherLesson {
        date: "ПН 4 марта",
        course: "Робототехника",
        lesson: "Урок 8",
        time: "16:00-17:30",
        students: 10,
    },
    TeacherLesson {
        date: "СР 6 марта",
        course: "Робототехника",
        lesson: "Урок 9",
        time: "16:00-17:30",
        students: 10,
    },
    TeacherLesson {
        date: "СР 6 марта",
        course: "Программирование",
        lesson: "Урок 12",
        time: "17:30-19:00",
        students: 8,
    },
];

pub static TEACHER_STUDENTS: &[StudentProgress] = &[
    StudentProgress { name: "Иван Петров", course: "Робототехника", paid: true, attendance: "95%" },
    StudentProgress { name: "Анна Смирнова", course: "Робототехника", paid: true, attendance: "88%" },
    StudentProgress { name: "Дмитрий Козлов", course: "Программирование", paid: false, attendance: "100%" },
];

// =============================================================================
// ADMIN
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudentAccount {
    pub name: &'static str,
    pub courses: u32,
    /// Prepaid lessons left.
    pub balance: u32,
    pub parent: &'static str,
    pub phone: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaffMember {
    pub name: &'static str,
    pub courses: &'static [&'static str],
    /// Rubles paid per student.
    pub rate: u32,
    /// March salary in rubles.
    pub salary: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IncomeRow {
    pub course: &'static str,
    pub amount: u32,
    pub students: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpenseRow {
    pub item: &'static str,
    pub amount: u32,
}

/// Monthly finance report. The totals are published figures, not sums.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinanceReport {
    pub period: &'static str,
    pub income: &'static [IncomeRow],
    pub expenses: &'static [ExpenseRow],
    pub income_total: u32,
    pub expense_total: u32,
    pub profit: u32,
}

pub static ADMIN_STATS: &[StatCard] = &[
    StatCard { kind: StatKind::Courses, title: "Курсы", value: "6", note: None },
    StatCard { kind: StatKind::Students, title: "Учеников", value: "64", note: None },
    StatCard { kind: StatKind::Teachers, title: "Педагогов", value: "5", note: None },
    StatCard { kind: StatKind::Income, title: "Доход (март)", value: "224,000 ₽", note: None },
];

pub static ADMIN_STUDENTS: &[StudentAccount] = &[
    StudentAccount {
        name: "Иван Петров",
        courses: 2,
        balance: 8,
        parent: "Петрова М.",
        phone: "+7 999 123-45-67",
    },
    StudentAccount {
        name: "Анна Смирнова",
        courses: 1,
        balance: 4,
        parent: "Смирнов А.",
        phone: "+7 999 234-56-78",
    },
    StudentAccount {
        name: "Дмитрий Козлов",
        courses: 2,
        balance: 0,
        parent: "Козлова Е.",
        phone: "+7 999 345-67-89",
    },
];

pub static ADMIN_TEACHERS: &[StaffMember] = &[
    StaffMember { name: "Иванов Петр", courses: &["Робототехника", "Программирование"], rate: 350, salary: 45_000 },
    StaffMember { name: "Смирнова Анна", courses: &["Рисование"], rate: 300, salary: 28_000 },
    StaffMember { name: "Козлов Дмитрий", courses: &["Шахматы"], rate: 280, salary: 32_000 },
];

pub static MARCH_FINANCE: FinanceReport = FinanceReport {
    period: "март 2024",
    income: &[
        IncomeRow { course: "Робототехника", amount: 70_000, students: 10 },
        IncomeRow { course: "Программирование", amount: 60_800, students: 8 },
        IncomeRow { course: "Рисование", amount: 28_000, students: 10 },
        IncomeRow { course: "Шахматы", amount: 45_000, students: 15 },
        IncomeRow { course: "Английский", amount: 32_000, students: 8 },
    ],
    expenses: &[
        ExpenseRow { item: "Зарплата педагогов", amount: 145_000 },
        ExpenseRow { item: "Аренда помещения", amount: 50_000 },
        ExpenseRow { item: "Оборудование и материалы", amount: 15_000 },
        ExpenseRow { item: "Коммунальные услуги", amount: 8000 },
        ExpenseRow { item: "Прочие расходы", amount: 7000 },
    ],
    income_total: 235_800,
    expense_total: 225_000,
    profit: 10_800,
};

/// Courses listed on the admin "Courses" tab: the first three of the catalog.
#[must_use]
pub fn managed_courses() -> &'static [Course] {
    &COURSES[..3]
}
