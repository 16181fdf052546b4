//! Course records offered by the center.
//!
//! DESIGN
//! ======
//! The catalog is a `static` slice defined once for the process lifetime.
//! Labels are kept as the free text shown to visitors; the filter works on
//! that text directly instead of on parsed age ranges or schedules.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

/// A single offered class with schedule, price, and capacity metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    /// Age range label, e.g. `"7-10 лет"`. Matched by [`crate::AgeGroup`] tokens.
    pub age: &'static str,
    /// Weekday + time label, e.g. `"ПН, СР 16:00-17:30"`. Matched by [`crate::Weekday`] tokens.
    pub schedule: &'static str,
    pub price: &'static str,
    /// Places still available.
    pub spots: u32,
    pub total_spots: u32,
    pub emoji: &'static str,
    pub description: &'static str,
    pub teacher: &'static str,
    pub duration: &'static str,
    pub room: &'static str,
}

impl Course {
    /// Spots are shown as scarce once five or fewer remain.
    #[must_use]
    pub fn is_nearly_full(&self) -> bool {
        self.spots <= 5
    }
}

/// The full catalog in display order.
pub static COURSES: &[Course] = &[
    Course {
        id: 1,
        title: "Робототехника для начинающих",
        age: "7-10 лет",
        schedule: "ПН, СР 16:00-17:30",
        price: "3500 ₽/месяц",
        spots: 8,
        total_spots: 12,
        emoji: "🤖",
        description: "Изучаем основы робототехники и программирования",
        teacher: "Иванов Петр",
        duration: "1.5 часа",
        room: "Кабинет 201",
    },
    Course {
        id: 2,
        title: "Рисование и творчество",
        age: "5-8 лет",
        schedule: "ВТ, ЧТ 15:00-16:00",
        price: "2800 ₽/месяц",
        spots: 3,
        total_spots: 10,
        emoji: "🎨",
        description: "Развиваем творческие способности через искусство",
        teacher: "Смирнова Анна",
        duration: "1 час",
        room: "Кабинет 105",
    },
    Course {
        id: 3,
        title: "Шахматы для детей",
        age: "6-12 лет",
        schedule: "ПН, ПТ 17:00-18:00",
        price: "3000 ₽/месяц",
        spots: 5,
        total_spots: 15,
        emoji: "♟️",
        description: "Развиваем логическое мышление и стратегию",
        teacher: "Козлов Дмитрий",
        duration: "1 час",
        room: "Кабинет 302",
    },
    Course {
        id: 4,
        title: "Английский язык",
        age: "8-12 лет",
        schedule: "ВТ, ЧТ 16:30-18:00",
        price: "4000 ₽/месяц",
        spots: 2,
        total_spots: 8,
        emoji: "🇬🇧",
        description: "Изучаем английский в игровой форме",
        teacher: "Петрова Елена",
        duration: "1.5 часа",
        room: "Кабинет 203",
    },
    Course {
        id: 5,
        title: "Танцы и хореография",
        age: "5-10 лет",
        schedule: "СР, ПТ 15:00-16:30",
        price: "3200 ₽/месяц",
        spots: 4,
        total_spots: 12,
        emoji: "💃",
        description: "Развиваем пластику и координацию движений",
        teacher: "Новикова Мария",
        duration: "1.5 часа",
        room: "Зал 1",
    },
    Course {
        id: 6,
        title: "Программирование Scratch",
        age: "8-11 лет",
        schedule: "ПН, СР 17:30-19:00",
        price: "3800 ₽/месяц",
        spots: 6,
        total_spots: 10,
        emoji: "💻",
        description: "Создаем игры и анимации в Scratch",
        teacher: "Иванов Петр",
        duration: "1.5 часа",
        room: "Кабинет 201",
    },
];
