use std::collections::HashSet;

use super::*;

#[test]
fn catalog_has_six_courses() {
    assert_eq!(COURSES.len(), 6);
}

#[test]
fn course_ids_are_unique_and_ascending() {
    let ids: Vec<u32> = COURSES.iter().map(|c| c.id).collect();
    let unique: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn available_spots_never_exceed_capacity() {
    for course in COURSES {
        assert!(course.spots <= course.total_spots, "course {} overbooked", course.id);
    }
}

#[test]
fn nearly_full_threshold_is_five_spots() {
    let robotics = COURSES[0];
    let chess = COURSES[2];
    assert_eq!(robotics.spots, 8);
    assert!(!robotics.is_nearly_full());
    assert_eq!(chess.spots, 5);
    assert!(chess.is_nearly_full());
}
