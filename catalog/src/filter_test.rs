use super::*;
use crate::course::COURSES;

fn ids(courses: &[&Course]) -> Vec<u32> {
    courses.iter().map(|c| c.id).collect()
}

fn filter(age: Option<AgeGroup>, weekday: Option<Weekday>) -> CatalogFilter {
    CatalogFilter { age, weekday }
}

// =============================================================
// filter_courses
// =============================================================

#[test]
fn unset_filter_returns_full_catalog_in_order() {
    let out = filter_courses(COURSES, &CatalogFilter::default());
    assert_eq!(ids(&out), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn age_seven_matches_only_labels_containing_seven() {
    let out = filter_courses(COURSES, &filter(Some(AgeGroup::SevenToEight), None));
    assert_eq!(ids(&out), vec![1]);
    assert_eq!(out[0].age, "7-10 лет");
}

#[test]
fn age_five_matches_two_courses_in_source_order() {
    let out = filter_courses(COURSES, &filter(Some(AgeGroup::FiveToSix), None));
    assert_eq!(ids(&out), vec![2, 5]);
}

#[test]
fn age_nine_matches_nothing_in_sample_catalog() {
    let out = filter_courses(COURSES, &filter(Some(AgeGroup::NineToTen), None));
    assert!(out.is_empty());
}

#[test]
fn age_eleven_matches_scratch_only() {
    let out = filter_courses(COURSES, &filter(Some(AgeGroup::ElevenToTwelve), None));
    assert_eq!(ids(&out), vec![6]);
}

#[test]
fn monday_matches_courses_with_monday_in_schedule() {
    let out = filter_courses(COURSES, &filter(None, Some(Weekday::Monday)));
    assert_eq!(ids(&out), vec![1, 3, 6]);
    assert!(out.iter().all(|c| c.schedule.contains("ПН")));
}

#[test]
fn friday_matches_chess_and_dance() {
    let out = filter_courses(COURSES, &filter(None, Some(Weekday::Friday)));
    assert_eq!(ids(&out), vec![3, 5]);
}

#[test]
fn both_selections_must_match() {
    let out = filter_courses(COURSES, &filter(Some(AgeGroup::FiveToSix), Some(Weekday::Wednesday)));
    assert_eq!(ids(&out), vec![5]);
}

#[test]
fn age_mismatch_excludes_course_for_every_weekday() {
    for weekday in std::iter::once(None).chain(Weekday::ALL.into_iter().map(Some)) {
        let out = filter_courses(COURSES, &filter(Some(AgeGroup::SevenToEight), weekday));
        assert!(out.iter().all(|c| c.age.contains('7')));
        assert!(!out.iter().any(|c| c.id == 2), "course 2 has no 7 in its age label");
    }
}

#[test]
fn filtering_is_idempotent() {
    let f = filter(Some(AgeGroup::FiveToSix), Some(Weekday::Tuesday));
    let once: Vec<Course> = filter_courses(COURSES, &f).into_iter().copied().collect();
    let twice = filter_courses(&once, &f);
    assert_eq!(ids(&twice), once.iter().map(|c| c.id).collect::<Vec<_>>());
}

#[test]
fn empty_catalog_yields_empty_result() {
    let out = filter_courses(&[], &filter(Some(AgeGroup::FiveToSix), None));
    assert!(out.is_empty());
}

// =============================================================
// Select values
// =============================================================

#[test]
fn parse_selection_maps_all_to_none() {
    assert_eq!(parse_selection::<AgeGroup>("all"), Ok(None));
    assert_eq!(parse_selection::<Weekday>("all"), Ok(None));
}

#[test]
fn parse_selection_reads_tokens() {
    assert_eq!(parse_selection::<AgeGroup>("11"), Ok(Some(AgeGroup::ElevenToTwelve)));
    assert_eq!(parse_selection::<Weekday>("ЧТ"), Ok(Some(Weekday::Thursday)));
}

#[test]
fn parse_selection_rejects_unknown_values() {
    assert_eq!(parse_selection::<AgeGroup>("3"), Err(ParseError::UnknownAge("3".to_owned())));
    assert_eq!(parse_selection::<Weekday>("СБ"), Err(ParseError::UnknownWeekday("СБ".to_owned())));
}

#[test]
fn selection_value_uses_all_for_none() {
    assert_eq!(selection_value(None), "all");
    assert_eq!(selection_value(Some(Weekday::Friday.token())), "ПТ");
}
