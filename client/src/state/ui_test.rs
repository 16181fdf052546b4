use super::*;

// =============================================================
// AdminTab
// =============================================================

#[test]
fn admin_tab_default_is_courses() {
    assert_eq!(AdminTab::default(), AdminTab::Courses);
}

#[test]
fn admin_tab_strip_starts_with_default() {
    assert_eq!(AdminTab::ALL[0], AdminTab::default());
}

#[test]
fn admin_tab_variants_are_distinct() {
    for (i, a) in AdminTab::ALL.iter().enumerate() {
        for (j, b) in AdminTab::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
