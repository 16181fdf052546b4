use super::*;

#[test]
fn default_role_is_guest() {
    assert_eq!(Role::default(), Role::Guest);
}

#[test]
fn nav_order_starts_with_guest() {
    assert_eq!(Role::ALL[0], Role::Guest);
    assert_eq!(Role::ALL.len(), 4);
}

#[test]
fn display_matches_as_str() {
    for role in Role::ALL {
        assert_eq!(role.to_string(), role.as_str());
    }
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn nav_labels_are_distinct() {
    let labels: std::collections::HashSet<_> = Role::ALL.iter().map(|r| r.nav_label()).collect();
    assert_eq!(labels.len(), 4);
    assert_eq!(Role::Parent.nav_label(), "Личный кабинет");
}
