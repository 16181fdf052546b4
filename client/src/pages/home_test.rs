use std::collections::HashSet;

use super::*;

#[test]
fn each_role_has_its_own_title() {
    let titles: HashSet<_> = Role::ALL.into_iter().map(page_title).collect();
    assert_eq!(titles.len(), Role::ALL.len());
}

#[test]
fn default_title_is_the_catalog() {
    assert_eq!(page_title(Role::default()), "Детский Центр | курсы");
}
