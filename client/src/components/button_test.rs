use super::*;

#[test]
fn default_button_is_primary_medium() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default()), "btn btn--primary btn--md");
}

#[test]
fn small_outline_button_classes() {
    assert_eq!(button_class(ButtonVariant::Outline, ButtonSize::Small), "btn btn--outline btn--sm");
}

#[test]
fn ghost_large_button_classes() {
    assert_eq!(button_class(ButtonVariant::Ghost, ButtonSize::Large), "btn btn--ghost btn--lg");
}
