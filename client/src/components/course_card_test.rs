use catalog::COURSES;

use super::*;

#[test]
fn plenty_of_spots_uses_default_badge() {
    let robotics = &COURSES[0];
    assert_eq!(robotics.spots, 8);
    assert_eq!(spots_variant(robotics), BadgeVariant::Default);
}

#[test]
fn five_or_fewer_spots_uses_destructive_badge() {
    let chess = &COURSES[2];
    let english = &COURSES[3];
    assert_eq!(spots_variant(chess), BadgeVariant::Destructive);
    assert_eq!(spots_variant(english), BadgeVariant::Destructive);
}

#[test]
fn animation_delay_steps_by_tenths() {
    assert_eq!(animation_delay(0), "0.0s");
    assert_eq!(animation_delay(3), "0.3s");
    assert_eq!(animation_delay(12), "1.2s");
}
