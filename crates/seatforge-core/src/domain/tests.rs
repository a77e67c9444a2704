//! Tests for the domain types.

use super::*;

#[test]
fn test_seat_coord_and_attributes() {
    let seat = Seat::new("S1", 3, 4, Position::Aisle, Orientation::Backward);
    assert_eq!(seat.coord().x, 3);
    assert_eq!(seat.coord().y, 4);
    assert!(!seat.is_window());
    assert!(!seat.is_forward());
    assert_eq!(seat.id.as_str(), "S1");
}

#[test]
fn test_seat_preference_accepts() {
    let window = Seat::new("W", 0, 0, Position::Window, Orientation::Backward);
    let aisle = Seat::new("A", 1, 0, Position::Aisle, Orientation::Forward);

    assert!(SeatPreference::Window.accepts(&window));
    assert!(!SeatPreference::Window.accepts(&aisle));
    assert!(SeatPreference::Forward.accepts(&aisle));
    assert!(!SeatPreference::Forward.accepts(&window));
}

#[test]
fn test_position_initial() {
    assert_eq!(Position::Window.initial(), 'W');
    assert_eq!(Position::Aisle.initial(), 'A');
    assert_eq!(Position::Middle.initial(), 'M');
}

#[test]
fn test_passenger_builder() {
    let barrie = Passenger::new(9, "Barrie")
        .with(Trait::PlaysMusic)
        .hating([8]);

    assert_eq!(barrie.id, PassengerId(9));
    assert!(barrie.traits.plays_music);
    assert!(barrie.is_noisy());
    assert_eq!(barrie.related(Relation::Hates), &[PassengerId(8)]);
    assert!(barrie.related(Relation::MustBeNear).is_empty());
}

#[test]
fn test_traits_default_to_false() {
    let traits = Traits::default();
    assert_eq!(traits.iter().count(), 0);
    for t in Trait::ALL {
        assert!(!traits.has(*t));
    }
}

#[test]
fn test_traits_set_and_iter() {
    let mut traits = Traits::default();
    traits.set(Trait::NeedsQuiet, true);
    traits.set(Trait::IsChild, true);

    let set: Vec<_> = traits.iter().collect();
    assert_eq!(set, vec![Trait::IsChild, Trait::NeedsQuiet]);

    traits.set(Trait::IsChild, false);
    assert!(!traits.is_child);
}

#[test]
fn test_trait_names_match_fields() {
    assert_eq!(Trait::ALL.len(), 15);
    assert_eq!(Trait::WantsToBeNearChild.name(), "wants_to_be_near_child");
    assert_eq!(Trait::HatesBadSmells.name(), "hates_bad_smells");
}
