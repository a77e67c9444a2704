//! Pairwise rule predicates.
//!
//! All predicates are symmetric in their two passengers.

use std::fmt;

use seatforge_core::Passenger;

/// A reason two passengers may not share nuisance range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nuisance {
    BadSmell,
    Cologne,
    Talk,
    Music,
    Quiet,
}

impl fmt::Display for Nuisance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Nuisance::BadSmell => "bad smell",
            Nuisance::Cologne => "cologne",
            Nuisance::Talk => "talk",
            Nuisance::Music => "music",
            Nuisance::Quiet => "quiet",
        };
        f.write_str(s)
    }
}

/// One direction of the nuisance check: does `listener` object to `source`?
fn nuisance_from(listener: &Passenger, source: &Passenger) -> Option<Nuisance> {
    let l = &listener.traits;
    let s = &source.traits;
    if l.hates_bad_smells && s.smells_bad {
        Some(Nuisance::BadSmell)
    } else if l.hates_cologne && s.smells_cologne {
        Some(Nuisance::Cologne)
    } else if l.hates_talkative && s.talkative {
        Some(Nuisance::Talk)
    } else if l.hates_music && s.plays_music {
        Some(Nuisance::Music)
    } else if l.needs_quiet && source.is_noisy() {
        Some(Nuisance::Quiet)
    } else {
        None
    }
}

/// The first nuisance conflict between the two passengers, in either direction.
pub fn nuisance(a: &Passenger, b: &Passenger) -> Option<Nuisance> {
    nuisance_from(a, b).or_else(|| nuisance_from(b, a))
}

/// Whether the pair must keep radius 1 free of each other.
///
/// Holds when either wants to be alone, one dislikes children and the
/// other is a child, or they are rivals.
pub fn neighbor_conflict(a: &Passenger, b: &Passenger, rivals: bool) -> bool {
    let (ta, tb) = (&a.traits, &b.traits);
    ta.wants_to_be_alone
        || tb.wants_to_be_alone
        || (ta.dislikes_children && tb.is_child)
        || (tb.dislikes_children && ta.is_child)
        || rivals
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_core::Trait;

    #[test]
    fn test_nuisance_is_symmetric() {
        let smelly = Passenger::new(1, "Mia").with(Trait::SmellsBad);
        let sensitive = Passenger::new(2, "Atlas").with(Trait::HatesBadSmells);

        assert_eq!(nuisance(&smelly, &sensitive), Some(Nuisance::BadSmell));
        assert_eq!(nuisance(&sensitive, &smelly), Some(Nuisance::BadSmell));
    }

    #[test]
    fn test_each_nuisance_kind() {
        let p = |t| Passenger::new(1, "x").with(t);

        assert_eq!(
            nuisance(&p(Trait::HatesCologne), &p(Trait::SmellsCologne)),
            Some(Nuisance::Cologne)
        );
        assert_eq!(
            nuisance(&p(Trait::HatesTalkative), &p(Trait::Talkative)),
            Some(Nuisance::Talk)
        );
        assert_eq!(
            nuisance(&p(Trait::HatesMusic), &p(Trait::PlaysMusic)),
            Some(Nuisance::Music)
        );
        assert_eq!(
            nuisance(&p(Trait::NeedsQuiet), &p(Trait::PlaysMusic)),
            Some(Nuisance::Quiet)
        );
        assert_eq!(
            nuisance(&p(Trait::Talkative), &p(Trait::NeedsQuiet)),
            Some(Nuisance::Quiet)
        );
    }

    #[test]
    fn test_no_nuisance_between_producers() {
        let a = Passenger::new(1, "a").with(Trait::SmellsBad);
        let b = Passenger::new(2, "b").with(Trait::PlaysMusic);
        assert_eq!(nuisance(&a, &b), None);
    }

    #[test]
    fn test_neighbor_conflict() {
        let plain = Passenger::new(1, "plain");
        let alone = Passenger::new(2, "alone").with(Trait::WantsToBeAlone);
        let child = Passenger::new(3, "child").with(Trait::IsChild);
        let grump = Passenger::new(4, "grump").with(Trait::DislikesChildren);

        assert!(!neighbor_conflict(&plain, &child, false));
        assert!(neighbor_conflict(&plain, &alone, false));
        assert!(neighbor_conflict(&alone, &plain, false));
        assert!(neighbor_conflict(&child, &grump, false));
        assert!(neighbor_conflict(&grump, &child, false));
        assert!(neighbor_conflict(&plain, &child, true));
    }
}
