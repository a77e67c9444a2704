//! Built-in rosters.

use crate::domain::{Passenger, Trait};

pub fn london_level_1_1() -> Vec<Passenger> {
    vec![
        Passenger::new(1, "Mia")
            .with(Trait::SmellsBad)
            .with(Trait::PrefersWindow),
        Passenger::new(2, "Freia").with(Trait::SmellsCologne),
        Passenger::new(3, "Nisa").near([2]),
        Passenger::new(4, "Anastasiya")
            .with(Trait::IsChild)
            .with(Trait::PrefersForward)
            .with(Trait::WantsToBeNearChild),
        Passenger::new(5, "Li").near([1]).with(Trait::IsChild),
        Passenger::new(6, "Harper")
            .with(Trait::WantsToBeAlone)
            .with(Trait::HatesBadSmells)
            .with(Trait::HatesCologne),
        Passenger::new(7, "Oliver")
            .with(Trait::WantsToBeAlone)
            .with(Trait::PrefersWindow),
        Passenger::new(8, "Atlas").with(Trait::HatesBadSmells),
    ]
}

pub fn london_level_1_2() -> Vec<Passenger> {
    vec![
        Passenger::new(1, "Nat").with(Trait::PrefersWindow),
        Passenger::new(2, "Derry")
            .with(Trait::HatesMusic)
            .with(Trait::Talkative),
        Passenger::new(3, "Angela").with(Trait::HatesTalkative),
        Passenger::new(4, "Rei").with(Trait::NeedsQuiet),
        Passenger::new(5, "Maku").with(Trait::Talkative),
        Passenger::new(6, "Ryo").with(Trait::PlaysMusic),
        Passenger::new(7, "Samuel").with(Trait::HatesMusic),
        Passenger::new(8, "Tony")
            .with(Trait::PrefersForward)
            .with(Trait::PlaysMusic),
        Passenger::new(9, "Barrie")
            .hating([8])
            .with(Trait::PlaysMusic),
    ]
}

pub fn london_level_1_3() -> Vec<Passenger> {
    vec![
        Passenger::new(1, "Nico")
            .with(Trait::HatesBadSmells)
            .with(Trait::Talkative),
        Passenger::new(2, "Kai").with(Trait::HatesBadSmells),
        Passenger::new(3, "Dorian").with(Trait::HatesTalkative),
        Passenger::new(4, "Wyatt")
            .with(Trait::HatesBadSmells)
            .with(Trait::SmellsBad),
        Passenger::new(5, "David")
            .with(Trait::PlaysMusic)
            .with(Trait::SmellsBad)
            .with(Trait::HatesTalkative),
        Passenger::new(6, "Emma").with(Trait::NeedsQuiet),
        Passenger::new(7, "Teo").hating([9]),
        Passenger::new(8, "Victor").with(Trait::Talkative),
        Passenger::new(9, "Noah").near([4]),
    ]
}
