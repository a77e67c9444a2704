//! Passenger types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier of a passenger within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PassengerId(pub u32);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PassengerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The two relation lists a passenger carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Rivalry: the pair must never sit next to each other.
    Hates,
    /// Grouping: the pair must sit next to each other.
    MustBeNear,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Hates => write!(f, "hates"),
            Relation::MustBeNear => write!(f, "must_be_near"),
        }
    }
}

/// Generates the [`Trait`] enum and the [`Traits`] flag set from one list,
/// keeping the two in lockstep.
macro_rules! passenger_traits {
    ($($(#[$doc:meta])* $variant:ident => $field:ident,)+) => {
        /// A boolean trait a passenger may carry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Trait {
            $($(#[$doc])* $variant,)+
        }

        impl Trait {
            /// Every trait, in declaration order.
            pub const ALL: &'static [Trait] = &[$(Trait::$variant,)+];

            /// The snake_case field name of this trait.
            pub fn name(self) -> &'static str {
                match self {
                    $(Trait::$variant => stringify!($field),)+
                }
            }
        }

        /// The full set of boolean traits of a passenger. All default to false.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
        pub struct Traits {
            $($(#[$doc])* pub $field: bool,)+
        }

        impl Traits {
            /// Returns whether the given trait is set.
            pub fn has(&self, t: Trait) -> bool {
                match t {
                    $(Trait::$variant => self.$field,)+
                }
            }

            /// Sets or clears the given trait.
            pub fn set(&mut self, t: Trait, value: bool) {
                match t {
                    $(Trait::$variant => self.$field = value,)+
                }
            }
        }
    };
}

passenger_traits! {
    IsChild => is_child,
    /// Nobody may sit directly next to this passenger.
    WantsToBeAlone => wants_to_be_alone,
    SmellsBad => smells_bad,
    SmellsCologne => smells_cologne,
    HatesBadSmells => hates_bad_smells,
    HatesCologne => hates_cologne,
    PrefersWindow => prefers_window,
    PrefersForward => prefers_forward,
    DislikesChildren => dislikes_children,
    /// Must sit directly next to some child.
    WantsToBeNearChild => wants_to_be_near_child,
    /// Must sit directly next to another talkative passenger.
    Talkative => talkative,
    HatesTalkative => hates_talkative,
    PlaysMusic => plays_music,
    HatesMusic => hates_music,
    /// Cannot be within nuisance range of talk or music.
    NeedsQuiet => needs_quiet,
}

impl Traits {
    /// Returns the set traits, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Trait> + '_ {
        Trait::ALL.iter().copied().filter(|t| self.has(*t))
    }
}

/// A passenger to be seated.
///
/// Relation lists are stored as given. They are directional here and only
/// become symmetric when the model builder indexes them.
///
/// # Example
///
/// ```
/// use seatforge_core::{Passenger, Trait};
///
/// let mia = Passenger::new(1, "Mia")
///     .with(Trait::SmellsBad)
///     .with(Trait::PrefersWindow);
/// let nisa = Passenger::new(3, "Nisa").near([2]);
///
/// assert!(mia.traits.smells_bad);
/// assert_eq!(nisa.must_be_near.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub traits: Traits,
    #[cfg_attr(feature = "serde", serde(default))]
    pub must_be_near: Vec<PassengerId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hates: Vec<PassengerId>,
}

impl Passenger {
    /// Creates a passenger with no traits and no relations.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: PassengerId(id),
            name: name.into(),
            traits: Traits::default(),
            must_be_near: Vec::new(),
            hates: Vec::new(),
        }
    }

    /// Sets a trait.
    pub fn with(mut self, t: Trait) -> Self {
        self.traits.set(t, true);
        self
    }

    /// Adds passengers to the `must_be_near` group.
    pub fn near(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.must_be_near.extend(ids.into_iter().map(PassengerId));
        self
    }

    /// Adds passengers to the `hates` list.
    pub fn hating(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.hates.extend(ids.into_iter().map(PassengerId));
        self
    }

    /// Returns the ids listed under the given relation.
    pub fn related(&self, relation: Relation) -> &[PassengerId] {
        match relation {
            Relation::Hates => &self.hates,
            Relation::MustBeNear => &self.must_be_near,
        }
    }

    /// True if the passenger produces talk or music.
    pub fn is_noisy(&self) -> bool {
        self.traits.talkative || self.traits.plays_music
    }
}
