//! Phase catalog and phase matching.

use alloc::vec::Vec;

use itertools::Itertools;

use crate::card::Card;
use crate::group::GroupKind;

/// Structural requirement of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requirement {
    /// Required set sizes, in order.
    pub sets: &'static [usize],
    /// Required run sizes, in order.
    pub runs: &'static [usize],
    /// Required number of cards of one color.
    pub same_color: Option<usize>,
}

impl Requirement {
    /// Creates a requirement.
    #[must_use]
    pub const fn new(
        sets: &'static [usize],
        runs: &'static [usize],
        same_color: Option<usize>,
    ) -> Self {
        Self {
            sets,
            runs,
            same_color,
        }
    }
}

/// A phase in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phase {
    /// Ordinal in the catalog (0-based).
    pub index: usize,
    /// Human-readable description.
    pub description: &'static str,
    /// What has to be laid down.
    pub requirement: Requirement,
}

/// The ten phases, in order.
pub const PHASES: [Phase; 10] = [
    Phase {
        index: 0,
        description: "2 sets of 3",
        requirement: Requirement::new(&[3, 3], &[], None),
    },
    Phase {
        index: 1,
        description: "1 set of 3 + 1 run of 4",
        requirement: Requirement::new(&[3], &[4], None),
    },
    Phase {
        index: 2,
        description: "1 set of 4 + 1 run of 4",
        requirement: Requirement::new(&[4], &[4], None),
    },
    Phase {
        index: 3,
        description: "1 run of 7",
        requirement: Requirement::new(&[], &[7], None),
    },
    Phase {
        index: 4,
        description: "1 run of 8",
        requirement: Requirement::new(&[], &[8], None),
    },
    Phase {
        index: 5,
        description: "1 run of 9",
        requirement: Requirement::new(&[], &[9], None),
    },
    Phase {
        index: 6,
        description: "2 sets of 4",
        requirement: Requirement::new(&[4, 4], &[], None),
    },
    Phase {
        index: 7,
        description: "7 cards of one color",
        requirement: Requirement::new(&[], &[], Some(7)),
    },
    Phase {
        index: 8,
        description: "1 set of 5 + 1 set of 2",
        requirement: Requirement::new(&[5, 2], &[], None),
    },
    Phase {
        index: 9,
        description: "1 set of 5 + 1 set of 3",
        requirement: Requirement::new(&[5, 3], &[], None),
    },
];

/// Returns the phase at `index`, or `None` past the last phase.
#[must_use]
pub fn phase(index: usize) -> Option<&'static Phase> {
    PHASES.get(index)
}

/// Groups laid down to complete a phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaidDown {
    /// Sets, in requirement order.
    pub sets: Vec<Vec<Card>>,
    /// Runs, in requirement order.
    pub runs: Vec<Vec<Card>>,
    /// Same-color groups.
    pub colors: Vec<Vec<Card>>,
}

impl LaidDown {
    /// Returns the groups of the given kind.
    #[must_use]
    pub fn groups(&self, kind: GroupKind) -> &[Vec<Card>] {
        match kind {
            GroupKind::Set => &self.sets,
            GroupKind::Run => &self.runs,
            GroupKind::Color => &self.colors,
        }
    }

    pub(crate) const fn groups_mut(&mut self, kind: GroupKind) -> &mut Vec<Vec<Card>> {
        match kind {
            GroupKind::Set => &mut self.sets,
            GroupKind::Run => &mut self.runs,
            GroupKind::Color => &mut self.colors,
        }
    }

    /// Returns every laid-down card.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.sets
            .iter()
            .chain(&self.runs)
            .chain(&self.colors)
            .flatten()
    }

    /// Returns the number of laid-down cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards().count()
    }

    /// Returns whether nothing has been laid down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finds the first `size`-card combination of `pool` that forms a `kind`
/// group, enumerating combinations in pool order.
fn find_group(pool: &[Card], size: usize, kind: GroupKind) -> Option<Vec<Card>> {
    pool.iter()
        .copied()
        .combinations(size)
        .find(|candidate| kind.accepts(candidate))
}

/// Takes one group per entry of `sizes` out of `pool`, greedily.
fn take_groups(
    pool: &mut Vec<Card>,
    sizes: &[usize],
    kind: GroupKind,
) -> Option<Vec<Vec<Card>>> {
    let mut groups = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let group = find_group(pool, size, kind)?;
        pool.retain(|card| !group.iter().any(|taken| taken.id == card.id));
        groups.push(group);
    }
    Some(groups)
}

/// Organizes `cards` into the groups `requirement` asks for.
///
/// Sets are taken first, then runs from the cards the sets left over, each
/// requirement size satisfied by the first qualifying combination in card
/// order. Earlier picks are never revisited, so a hand that only works with a
/// different earlier pick is rejected. A same-color requirement is met by all
/// remaining cards at once. Cards not needed by any group are left out of the
/// result.
#[must_use]
pub fn organize(cards: &[Card], requirement: &Requirement) -> Option<LaidDown> {
    let mut pool = cards.to_vec();

    let sets = take_groups(&mut pool, requirement.sets, GroupKind::Set)?;
    let runs = take_groups(&mut pool, requirement.runs, GroupKind::Run)?;

    let colors = match requirement.same_color {
        Some(count) if pool.len() >= count && GroupKind::Color.accepts(&pool) => {
            alloc::vec![pool]
        }
        Some(_) => return None,
        None => Vec::new(),
    };

    Some(LaidDown { sets, runs, colors })
}

/// Returns whether `cards` satisfy `requirement`.
///
/// Always agrees with [`organize`].
#[must_use]
pub fn can_complete_phase(cards: &[Card], requirement: &Requirement) -> bool {
    organize(cards, requirement).is_some()
}
