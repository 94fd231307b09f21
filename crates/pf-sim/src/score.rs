//! Per-archetype score totals.

use pf_behavior::Archetype;

/// Cumulative score per archetype, as reported each tick.
///
/// # Aggregation rule
///
/// At the start of every tick the loop adds the *current total score* of
/// each agent standing on the base to its archetype's entry.  An agent that
/// lingers on the base for several ticks is therefore counted once per tick,
/// and an agent that delivers and leaves in the same step is not counted
/// until it returns.  The totals are a series for charting, not a ledger;
/// the base's delivery ledger is the authoritative record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    totals: [u64; 4],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, archetype: Archetype) -> u64 {
        self.totals[archetype.index()]
    }

    #[inline]
    pub fn add(&mut self, archetype: Archetype, amount: u64) {
        self.totals[archetype.index()] += amount;
    }

    /// `(archetype, total)` pairs in stepping order.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, u64)> + '_ {
        Archetype::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}
