//! Read-only queries over a season snapshot.
//!
//! Every function borrows the records and returns a fresh result; none of
//! them mutate or retain the input. Orderings that depend on "first seen"
//! are derived from the slice order, never from a collection's iteration
//! order.

use crate::record::{MatchRecord, Outcome};
use std::collections::{BTreeMap, HashSet};

/// Records split by whether a given team played at home.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomePartition<'a> {
    pub home: Vec<&'a MatchRecord>,
    pub other: Vec<&'a MatchRecord>,
}

/// Records grouped by home-team outcome. All three groups always exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeGroups<'a> {
    pub won: Vec<&'a MatchRecord>,
    pub lost: Vec<&'a MatchRecord>,
    pub draw: Vec<&'a MatchRecord>,
}

impl<'a> OutcomeGroups<'a> {
    pub fn get(&self, outcome: Outcome) -> &[&'a MatchRecord] {
        match outcome {
            Outcome::Won => &self.won,
            Outcome::Lost => &self.lost,
            Outcome::Draw => &self.draw,
        }
    }

    pub fn len(&self) -> usize {
        self.won.len() + self.lost.len() + self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Count records whose competition label starts with `prefix` (case-sensitive).
pub fn count_by_competition_prefix(records: &[MatchRecord], prefix: &str) -> usize {
    records
        .iter()
        .filter(|r| r.competition_info.starts_with(prefix))
        .count()
}

/// Split records into games where `team` is the home side and all others.
pub fn partition_by_home_team<'a>(records: &'a [MatchRecord], team: &str) -> HomePartition<'a> {
    let (home, other) = records.iter().partition(|r| r.home_team == team);
    HomePartition { home, other }
}

/// Group records by outcome, keeping file order within each group.
pub fn group_by_outcome(records: &[MatchRecord]) -> OutcomeGroups<'_> {
    let mut groups = OutcomeGroups::default();
    for record in records {
        match record.outcome() {
            Outcome::Won => groups.won.push(record),
            Outcome::Lost => groups.lost.push(record),
            Outcome::Draw => groups.draw.push(record),
        }
    }
    groups
}

/// Mean of total goals per game. `0.0` when there are no games.
pub fn average_goals_per_game(records: &[MatchRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: u64 = records.iter().map(MatchRecord::total_goals).sum();
    total as f64 / records.len() as f64
}

/// Count games `team` won at home.
pub fn count_won_at_home(records: &[MatchRecord], team: &str) -> usize {
    records
        .iter()
        .filter(|r| r.home_team == team && r.home_goals > r.away_goals)
        .count()
}

/// The game with the fewest total goals; the earliest one on ties.
pub fn min_goals_game(records: &[MatchRecord]) -> Option<&MatchRecord> {
    // `min_by_key` returns the first of several equal minima.
    records.iter().min_by_key(|r| r.total_goals())
}

/// Same as [`min_goals_game`], computed with a stable sort.
pub fn min_goals_game_sorted(records: &[MatchRecord]) -> Option<&MatchRecord> {
    let mut sorted: Vec<&MatchRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.total_goals());
    sorted.first().copied()
}

/// Distinct kickoff times in first-seen order.
pub fn distinct_start_times(records: &[MatchRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.time.as_str())
        .filter(|time| seen.insert(*time))
        .collect()
}

/// Whether any away game of `team` ended with a goal difference of at least
/// `margin`, whichever side won.
pub fn any_away_win_by_margin(records: &[MatchRecord], team: &str, margin: u32) -> bool {
    records
        .iter()
        .filter(|r| r.away_team == team)
        .any(|r| r.goal_difference() >= margin)
}

/// Games whose date contains `year`, grouped by home team and flattened.
///
/// Groups come out in ascending home-team order; each group keeps file order.
pub fn flatten_grouped_by_year_and_home_team<'a>(
    records: &'a [MatchRecord],
    year: &str,
) -> Vec<&'a MatchRecord> {
    let mut by_home_team: BTreeMap<&str, Vec<&MatchRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.date.contains(year)) {
        by_home_team
            .entry(record.home_team.as_str())
            .or_default()
            .push(record);
    }
    by_home_team.into_values().flatten().collect()
}
