//! Named inputs for the season queries.

pub const DEFAULT_TEAM: &str = "FC Bayern Muenchen";
pub const DEFAULT_COMPETITION_PREFIX: &str = "BUNDESLIGA";
pub const DEFAULT_YEAR: &str = "2019";
pub const DEFAULT_MARGIN: u32 = 2;

/// Parameters shared by every query in a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// The team of interest for home/away queries.
    pub team: String,
    /// Competition label prefix to count.
    pub competition_prefix: String,
    /// Substring matched against the date of each game.
    pub year: String,
    /// Minimum goal difference for the away-margin check.
    pub margin: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            team: DEFAULT_TEAM.to_string(),
            competition_prefix: DEFAULT_COMPETITION_PREFIX.to_string(),
            year: DEFAULT_YEAR.to_string(),
            margin: DEFAULT_MARGIN,
        }
    }
}
