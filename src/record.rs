//! Match records and their derived outcome.
//!
//! A record is one row of the season schedule:
//!
//! ```text
//! competition, date, time, home team, away team, home goals, away goals
//! ```

use crate::error::StatsError;
use std::fmt;

/// Number of comma-separated fields in a data line.
pub const FIELD_COUNT: usize = 7;

/// Result of a match from the home team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
    Draw,
}

impl Outcome {
    /// Classify a score line.
    pub fn from_score(home_goals: u32, away_goals: u32) -> Self {
        if home_goals > away_goals {
            Outcome::Won
        } else if away_goals > home_goals {
            Outcome::Lost
        } else {
            Outcome::Draw
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Outcome::Won => "WON",
            Outcome::Lost => "LOST",
            Outcome::Draw => "DRAW",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One game of the season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub competition_info: String,
    pub date: String,
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchRecord {
    /// Parse a single comma-separated data line.
    ///
    /// `line_no` is only used to label errors.
    pub fn parse_line(line: &str, line_no: u64) -> Result<Self, StatsError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes());

        let mut fields = csv::StringRecord::new();
        match reader.read_record(&mut fields) {
            Ok(true) => Self::from_csv_record(&fields, line_no),
            Ok(false) => Err(StatsError::malformed(line_no, "empty line")),
            Err(e) => Err(StatsError::malformed(line_no, e.to_string())),
        }
    }

    /// Build a record from already split fields. Surrounding whitespace in
    /// each field is ignored.
    pub fn from_csv_record(fields: &csv::StringRecord, line_no: u64) -> Result<Self, StatsError> {
        if fields.len() != FIELD_COUNT {
            return Err(StatsError::malformed(
                line_no,
                format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
            ));
        }

        let text = |idx: usize| fields[idx].trim().to_string();
        let home_team = text(3);
        let away_team = text(4);
        if home_team.is_empty() {
            return Err(StatsError::malformed(line_no, "home team is empty"));
        }
        if away_team.is_empty() {
            return Err(StatsError::malformed(line_no, "away team is empty"));
        }

        Ok(MatchRecord {
            competition_info: text(0),
            date: text(1),
            time: text(2),
            home_team,
            away_team,
            home_goals: parse_goals(&fields[5], "home goals", line_no)?,
            away_goals: parse_goals(&fields[6], "away goals", line_no)?,
        })
    }

    /// Widened so that no accepted score line can overflow.
    pub fn total_goals(&self) -> u64 {
        u64::from(self.home_goals) + u64::from(self.away_goals)
    }

    /// Absolute difference between the two scores.
    pub fn goal_difference(&self) -> u32 {
        self.home_goals.abs_diff(self.away_goals)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_score(self.home_goals, self.away_goals)
    }
}

fn parse_goals(field: &str, name: &str, line_no: u64) -> Result<u32, StatsError> {
    let value = field.trim();
    value
        .parse::<u32>()
        .map_err(|_| StatsError::malformed(line_no, format!("{name} '{value}' is not a number")))
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {} | {} {}:{} {}",
            self.competition_info,
            self.date,
            self.time,
            self.home_team,
            self.home_goals,
            self.away_goals,
            self.away_team
        )
    }
}

#[cfg(test)]
pub(crate) fn game(home: &str, away: &str, home_goals: u32, away_goals: u32) -> MatchRecord {
    MatchRecord {
        competition_info: "BUNDESLIGA 1. Spieltag".to_string(),
        date: "16.08.2019".to_string(),
        time: "20:30".to_string(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_goals,
        away_goals,
    }
}
