//! Renders every season summary, in a fixed order, into a [`Report`].

use crate::config::QueryConfig;
use crate::query;
use crate::record::{MatchRecord, Outcome};
use std::fmt;

/// One titled block of report output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    fn games(title: impl Into<String>, records: &[&MatchRecord]) -> Self {
        Self::new(title, records.iter().map(|r| r.to_string()).collect())
    }
}

/// All summaries of one run, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            writeln!(f, "*** {} ***", section.title)?;
            for line in &section.lines {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// Run every query against `records` and collect the results.
pub fn build_report(records: &[MatchRecord], config: &QueryConfig) -> Report {
    let team = config.team.as_str();
    let mut sections = Vec::new();

    let all: Vec<&MatchRecord> = records.iter().collect();
    sections.push(Section::games("ALL GAMES", &all));

    let competition_count =
        query::count_by_competition_prefix(records, &config.competition_prefix);
    sections.push(Section::new(
        "COMPETITION",
        vec![format!(
            "There were {competition_count} {} games",
            config.competition_prefix
        )],
    ));

    let split = query::partition_by_home_team(records, team);
    sections.push(Section::games("HOME", &split.home));
    sections.push(Section::games("AWAY", &split.other));

    let groups = query::group_by_outcome(records);
    for outcome in [Outcome::Won, Outcome::Draw, Outcome::Lost] {
        sections.push(Section::games(outcome.name(), groups.get(outcome)));
    }

    let average = query::average_goals_per_game(records);
    sections.push(Section::new(
        "AVERAGE GOALS",
        vec![format!("Average goals per game: {average:.2}")],
    ));

    let home_wins = query::count_won_at_home(records, team);
    sections.push(Section::new(
        "HOME WINS",
        vec![format!("{team} won {home_wins} games at home")],
    ));

    let describe = |game: Option<&MatchRecord>| {
        game.map_or_else(|| "none".to_string(), |g| g.to_string())
    };
    sections.push(Section::new(
        "FEWEST GOALS",
        vec![
            format!(
                "Game with least number of goals (sorted): {}",
                describe(query::min_goals_game_sorted(records))
            ),
            format!(
                "Game with least number of goals (minimum): {}",
                describe(query::min_goals_game(records))
            ),
        ],
    ));

    sections.push(Section::new(
        "START TIMES",
        query::distinct_start_times(records)
            .into_iter()
            .map(str::to_string)
            .collect(),
    ));

    let decided = query::any_away_win_by_margin(records, team, config.margin);
    sections.push(Section::new(
        "AWAY MARGIN",
        vec![format!(
            "{team} had an away game decided by at least {} goals: {}",
            config.margin,
            if decided { "yes" } else { "no" }
        )],
    ));

    let flattened = query::flatten_grouped_by_year_and_home_team(records, &config.year);
    sections.push(Section::games(
        format!("GAMES {} BY HOME TEAM", config.year),
        &flattened,
    ));

    log::debug!("Built report with {} sections", sections.len());
    Report { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::game;
    use crate::season::load_season;
    use std::path::Path;

    const EXPECTED_TITLES: [&str; 13] = [
        "ALL GAMES",
        "COMPETITION",
        "HOME",
        "AWAY",
        "WON",
        "DRAW",
        "LOST",
        "AVERAGE GOALS",
        "HOME WINS",
        "FEWEST GOALS",
        "START TIMES",
        "AWAY MARGIN",
        "GAMES 2019 BY HOME TEAM",
    ];

    fn sample() -> Vec<MatchRecord> {
        let mut cup = game("Energie Cottbus", "FC Bayern Muenchen", 1, 3);
        cup.competition_info = "DFB-POKAL 1. Runde".to_string();
        cup.date = "12.08.2019".to_string();
        cup.time = "20:45".to_string();
        let mut late = game("FC Bayern Muenchen", "RB Leipzig", 0, 0);
        late.date = "09.02.2020".to_string();
        late.time = "18:00".to_string();
        vec![cup, game("FC Bayern Muenchen", "Hertha BSC", 2, 2), late]
    }

    #[test]
    fn test_section_order() {
        let report = build_report(&sample(), &QueryConfig::default());
        assert_eq!(report.titles(), EXPECTED_TITLES);
    }

    #[test]
    fn test_sections_content() {
        let records = sample();
        let report = build_report(&records, &QueryConfig::default());

        assert_eq!(report.section("ALL GAMES").unwrap().lines.len(), 3);
        assert_eq!(
            report.section("COMPETITION").unwrap().lines,
            vec!["There were 2 BUNDESLIGA games"]
        );
        assert_eq!(report.section("HOME").unwrap().lines.len(), 2);
        assert_eq!(
            report.section("AWAY").unwrap().lines,
            vec![records[0].to_string()]
        );
        assert!(report.section("WON").unwrap().lines.is_empty());
        assert_eq!(report.section("DRAW").unwrap().lines.len(), 2);
        assert_eq!(report.section("LOST").unwrap().lines.len(), 1);
        assert_eq!(
            report.section("AVERAGE GOALS").unwrap().lines,
            vec!["Average goals per game: 2.67"]
        );
        assert_eq!(
            report.section("HOME WINS").unwrap().lines,
            vec!["FC Bayern Muenchen won 0 games at home"]
        );
        assert_eq!(
            report.section("START TIMES").unwrap().lines,
            vec!["20:45", "20:30", "18:00"]
        );
        assert_eq!(
            report.section("AWAY MARGIN").unwrap().lines,
            vec!["FC Bayern Muenchen had an away game decided by at least 2 goals: yes"]
        );
        assert_eq!(report.section("GAMES 2019 BY HOME TEAM").unwrap().lines.len(), 2);
    }

    #[test]
    fn test_fewest_goals_lines() {
        let records = sample();
        let report = build_report(&records, &QueryConfig::default());
        let expected = records[2].to_string();
        let lines = &report.section("FEWEST GOALS").unwrap().lines;
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.ends_with(&expected)));
    }

    #[test]
    fn test_empty_season() {
        let report = build_report(&[], &QueryConfig::default());
        assert_eq!(report.sections.len(), 13);
        assert_eq!(
            report.section("AVERAGE GOALS").unwrap().lines,
            vec!["Average goals per game: 0.00"]
        );
        assert!(report.section("FEWEST GOALS").unwrap().lines[0].ends_with("none"));
    }

    #[test]
    fn test_custom_config() {
        let config = QueryConfig {
            team: "Hertha BSC".to_string(),
            competition_prefix: "DFB".to_string(),
            year: "2020".to_string(),
            margin: 1,
        };
        let report = build_report(&sample(), &config);
        assert_eq!(
            report.section("COMPETITION").unwrap().lines,
            vec!["There were 1 DFB games"]
        );
        assert!(report.section("HOME").unwrap().lines.is_empty());
        assert_eq!(
            report.section("AWAY MARGIN").unwrap().lines,
            vec!["Hertha BSC had an away game decided by at least 1 goals: no"]
        );
        assert_eq!(report.section("GAMES 2020 BY HOME TEAM").unwrap().lines.len(), 1);
    }

    #[test]
    fn test_display_format() {
        let report = Report {
            sections: vec![
                Section::new("ONE", vec!["a".to_string(), "b".to_string()]),
                Section::new("TWO", vec![]),
            ],
        };
        assert_eq!(report.to_string(), "*** ONE ***\na\nb\n\n*** TWO ***\n");
    }

    #[test]
    fn test_report_with_max_goal_values() {
        let records = vec![game("A", "B", u32::MAX, u32::MAX), game("C", "D", u32::MAX, 0)];
        let report = build_report(&records, &QueryConfig::default());
        assert_eq!(
            report.section("AVERAGE GOALS").unwrap().lines,
            vec!["Average goals per game: 6442450942.50"]
        );
        let expected = records[1].to_string();
        let lines = &report.section("FEWEST GOALS").unwrap().lines;
        assert!(lines.iter().all(|line| line.ends_with(&expected)));
    }

    #[test]
    fn test_fixture_report() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/games.csv");
        let season = load_season(path).unwrap();
        let report = build_report(season.records(), &QueryConfig::default());

        assert_eq!(
            report.section("ALL GAMES").unwrap().lines.len(),
            season.len()
        );
        let outcome_total: usize = ["WON", "DRAW", "LOST"]
            .iter()
            .map(|t| report.section(t).unwrap().lines.len())
            .sum();
        assert_eq!(outcome_total, season.len());
        let home = report.section("HOME").unwrap().lines.len();
        let away = report.section("AWAY").unwrap().lines.len();
        assert_eq!(home + away, season.len());
    }
}
