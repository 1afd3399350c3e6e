//! # season-stats
//!
//! Statistical summaries over one season of football match records.
//!
//! A season is read once from a comma-separated file into an immutable
//! [`Season`]. Every query in [`query`] borrows the records read-only and
//! returns a scalar, a partition, a grouping or a derived list.
//!
//! ## Input format
//!
//! One header line, then one line per match:
//!
//! ```text
//! Info,Date,Time,Home,Away,HomeGoals,AwayGoals
//! BUNDESLIGA 1. Spieltag,16.08.2019,20:30,FC Bayern Muenchen,Hertha BSC,2,2
//! ```
//!
//! ## Example
//!
//! ```
//! use season_stats::{Season, query};
//!
//! let csv = "Info,Date,Time,Home,Away,HomeGoals,AwayGoals\n\
//!            BUNDESLIGA 1. Spieltag,16.08.2019,20:30,FC Bayern Muenchen,Hertha BSC,2,2\n\
//!            BUNDESLIGA 2. Spieltag,24.08.2019,18:30,FC Schalke 04,FC Bayern Muenchen,0,3\n";
//!
//! let season = Season::from_reader(csv.as_bytes()).unwrap();
//! let records = season.records();
//!
//! assert_eq!(query::count_by_competition_prefix(records, "BUNDESLIGA"), 2);
//! assert_eq!(query::average_goals_per_game(records), 3.5);
//! assert!(query::any_away_win_by_margin(records, "FC Bayern Muenchen", 2));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod record;
pub mod report;
pub mod season;

pub use config::QueryConfig;
pub use error::StatsError;
pub use record::{FIELD_COUNT, MatchRecord, Outcome};
pub use report::{Report, Section, build_report};
pub use season::{Season, load_season};
