//! Tournament, SeedingMode and TournamentError.

use crate::models::bracket_match::{BracketMatch, MatchId, Round};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Team names must not be blank.
    EmptyTeamName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName(String),
    /// Team not found in the roster.
    TeamNotFound(String),
    /// Match id does not exist in the current bracket.
    MatchNotFound(MatchId),
    /// Scores can only be entered once both teams of a (non-bye) match are known.
    MatchNotReady(MatchId),
    /// Score input was not a non-negative whole number.
    InvalidScore(String),
    /// Score input was a whole number too large to store.
    ScoreTooLarge(String),
    /// Roster import or results export failed.
    Csv(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyTeamName => write!(f, "Team name must not be empty"),
            TournamentError::DuplicateTeamName(name) => {
                write!(f, "A team named '{}' already exists", name)
            }
            TournamentError::TeamNotFound(name) => write!(f, "Team '{}' not found", name),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::MatchNotReady(_) => {
                write!(f, "Both teams must be known before entering a score")
            }
            TournamentError::InvalidScore(raw) => {
                write!(f, "Score must be a non-negative whole number (got '{}')", raw)
            }
            TournamentError::ScoreTooLarge(raw) => {
                write!(f, "Score is too large (got '{}', max {})", raw, u32::MAX)
            }
            TournamentError::Csv(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Trim `name` and make sure it is non-empty and not already in `roster` (case-insensitive).
pub fn check_team_name(roster: &[String], name: &str) -> Result<String, TournamentError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::EmptyTeamName);
    }
    if roster.iter().any(|t| t.eq_ignore_ascii_case(trimmed)) {
        return Err(TournamentError::DuplicateTeamName(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// How the roster order maps to seeds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// Roster order is seed order (first team = top seed).
    #[default]
    Input,
    /// Roster is shuffled before seeds are assigned.
    Random,
}

/// A class tournament: roster, seeding mode and the bracket built from them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Roster in seed order (before any random shuffle).
    pub teams: Vec<String>,
    pub seeding: SeedingMode,
    /// Earliest round first; the last round holds the final alone. Empty with fewer than 2 teams.
    pub rounds: Vec<Round>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new(name: impl Into<String>, seeding: SeedingMode) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            teams: Vec::new(),
            seeding,
            rounds: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True when there are enough teams for a bracket.
    pub fn has_bracket(&self) -> bool {
        !self.rounds.is_empty()
    }

    pub fn find_match(&self, id: MatchId) -> Option<&BracketMatch> {
        self.rounds.iter().flatten().find(|m| m.id == id)
    }

    pub fn find_match_mut(&mut self, id: MatchId) -> Option<&mut BracketMatch> {
        self.rounds.iter_mut().flatten().find(|m| m.id == id)
    }

    /// The single match of the last round.
    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.rounds.last().and_then(|r| r.first())
    }

    /// Trim and check a candidate team name against the roster.
    pub fn validate_team_name(&self, name: &str) -> Result<String, TournamentError> {
        check_team_name(&self.teams, name)
    }

    /// Record a mutation time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
