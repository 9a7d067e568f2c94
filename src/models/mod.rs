//! Data structures for class tournaments: matches, rounds, tournament state.

mod bracket_match;
mod tournament;

pub use bracket_match::{BracketMatch, MatchId, Round, Side};
pub use tournament::{check_team_name, SeedingMode, Tournament, TournamentError, TournamentId};
