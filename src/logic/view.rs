//! Everything the bracket screen needs in one response.

use crate::logic::connectors::{connectors, Connector};
use crate::logic::labels::round_labels;
use crate::logic::medals::{assign_medals, Medals};
use crate::models::{Round, Tournament, TournamentId};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketView {
    pub tournament_id: TournamentId,
    pub name: String,
    /// True with fewer than 2 teams: show the empty-state prompt instead of a bracket.
    pub empty: bool,
    pub rounds: Vec<Round>,
    pub labels: Vec<String>,
    pub medals: Option<Medals>,
    pub connectors: Vec<Connector>,
}

impl BracketView {
    pub fn from_tournament(tournament: &Tournament) -> Self {
        Self {
            tournament_id: tournament.id,
            name: tournament.name.clone(),
            empty: !tournament.has_bracket(),
            rounds: tournament.rounds.clone(),
            labels: round_labels(tournament.rounds.len()),
            medals: assign_medals(&tournament.rounds),
            connectors: connectors(&tournament.rounds),
        }
    }
}
