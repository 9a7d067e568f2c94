//! Medal standings, read off a propagated bracket.

use crate::models::Round;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

/// Final standings. Bronze is shared by the semi-final losers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Medals {
    pub gold: String,
    pub silver: String,
    pub bronze: Vec<String>,
}

impl Medals {
    pub fn medal_for(&self, team: &str) -> Option<Medal> {
        if self.gold == team {
            Some(Medal::Gold)
        } else if self.silver == team {
            Some(Medal::Silver)
        } else if self.bronze.iter().any(|t| t == team) {
            Some(Medal::Bronze)
        } else {
            None
        }
    }
}

/// Standings once the final has a winner; None before that.
pub fn assign_medals(rounds: &[Round]) -> Option<Medals> {
    let final_match = rounds.last()?.first()?;
    let gold = final_match.winner.clone()?;
    let silver = final_match.loser()?.to_string();
    let bronze = match rounds.len().checked_sub(2) {
        Some(semi) => rounds[semi]
            .iter()
            .filter_map(|m| m.loser())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };
    Some(Medals {
        gold,
        silver,
        bronze,
    })
}
