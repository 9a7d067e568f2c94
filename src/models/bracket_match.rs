//! BracketMatch and Side: one node of the single-elimination tree.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One round of the bracket, ordered by slot.
pub type Round = Vec<BracketMatch>;

/// Which team slot of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// A single elimination match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketMatch {
    pub id: MatchId,
    pub round_index: usize,
    pub slot_index: usize,
    /// None while the feeding match is undecided (or the empty side of a bye).
    pub team_a: Option<String>,
    pub team_b: Option<String>,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    /// Computed by propagation, never set by the user.
    pub winner: Option<String>,
    /// Match in the next round this one feeds. None only for the final.
    pub parent_id: Option<MatchId>,
    /// Slot of the parent that receives this match's winner.
    pub parent_side: Option<Side>,
    /// One participant by construction; the team advances without playing.
    pub is_bye: bool,
    pub match_number: Option<u32>,
}

impl BracketMatch {
    /// Create an empty match at the given position. Teams, links and numbering are filled in by the builder.
    pub fn new(round_index: usize, slot_index: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            round_index,
            slot_index,
            team_a: None,
            team_b: None,
            score_a: None,
            score_b: None,
            winner: None,
            parent_id: None,
            parent_side: None,
            is_bye: false,
            match_number: None,
        }
    }

    pub fn team(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.team_a.as_deref(),
            Side::B => self.team_b.as_deref(),
        }
    }

    pub fn score(&self, side: Side) -> Option<u32> {
        match side {
            Side::A => self.score_a,
            Side::B => self.score_b,
        }
    }

    /// Set one team slot. Returns true if the occupant changed.
    pub fn set_team(&mut self, side: Side, team: Option<String>) -> bool {
        let slot = match side {
            Side::A => &mut self.team_a,
            Side::B => &mut self.team_b,
        };
        if *slot == team {
            return false;
        }
        *slot = team;
        true
    }

    pub fn set_score(&mut self, side: Side, score: Option<u32>) {
        match side {
            Side::A => self.score_a = score,
            Side::B => self.score_b = score,
        }
    }

    pub fn clear_scores(&mut self) {
        self.score_a = None;
        self.score_b = None;
    }

    /// Both teams present and both scores entered.
    pub fn is_complete(&self) -> bool {
        self.team_a.is_some()
            && self.team_b.is_some()
            && self.score_a.is_some()
            && self.score_b.is_some()
    }

    /// Winner implied by the current slots and scores.
    ///
    /// A bye advances its only team. Otherwise both teams and both scores are
    /// required, and equal scores leave the match undecided.
    pub fn decide(&self) -> Option<String> {
        if self.is_bye {
            return match (&self.team_a, &self.team_b) {
                (Some(a), None) => Some(a.clone()),
                (None, Some(b)) => Some(b.clone()),
                _ => None,
            };
        }
        if !self.is_complete() {
            return None;
        }
        match (self.score_a, self.score_b) {
            (Some(a), Some(b)) if a > b => self.team_a.clone(),
            (Some(a), Some(b)) if b > a => self.team_b.clone(),
            _ => None,
        }
    }

    /// Team this match sends to its parent: the winner, once the result is final.
    pub fn advancing_team(&self) -> Option<&str> {
        if self.is_bye || self.is_complete() {
            self.winner.as_deref()
        } else {
            None
        }
    }

    /// The defeated team of a decided, played match.
    pub fn loser(&self) -> Option<&str> {
        let winner = self.winner.as_deref()?;
        if self.is_bye {
            return None;
        }
        if self.team_a.as_deref() == Some(winner) {
            self.team_b.as_deref()
        } else {
            self.team_a.as_deref()
        }
    }
}
