//! Hand-authored pairing tables for 3 to 24 teams.
//!
//! Each table lists the opening-round games as 1-based seed pairs, then the
//! second-round matches. A second-round slot is either a seed that skipped the
//! opening round (bye) or the winner of an opening game. Rounds after the second
//! pair matches two by two, so they need no table.
//!
//! Top seeds take the byes and are kept apart until the late rounds, following
//! the usual seeding chart (16 teams: 1v16, 8v9, 4v13, 5v12, 2v15, 7v10, 3v14, 6v11).

use SlotSource::{Seed, Winner};

/// Where a second-round team slot gets its team from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlotSource {
    /// 1-based seed placed directly (bye through the opening round).
    Seed(u8),
    /// Winner of the opening-round match at this index.
    Winner(u8),
}

/// Opening and second-round layout for one team count.
#[derive(Debug, Eq, PartialEq)]
pub struct PairingTable {
    pub teams: usize,
    pub opening: &'static [(u8, u8)],
    pub second: &'static [(SlotSource, SlotSource)],
}

impl PairingTable {
    /// Table for exactly `teams` teams, if one is authored.
    pub fn for_team_count(teams: usize) -> Option<&'static PairingTable> {
        TABLES.iter().copied().find(|t| t.teams == teams)
    }

    /// Seeds that skip the opening round.
    pub fn bye_seeds(&self) -> Vec<u8> {
        self.second
            .iter()
            .flat_map(|(a, b)| [*a, *b])
            .filter_map(|s| match s {
                Seed(seed) => Some(seed),
                Winner(_) => None,
            })
            .collect()
    }
}

static TABLES: [&PairingTable; 22] = [
    &TEAMS_3, &TEAMS_4, &TEAMS_5, &TEAMS_6, &TEAMS_7, &TEAMS_8, &TEAMS_9, &TEAMS_10,
    &TEAMS_11, &TEAMS_12, &TEAMS_13, &TEAMS_14, &TEAMS_15, &TEAMS_16, &TEAMS_17, &TEAMS_18,
    &TEAMS_19, &TEAMS_20, &TEAMS_21, &TEAMS_22, &TEAMS_23, &TEAMS_24,
];

const TEAMS_3: PairingTable = PairingTable {
    teams: 3,
    opening: &[(2, 3)],
    second: &[
        (Seed(1), Winner(0)),
    ],
};

const TEAMS_4: PairingTable = PairingTable {
    teams: 4,
    opening: &[(1, 4), (2, 3)],
    second: &[
        (Winner(0), Winner(1)),
    ],
};

const TEAMS_5: PairingTable = PairingTable {
    teams: 5,
    opening: &[(4, 5)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(2), Seed(3)),
    ],
};

const TEAMS_6: PairingTable = PairingTable {
    teams: 6,
    opening: &[(4, 5), (3, 6)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(2), Winner(1)),
    ],
};

const TEAMS_7: PairingTable = PairingTable {
    teams: 7,
    opening: &[(4, 5), (2, 7), (3, 6)],
    second: &[
        (Seed(1), Winner(0)),
        (Winner(1), Winner(2)),
    ],
};

const TEAMS_8: PairingTable = PairingTable {
    teams: 8,
    opening: &[(1, 8), (4, 5), (2, 7), (3, 6)],
    second: &[
        (Winner(0), Winner(1)),
        (Winner(2), Winner(3)),
    ],
};

const TEAMS_9: PairingTable = PairingTable {
    teams: 9,
    opening: &[(8, 9)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(4), Seed(5)),
        (Seed(2), Seed(7)),
        (Seed(3), Seed(6)),
    ],
};

const TEAMS_10: PairingTable = PairingTable {
    teams: 10,
    opening: &[(8, 9), (7, 10)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(4), Seed(5)),
        (Seed(2), Winner(1)),
        (Seed(3), Seed(6)),
    ],
};

const TEAMS_11: PairingTable = PairingTable {
    teams: 11,
    opening: &[(8, 9), (7, 10), (6, 11)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(4), Seed(5)),
        (Seed(2), Winner(1)),
        (Seed(3), Winner(2)),
    ],
};

const TEAMS_12: PairingTable = PairingTable {
    teams: 12,
    opening: &[(8, 9), (5, 12), (7, 10), (6, 11)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(4), Winner(1)),
        (Seed(2), Winner(2)),
        (Seed(3), Winner(3)),
    ],
};

const TEAMS_13: PairingTable = PairingTable {
    teams: 13,
    opening: &[(8, 9), (4, 13), (5, 12), (7, 10), (6, 11)],
    second: &[
        (Seed(1), Winner(0)),
        (Winner(1), Winner(2)),
        (Seed(2), Winner(3)),
        (Seed(3), Winner(4)),
    ],
};

const TEAMS_14: PairingTable = PairingTable {
    teams: 14,
    opening: &[(8, 9), (4, 13), (5, 12), (7, 10), (3, 14), (6, 11)],
    second: &[
        (Seed(1), Winner(0)),
        (Winner(1), Winner(2)),
        (Seed(2), Winner(3)),
        (Winner(4), Winner(5)),
    ],
};

const TEAMS_15: PairingTable = PairingTable {
    teams: 15,
    opening: &[(8, 9), (4, 13), (5, 12), (2, 15), (7, 10), (3, 14), (6, 11)],
    second: &[
        (Seed(1), Winner(0)),
        (Winner(1), Winner(2)),
        (Winner(3), Winner(4)),
        (Winner(5), Winner(6)),
    ],
};

const TEAMS_16: PairingTable = PairingTable {
    teams: 16,
    opening: &[(1, 16), (8, 9), (4, 13), (5, 12), (2, 15), (7, 10), (3, 14), (6, 11)],
    second: &[
        (Winner(0), Winner(1)),
        (Winner(2), Winner(3)),
        (Winner(4), Winner(5)),
        (Winner(6), Winner(7)),
    ],
};

const TEAMS_17: PairingTable = PairingTable {
    teams: 17,
    opening: &[(16, 17)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(8), Seed(9)),
        (Seed(4), Seed(13)),
        (Seed(5), Seed(12)),
        (Seed(2), Seed(15)),
        (Seed(7), Seed(10)),
        (Seed(3), Seed(14)),
        (Seed(6), Seed(11)),
    ],
};

const TEAMS_18: PairingTable = PairingTable {
    teams: 18,
    opening: &[(16, 17), (15, 18)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(8), Seed(9)),
        (Seed(4), Seed(13)),
        (Seed(5), Seed(12)),
        (Seed(2), Winner(1)),
        (Seed(7), Seed(10)),
        (Seed(3), Seed(14)),
        (Seed(6), Seed(11)),
    ],
};

const TEAMS_19: PairingTable = PairingTable {
    teams: 19,
    opening: &[(16, 17), (15, 18), (14, 19)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(8), Seed(9)),
        (Seed(4), Seed(13)),
        (Seed(5), Seed(12)),
        (Seed(2), Winner(1)),
        (Seed(7), Seed(10)),
        (Seed(3), Winner(2)),
        (Seed(6), Seed(11)),
    ],
};

const TEAMS_20: PairingTable = PairingTable {
    teams: 20,
    opening: &[(16, 17), (13, 20), (15, 18), (14, 19)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(8), Seed(9)),
        (Seed(4), Winner(1)),
        (Seed(5), Seed(12)),
        (Seed(2), Winner(2)),
        (Seed(7), Seed(10)),
        (Seed(3), Winner(3)),
        (Seed(6), Seed(11)),
    ],
};

const TEAMS_21: PairingTable = PairingTable {
    teams: 21,
    opening: &[(16, 17), (13, 20), (12, 21), (15, 18), (14, 19)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(8), Seed(9)),
        (Seed(4), Winner(1)),
        (Seed(5), Winner(2)),
        (Seed(2), Winner(3)),
        (Seed(7), Seed(10)),
        (Seed(3), Winner(4)),
        (Seed(6), Seed(11)),
    ],
};

const TEAMS_22: PairingTable = PairingTable {
    teams: 22,
    opening: &[(16, 17), (13, 20), (12, 21), (15, 18), (14, 19), (11, 22)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(8), Seed(9)),
        (Seed(4), Winner(1)),
        (Seed(5), Winner(2)),
        (Seed(2), Winner(3)),
        (Seed(7), Seed(10)),
        (Seed(3), Winner(4)),
        (Seed(6), Winner(5)),
    ],
};

const TEAMS_23: PairingTable = PairingTable {
    teams: 23,
    opening: &[(16, 17), (13, 20), (12, 21), (15, 18), (10, 23), (14, 19), (11, 22)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(8), Seed(9)),
        (Seed(4), Winner(1)),
        (Seed(5), Winner(2)),
        (Seed(2), Winner(3)),
        (Seed(7), Winner(4)),
        (Seed(3), Winner(5)),
        (Seed(6), Winner(6)),
    ],
};

const TEAMS_24: PairingTable = PairingTable {
    teams: 24,
    opening: &[(16, 17), (9, 24), (13, 20), (12, 21), (15, 18), (10, 23), (14, 19), (11, 22)],
    second: &[
        (Seed(1), Winner(0)),
        (Seed(8), Winner(1)),
        (Seed(4), Winner(2)),
        (Seed(5), Winner(3)),
        (Seed(2), Winner(4)),
        (Seed(7), Winner(5)),
        (Seed(3), Winner(6)),
        (Seed(6), Winner(7)),
    ],
};
