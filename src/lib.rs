//! PE class tournament brackets: library with models, the bracket engine, and storage.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    add_team, assign_medals, build_bracket, connector_paths, connectors, enter_score,
    export_results_csv, import_teams_csv, parse_score, propagate_winners, rebuild_bracket,
    remove_team, round_labels, seed_order, set_seeding, set_teams, Anchor, BracketLayout,
    BracketView, Connector, ConnectorPath, Medal, Medals, PairingTable, SlotSource,
};
pub use models::{
    BracketMatch, MatchId, Round, SeedingMode, Side, Tournament, TournamentError, TournamentId,
};
pub use storage::{open_store, JsonFileStore, MemoryStore, StorageError, TournamentStore};
