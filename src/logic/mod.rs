//! Bracket engine: construction, winner propagation, and read-side derivations.

mod builder;
mod connectors;
mod labels;
mod medals;
mod propagate;
mod roster;
mod roster_csv;
mod score_input;
mod tables;
mod view;

pub use builder::{build_bracket, seed_order, BracketLayout};
pub use connectors::{connector_paths, connectors, Anchor, Connector, ConnectorPath};
pub use labels::round_labels;
pub use medals::{assign_medals, Medal, Medals};
pub use propagate::propagate_winners;
pub use roster::{add_team, rebuild_bracket, remove_team, set_seeding, set_teams};
pub use roster_csv::{export_results_csv, import_teams_csv};
pub use score_input::{enter_score, parse_score};
pub use tables::{PairingTable, SlotSource};
pub use view::BracketView;
