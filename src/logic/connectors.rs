//! Renderer input: parent links as edges, and SVG connector paths between laid-out cards.

use crate::models::{MatchId, Round, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One child -> parent edge of the bracket tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub from: MatchId,
    pub to: MatchId,
    pub side: Side,
}

/// Where a match card was painted (top-left corner plus size).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// SVG path data for one connector.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConnectorPath {
    pub from: MatchId,
    pub to: MatchId,
    pub d: String,
}

/// Every parent link in the bracket, earliest round first.
pub fn connectors(rounds: &[Round]) -> Vec<Connector> {
    rounds
        .iter()
        .flatten()
        .filter_map(|m| {
            Some(Connector {
                from: m.id,
                to: m.parent_id?,
                side: m.parent_side?,
            })
        })
        .collect()
}

/// Cubic Bézier from each child's right edge to its parent's left edge.
///
/// Edges whose cards have no anchor yet (not painted) are skipped.
pub fn connector_paths(rounds: &[Round], anchors: &HashMap<MatchId, Anchor>) -> Vec<ConnectorPath> {
    connectors(rounds)
        .into_iter()
        .filter_map(|c| {
            let from = anchors.get(&c.from)?;
            let to = anchors.get(&c.to)?;
            Some(ConnectorPath {
                from: c.from,
                to: c.to,
                d: bezier(from, to),
            })
        })
        .collect()
}

fn bezier(from: &Anchor, to: &Anchor) -> String {
    let (x1, y1) = (from.x + from.width, from.y + from.height / 2.0);
    let (x2, y2) = (to.x, to.y + to.height / 2.0);
    let cx = (x1 + x2) / 2.0;
    format!("M {x1} {y1} C {cx} {y1}, {cx} {y2}, {x2} {y2}")
}
