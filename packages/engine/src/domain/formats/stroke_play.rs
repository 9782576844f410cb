//! Handicapped net stroke play: totals, to-par, and leaderboard positions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerId;

/// Net score per player who played the hole. Conceded and unplayed holes
/// simply do not appear; completeness is judged at the card level.
pub fn score_hole(nets: &BTreeMap<PlayerId, Option<i16>>) -> BTreeMap<PlayerId, i16> {
    nets.iter()
        .filter_map(|(player, net)| net.map(|n| (*player, n)))
        .collect()
}

/// One player's accumulated card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub player: PlayerId,
    pub net_total: i32,
    pub to_par: i32,
    pub holes_played: u8,
    /// False once any hole is conceded or still unentered.
    pub complete: bool,
}

/// A leaderboard row. Incomplete cards carry no numeric position and sort
/// after every complete card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub net_total: i32,
    pub to_par: i32,
    /// 1-based position; ties share the lowest position in the group.
    pub position: Option<u16>,
    /// Display label: "1", "T2"; `None` for unranked (incomplete) cards.
    pub label: Option<String>,
}

/// Rank cards ascending by net total. Positions and labels are recomputed
/// from scratch on every call; nothing here is incrementally maintained, so
/// retroactive edits can never leave a stale rank behind.
pub fn standings(cards: &[PlayerCard]) -> Vec<Standing> {
    let mut complete: Vec<&PlayerCard> = cards.iter().filter(|c| c.complete).collect();
    let mut incomplete: Vec<&PlayerCard> = cards.iter().filter(|c| !c.complete).collect();
    complete.sort_by_key(|c| c.net_total);
    incomplete.sort_by_key(|c| (c.net_total, std::cmp::Reverse(c.holes_played)));

    let totals: Vec<i32> = complete.iter().map(|c| c.net_total).collect();
    let labels = tie_labels(&totals);

    let mut rows: Vec<Standing> = complete
        .iter()
        .zip(labels)
        .map(|(card, (position, label))| Standing {
            player: card.player,
            net_total: card.net_total,
            to_par: card.to_par,
            position: Some(position),
            label: Some(label),
        })
        .collect();
    rows.extend(incomplete.iter().map(|card| Standing {
        player: card.player,
        net_total: card.net_total,
        to_par: card.to_par,
        position: None,
        label: None,
    }));
    rows
}

/// Positions and display labels for an ascending-sorted totals slice.
/// Exact ties share a position and get a "T" prefix.
pub(crate) fn tie_labels(sorted_totals: &[i32]) -> Vec<(u16, String)> {
    let mut out = Vec::with_capacity(sorted_totals.len());
    let mut index = 0;
    while index < sorted_totals.len() {
        let mut group_end = index + 1;
        while group_end < sorted_totals.len() && sorted_totals[group_end] == sorted_totals[index] {
            group_end += 1;
        }
        let position = (index + 1) as u16;
        let tied = group_end - index > 1;
        for _ in index..group_end {
            let label = if tied {
                format!("T{position}")
            } else {
                position.to_string()
            };
            out.push((position, label));
        }
        index = group_end;
    }
    out
}
