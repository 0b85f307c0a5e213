//! Recursive structural decomposition and the top-level `check_win` entry
//! point.

use crate::hand::PlayerState;
use crate::meld::Meld;
use crate::scoring::{HandContext, Scorer, WinTag};
use crate::tile::{Tile, Wind};
use crate::tile_set::TileCounts;

use super::special::{is_nine_gates, is_thirteen_orphans};

/// Every way to carve `counts` into exactly one pair plus `remaining_sets`
/// chow/pung/kong groups, leaving nothing over.
///
/// Branches at the lowest-id tile still present, trying kong, pung, and the
/// three chow positions in that order, and backtracks by restoring `counts`
/// after each attempt — no cloning on the hot path.
fn decompositions(counts: &mut TileCounts, remaining_sets: u8, pair_taken: bool) -> Vec<Vec<Meld>> {
    let Some(tile) = counts.lowest_nonzero() else {
        return if remaining_sets == 0 && pair_taken { vec![Vec::new()] } else { Vec::new() };
    };

    let mut results = Vec::new();

    if !pair_taken && counts.count(tile) >= 2 {
        counts.remove(tile);
        counts.remove(tile);
        for mut rest in decompositions(counts, remaining_sets, true) {
            rest.push(Meld::Pair(tile));
            results.push(rest);
        }
        counts.add(tile);
        counts.add(tile);
    }

    if remaining_sets > 0 {
        if counts.count(tile) >= 4 {
            counts.remove(tile);
            counts.remove(tile);
            counts.remove(tile);
            counts.remove(tile);
            for mut rest in decompositions(counts, remaining_sets - 1, pair_taken) {
                rest.push(Meld::Kong(tile));
                results.push(rest);
            }
            counts.add(tile);
            counts.add(tile);
            counts.add(tile);
            counts.add(tile);
        }

        if counts.count(tile) >= 3 {
            counts.remove(tile);
            counts.remove(tile);
            counts.remove(tile);
            for mut rest in decompositions(counts, remaining_sets - 1, pair_taken) {
                rest.push(Meld::Pung(tile));
                results.push(rest);
            }
            counts.add(tile);
            counts.add(tile);
            counts.add(tile);
        }

        if let (Some(mid), Some(high)) = (tile.succ(), tile.succ2()) {
            if counts.count(mid) >= 1 && counts.count(high) >= 1 {
                counts.remove(tile);
                counts.remove(mid);
                counts.remove(high);
                for mut rest in decompositions(counts, remaining_sets - 1, pair_taken) {
                    rest.push(Meld::Chow(tile, mid, high));
                    results.push(rest);
                }
                counts.add(tile);
                counts.add(mid);
                counts.add(high);
            }
        }
    }

    results
}

/// Every legal full decomposition of a player's concealed multiset into one
/// pair and `4 - existing structural melds` further groups.
fn structural_candidates(existing_structural: usize, counts: &mut TileCounts) -> Vec<Vec<Meld>> {
    let remaining_sets = 4u8.saturating_sub(existing_structural as u8);
    decompositions(counts, remaining_sets, false)
}

/// Attempts to resolve a winning configuration for `player` against `tile`.
///
/// When `is_current_player` is true, `tile` is assumed already present in
/// `player.hand` (the player's own draw); otherwise it is folded into the
/// concealed multiset as the candidate winning tile from another player's
/// discard or kong. Builds the win-circumstance tags (`self_pick`,
/// `concealed_hand`) before running the special-hand checks and, failing
/// those, the structural decomposition.
///
/// Returns the full meld list — `player`'s exposed melds (including flower
/// singletons) followed by the pair and concealed groups found — alongside
/// the resulting [`HandContext`], or an empty `Vec` if no winning
/// decomposition exists. Never panics on ill-formed input.
///
/// Among multiple structurally valid decompositions, the one that scores
/// highest under [`Scorer`] is kept; ties keep the first one found.
pub fn check_win(
    player: &PlayerState,
    tile: Tile,
    is_current_player: bool,
    round_wind: Wind,
) -> (Vec<Meld>, HandContext) {
    let mut context = HandContext::new(player.seat_wind, round_wind);
    if is_current_player {
        context.win_condition.insert(WinTag::SelfPick);
    }
    if player.is_concealed() {
        context.win_condition.insert(WinTag::ConcealedHand);
    }

    let mut hand_counts = player.hand_counts();
    if !is_current_player {
        hand_counts.add(tile);
    }
    let concealed = player.is_concealed();

    if is_thirteen_orphans(&hand_counts) {
        context.thirteen_orphans = true;
        let mut melds = exposed_non_flower(player);
        melds.extend(sole_pair(&hand_counts));
        return (melds, context);
    }

    if is_nine_gates(&hand_counts, concealed) {
        context.nine_gates = true;
    }

    let existing_structural = player.structural_melds().count();
    let mut counts = hand_counts;
    let candidates = structural_candidates(existing_structural, &mut counts);
    if candidates.is_empty() {
        return (Vec::new(), context);
    }

    let mut best: Option<(Vec<Meld>, u8)> = None;
    for concealed_groups in candidates {
        let mut full = exposed_non_flower(player);
        full.extend(concealed_groups);
        let score = Scorer::score(&full, &context);
        if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
            best = Some((full, score));
        }
    }

    let (melds, _) = best.expect("candidates is non-empty");
    (melds, context)
}

fn exposed_non_flower(player: &PlayerState) -> Vec<Meld> {
    player.melds.iter().filter(|m| !m.is_flower()).copied().collect()
}

/// Thirteen orphans never goes through the chow/pung/kong decomposer — there
/// are no structural sets, just the 13 orphan kinds with one doubled. The
/// doubled kind is reported as the winning `Pair`; [`Meld`] has no
/// "single tile" variant, so the other twelve kinds are not individually
/// represented here — callers needing the full list already have it in
/// `player.hand`.
fn sole_pair(counts: &TileCounts) -> Vec<Meld> {
    counts
        .iter_nonzero()
        .find(|&(_, c)| c == 2)
        .map(|(tile, _)| vec![Meld::Pair(tile)])
        .unwrap_or_default()
}
