//! The turn-orchestration state machine.

mod errors;
mod player_port;
mod state;

pub use errors::{ConfigurationError, InvalidActionError, StateViolation};
pub use player_port::{Choice, ClaimKind, MeldOptions, PlayerPort};
pub use state::{Flags, GameState, Phase};

use log::{debug, info, warn};

use crate::analysis::{check_chow, check_kong, check_pung, check_win};
use crate::config::EngineConfig;
use crate::meld::Meld;
use crate::player::{other_seats_after, seat_distance, Seat, ALL_SEATS, P0};
use crate::scoring::{HandContext, Scorer, WinTag};
use crate::tile::Tile;
use crate::wall::Wall;

/// The result recorded when a game reaches a terminal state.
#[derive(Clone, Debug)]
pub enum GameResult {
    Win { winner: Seat, melds: Vec<Meld>, context: HandContext, faan: u8 },
    Draw,
}

/// What happened on one call to [`GameEngine::step`].
#[derive(Clone, Debug)]
pub enum StepOutcome {
    Continue,
    GameOver(GameResult),
}

/// Drives one Hong Kong mahjong game to completion, one `step()` at a time.
///
/// Owns the [`GameState`] exclusively and holds one [`PlayerPort`] per seat;
/// ports receive only shared references to state and are never allowed to
/// mutate it.
pub struct GameEngine {
    pub state: GameState,
    ports: [Box<dyn PlayerPort>; 4],
}

impl GameEngine {
    /// Builds a new game from one [`PlayerPort`] per seat. Fails with
    /// [`ConfigurationError::WrongPlayerCount`] if `ports` doesn't hold
    /// exactly 4 entries — a Hong Kong mahjong table always seats 4.
    pub fn new(ports: Vec<Box<dyn PlayerPort>>, config: EngineConfig) -> Result<Self, ConfigurationError> {
        let count = ports.len();
        let ports: [Box<dyn PlayerPort>; 4] =
            ports.try_into().map_err(|_| ConfigurationError::WrongPlayerCount(count))?;

        let wall = Wall::shuffled(config.seed);
        let mut state = GameState::new(wall, config.round_wind);
        Self::deal_opening_hands(&mut state);
        info!("dealt opening hands, wall has {} tiles remaining", state.wall.len());
        Ok(Self { state, ports })
    }

    fn deal_opening_hands(state: &mut state::GameState) {
        for _ in 0..13 {
            for seat in ALL_SEATS {
                Self::draw_with_flower_replacement(state, seat);
            }
        }
        Self::draw_with_flower_replacement(state, P0);
    }

    /// Draws one tile for `seat`, setting aside and redrawing past any
    /// flower tiles. Returns `None` if the wall empties mid-loop.
    fn draw_with_flower_replacement(state: &mut state::GameState, seat: Seat) -> Option<Tile> {
        loop {
            let tile = state.wall.draw()?;
            if tile.is_flower() {
                debug!("seat {seat} drew a flower, replacing");
                state.player_mut(seat).melds.push(Meld::Flower(tile));
                state.flags.kong = true;
                continue;
            }
            state.player_mut(seat).hand.push(tile);
            return Some(tile);
        }
    }

    /// Runs one turn's worth of the state machine. Call repeatedly until it
    /// returns [`StepOutcome::GameOver`].
    pub fn step(&mut self) -> Result<StepOutcome, StateViolation> {
        self.verify_tile_conservation()?;

        // 1. Check draw.
        if self.state.wall.is_empty() {
            info!("wall exhausted, declaring a draw");
            self.state.flags.done = true;
            self.state.flags.draw = true;
            return Ok(StepOutcome::GameOver(GameResult::Draw));
        }

        // 2. Heavenly hand.
        if self.state.flags.first {
            if let Some(outcome) = self.try_heavenly_hand() {
                return Ok(outcome);
            }
        }

        // 3. Draw.
        let seat = self.state.current_player_id;
        if !self.state.flags.first && !self.state.flags.discard {
            let drawn = Self::draw_with_flower_replacement(&mut self.state, seat);
            if drawn.is_none() {
                info!("wall exhausted mid-draw, declaring a draw");
                self.state.flags.done = true;
                self.state.flags.draw = true;
                return Ok(StepOutcome::GameOver(GameResult::Draw));
            }
        }

        // 4. Self options.
        if let Some(outcome) = self.self_options(seat)? {
            return Ok(outcome);
        }

        // 5. Discard.
        let discarded = self.prompt_discard(seat)?;
        debug!("seat {seat} discards {discarded}");
        self.verify_at_rest(seat)?;

        // 6. Contended reactions. `contended_reactions` fully manages the
        // resulting state transition itself (advance-and-clear-flags on no
        // claim, or seat-to-claimant plus the appropriate flag set on a
        // claim), whether or not the game ends.
        if let Some(outcome) = self.contended_reactions(seat, discarded) {
            return Ok(outcome);
        }
        Ok(StepOutcome::Continue)
    }

    fn try_heavenly_hand(&mut self) -> Option<StepOutcome> {
        let seat = self.state.current_player_id;
        let round_wind = self.state.round_wind;
        let placeholder_tile = self.state.player(seat).hand.first().copied()?;
        let (melds, mut context) = check_win(self.state.player(seat), placeholder_tile, true, round_wind);
        if melds.is_empty() {
            return None;
        }
        let options = MeldOptions { win: Some(melds), ..Default::default() };
        let choice = self.ports[seat.to_usize()].query_meld(&self.state, &options);
        let Choice::Win(accepted) = choice else { return None };

        context.win_condition.insert(WinTag::HeavenlyHand);
        let faan = Scorer::score(&accepted, &context);
        info!("seat {seat} wins with the heavenly hand ({faan} faan)");
        self.state.winning_hand_state = Some(context.clone());
        self.state.flags.done = true;
        Some(StepOutcome::GameOver(GameResult::Win { winner: seat, melds: accepted, context, faan }))
    }

    fn self_options(&mut self, seat: Seat) -> Result<Option<StepOutcome>, StateViolation> {
        let round_wind = self.state.round_wind;
        let drawn_tile = *self.state.player(seat).hand.last().expect("a tile was just drawn");
        let (melds, mut context) = check_win(self.state.player(seat), drawn_tile, true, round_wind);
        let kong_candidates = check_kong(self.state.player(seat), drawn_tile, true);

        if melds.is_empty() && kong_candidates.is_empty() {
            return Ok(None);
        }

        let options = MeldOptions {
            win: (!melds.is_empty()).then(|| melds.clone()),
            kong: kong_candidates.clone(),
            ..Default::default()
        };
        let choice = self.ports[seat.to_usize()].query_meld(&self.state, &options);

        match choice {
            Choice::Win(accepted) => {
                if self.state.wall.is_empty() {
                    context.win_condition.insert(WinTag::LastDraw);
                }
                if self.state.flags.kong {
                    if self.state.flags.double_kong {
                        context.win_condition.insert(WinTag::WinByDoubleKong);
                    } else {
                        context.win_condition.insert(WinTag::WinByKong);
                    }
                }
                let faan = Scorer::score(&accepted, &context);
                info!("seat {seat} self-draws a win ({faan} faan)");
                self.state.winning_hand_state = Some(context.clone());
                self.state.flags.done = true;
                Ok(Some(StepOutcome::GameOver(GameResult::Win { winner: seat, melds: accepted, context, faan })))
            }
            Choice::Kong(meld) => {
                if !kong_candidates.contains(&meld) {
                    warn!("seat {seat} selected a kong not among the offered options, treating as pass");
                    return Ok(None);
                }
                if let Some(outcome) = self.kong_robbery(seat, meld) {
                    return Ok(Some(outcome));
                }
                self.perform_kong(seat, meld);
                self.state.flags.discard = false;
                if self.state.flags.kong {
                    self.state.flags.double_kong = true;
                }
                self.state.flags.kong = true;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Offers every other player, in seating order, the chance to rob a kong
    /// that upgrades an exposed pung. The first acceptance wins.
    fn kong_robbery(&mut self, kong_seat: Seat, meld: Meld) -> Option<StepOutcome> {
        let tile = meld.representative();
        let upgrades_exposed_pung = self.state.player(kong_seat).melds.iter().any(|m| matches!(m, Meld::Pung(t) if *t == tile));
        if !upgrades_exposed_pung {
            return None;
        }
        let round_wind = self.state.round_wind;
        for robber in other_seats_after(kong_seat) {
            let (melds, mut context) = check_win(self.state.player(robber), tile, false, round_wind);
            if melds.is_empty() {
                continue;
            }
            let options = MeldOptions { win: Some(melds.clone()), ..Default::default() };
            if let Choice::Win(accepted) = self.ports[robber.to_usize()].query_meld(&self.state, &options) {
                context.win_condition.insert(WinTag::RobKong);
                if self.state.wall.is_empty() {
                    context.win_condition.insert(WinTag::LastDraw);
                }
                let faan = Scorer::score(&accepted, &context);
                info!("seat {robber} robs seat {kong_seat}'s kong ({faan} faan)");
                self.state.winning_hand_state = Some(context.clone());
                self.state.flags.done = true;
                return Some(StepOutcome::GameOver(GameResult::Win { winner: robber, melds: accepted, context, faan }));
            }
        }
        None
    }

    fn perform_kong(&mut self, seat: Seat, meld: Meld) {
        let tile = meld.representative();
        let player = self.state.player_mut(seat);
        if let Some(pos) = player.melds.iter().position(|m| matches!(m, Meld::Pung(t) if *t == tile)) {
            player.melds[pos] = meld;
            if let Some(hand_pos) = player.hand.iter().position(|&t| t == tile) {
                player.hand.remove(hand_pos);
            }
        } else {
            player.melds.push(meld);
            for _ in 0..4 {
                if let Some(pos) = player.hand.iter().position(|&t| t == tile) {
                    player.hand.remove(pos);
                }
            }
        }
    }

    fn prompt_discard(&mut self, seat: Seat) -> Result<Tile, StateViolation> {
        self.state.phase = Phase::Discard;

        let mut resolved = self.resolve_discard_index(seat);
        if resolved.is_none() {
            warn!("seat {seat} chose an out-of-range discard, re-prompting once");
            resolved = self.resolve_discard_index(seat);
        }
        let tile = match resolved.and_then(|i| self.state.player_mut(seat).take_hand_tile(i)) {
            Some(tile) => tile,
            None => {
                warn!("seat {seat} chose an out-of-range discard twice, forcing the first hand tile");
                self.state.player_mut(seat).take_hand_tile(0).expect("at-rest hands are never empty before a discard")
            }
        };
        self.state.player_mut(seat).discards.push(tile);
        self.state.table.push((seat, tile));
        self.state.phase = Phase::Meld;
        Ok(tile)
    }

    /// Queries `seat` for a discard and translates the answer to an unsorted
    /// hand index, or `None` if the answer was out of range.
    fn resolve_discard_index(&mut self, seat: Seat) -> Option<usize> {
        let hand_len = self.state.player(seat).hand.len();
        let sorted_view = self.ports[seat.to_usize()].query_discard(&self.state, true);
        let player = self.state.player(seat);
        player.unsort_index(sorted_view).or_else(|| (sorted_view < hand_len).then_some(sorted_view))
    }

    fn contended_reactions(&mut self, discarder: Seat, tile: Tile) -> Option<StepOutcome> {
        let round_wind = self.state.round_wind;
        let next_seat = discarder.wrapping_add(1);
        let mut claims: Vec<(Seat, Choice)> = Vec::new();

        for seat in other_seats_after(discarder) {
            let (win_melds, _) = check_win(self.state.player(seat), tile, false, round_wind);
            let kong = check_kong(self.state.player(seat), tile, false);
            let pung = check_pung(self.state.player(seat), tile, false);
            let chow = if seat == next_seat { check_chow(self.state.player(seat), tile, false) } else { Vec::new() };

            let options = MeldOptions {
                win: (!win_melds.is_empty()).then(|| win_melds.clone()),
                kong,
                pung,
                chow,
            };
            if options.is_empty() {
                continue;
            }
            let choice = self.ports[seat.to_usize()].query_meld(&self.state, &options);
            if !matches!(choice, Choice::Pass) {
                claims.push((seat, choice));
            }
        }

        let winner = claims.iter().max_by(|(seat_a, choice_a), (seat_b, choice_b)| {
            choice_a.kind().cmp(&choice_b.kind()).then_with(|| {
                let dist_a = seat_distance(discarder, *seat_a);
                let dist_b = seat_distance(discarder, *seat_b);
                dist_b.cmp(&dist_a) // closer seat wins ties, so smaller distance compares greater
            })
        });

        let Some((claim_seat, claim_choice)) = winner else {
            self.state.current_player_id = next_seat;
            self.state.flags.kong = false;
            self.state.flags.double_kong = false;
            self.state.flags.first = false;
            return None;
        };
        let claim_seat = *claim_seat;

        match claim_choice.clone() {
            Choice::Win(accepted) => {
                let (_, mut context) = check_win(self.state.player(claim_seat), tile, false, round_wind);
                context.win_condition.insert(WinTag::WinByDiscard);
                if self.state.wall.is_empty() {
                    context.win_condition.insert(WinTag::LastDraw);
                }
                if self.state.flags.first {
                    context.win_condition.insert(WinTag::EarthlyHand);
                }
                let faan = Scorer::score(&accepted, &context);
                info!("seat {claim_seat} wins off seat {discarder}'s discard ({faan} faan)");
                self.state.winning_hand_state = Some(context.clone());
                self.state.flags.done = true;
                Some(StepOutcome::GameOver(GameResult::Win { winner: claim_seat, melds: accepted, context, faan }))
            }
            Choice::Kong(meld) => {
                self.claim_discard(discarder, claim_seat, tile, meld);
                if self.state.flags.kong {
                    self.state.flags.double_kong = true;
                }
                self.state.flags.kong = true;
                self.state.current_player_id = claim_seat;
                None
            }
            Choice::Pung(meld) | Choice::Chow(meld) => {
                self.claim_discard(discarder, claim_seat, tile, meld);
                self.state.flags.kong = false;
                self.state.flags.double_kong = false;
                self.state.current_player_id = claim_seat;
                self.state.flags.discard = true;
                None
            }
            Choice::Pass => unreachable!("claims excludes passes"),
        }
    }

    fn claim_discard(&mut self, discarder: Seat, claimant: Seat, tile: Tile, meld: Meld) {
        let removed = self.state.player_mut(discarder).discards.pop();
        debug_assert_eq!(removed, Some(tile));
        let player = self.state.player_mut(claimant);
        // `meld.tiles()` repeats `tile`'s value for a pung/kong, so removing
        // every tile equal to `tile` would also remove the copies that must
        // come out of the claimant's own hand. Drop exactly one occurrence
        // (the discarded tile itself) by position, then pull the rest from
        // the hand.
        let mut from_hand = meld.tiles();
        let claimed_pos = from_hand.iter().position(|&t| t == tile).expect("meld contains the claimed tile");
        from_hand.remove(claimed_pos);
        for t in from_hand {
            if let Some(pos) = player.hand.iter().position(|&h| h == t) {
                player.hand.remove(pos);
            }
        }
        player.melds.push(meld);
    }

    fn verify_tile_conservation(&self) -> Result<(), StateViolation> {
        let accounted = self.state.accounted_tiles();
        let wall = self.state.wall.len();
        if wall + accounted != crate::wall::WALL_SIZE {
            return Err(StateViolation::TileConservation { wall, accounted });
        }
        Ok(())
    }

    /// A player is always at rest immediately after discarding: the tile
    /// that made their hand 14-strong for the moment is gone again.
    fn verify_at_rest(&self, seat: Seat) -> Result<(), StateViolation> {
        let player = self.state.player(seat);
        if !player.is_at_rest() {
            let meld_tiles = player.structural_melds().map(|m| m.tiles().len()).sum();
            return Err(StateViolation::MeldCountInvariant { seat: seat.to_u8(), hand_len: player.hand.len(), meld_tiles });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    struct PassPlayer;
    impl PlayerPort for PassPlayer {
        fn query_meld(&mut self, _state: &GameState, _options: &MeldOptions) -> Choice { Choice::Pass }
        fn query_discard(&mut self, _state: &GameState, _sorted_view: bool) -> usize { 0 }
    }

    #[test]
    fn new_rejects_a_player_count_other_than_four() {
        let ports: Vec<Box<dyn PlayerPort>> = vec![Box::new(PassPlayer), Box::new(PassPlayer)];
        let err = GameEngine::new(ports, EngineConfig::default()).unwrap_err();
        assert_eq!(err, ConfigurationError::WrongPlayerCount(2));
    }

    #[test]
    fn new_accepts_exactly_four_players() {
        let ports: Vec<Box<dyn PlayerPort>> =
            vec![Box::new(PassPlayer), Box::new(PassPlayer), Box::new(PassPlayer), Box::new(PassPlayer)];
        assert!(GameEngine::new(ports, EngineConfig::default()).is_ok());
    }

    /// Claiming a pung from a discard must remove exactly the claimant's own
    /// 2 hand tiles, not all 3 tiles `meld.tiles()` reports (see
    /// `claim_discard`).
    #[test]
    fn claim_discard_removes_only_the_claimants_own_tiles_for_a_pung() {
        let mut engine = GameEngine::new(
            vec![Box::new(PassPlayer), Box::new(PassPlayer), Box::new(PassPlayer), Box::new(PassPlayer)],
            EngineConfig::default(),
        )
        .expect("exactly 4 players were provided");

        let claimant = crate::player::P1;
        let tile = crate::tile::Tile::bamboo(3);
        engine.state.player_mut(claimant).hand = vec![tile, tile];
        let hand_len_before = engine.state.player(claimant).hand.len();
        let meld_len_before = engine.state.player(claimant).melds.len();

        engine.state.player_mut(crate::player::P0).discards.push(tile);
        engine.claim_discard(crate::player::P0, claimant, tile, Meld::Pung(tile));

        let player = engine.state.player(claimant);
        assert_eq!(player.hand.len(), hand_len_before - 2);
        assert_eq!(player.melds.len(), meld_len_before + 1);
        assert!(player.hand.is_empty());
    }
}
