//! The game engine: intents in, snapshots and notifications out.
//!
//! ## Turn flow
//!
//! The seat to act either plays a legal card or draws. A play resolves the
//! card's effect and marks the turn as taken; a draw marks it taken unless
//! the drawn card is itself playable. `end_turn` then passes control along
//! the current direction.
//!
//! ## History
//!
//! Every accepted mutating intent records a full copy of the table before
//! it runs. Rejected intents record nothing.
//!
//! ## AI seats
//!
//! Whenever control lands on an AI seat with a fresh turn the engine arms a
//! `ScheduledTurn`. Hosts call `tick` from their event loop, or
//! `run_ai_turns` to play AI seats back-to-back.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::ai::{AiMove, MoveSelector};
use crate::cards::{Card, Color, Deck, Rank};
use crate::core::{
    ConfigError, Difficulty, EngineConfig, EngineError, GameRng, GameState, PersistError, Phase,
    Player, SeatConfig, SeatId,
};
use crate::effects::{Effect, EffectResolver, ResolveResult};
use crate::events::{GameEvent, GameListener, ListenerId, Listeners};

use super::history::History;
use super::persist::{self, RuleSettings, SaveBody};
use super::scheduler::ScheduledTurn;
use super::table::Table;

/// What an accepted play led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The round goes on. `reopened` is set when the player acts again
    /// (skip everyone) instead of ending the turn.
    Played { reopened: bool },

    /// The play emptied the hand; a new round has been dealt.
    RoundWon { winner: SeatId, points: u32 },

    /// The play emptied the hand and reached the target score.
    GameWon { winner: SeatId, points: u32 },
}

/// Rules-enforcing engine for one table.
#[derive(Debug)]
pub struct GameEngine {
    config: EngineConfig,
    table: Table,
    history: History<Table>,
    rng: GameRng,
    listeners: Listeners,
    pending_ai: Option<ScheduledTurn>,
}

impl GameEngine {
    /// Build an engine. Nothing is dealt until `start_game`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Deck::new(&mut rng);
        let players = config.seats.iter().map(SeatConfig::to_player).collect();

        Ok(Self {
            table: Table::new(players, deck),
            history: History::new(),
            rng,
            listeners: Listeners::new(),
            pending_ai: None,
            config,
        })
    }

    /// Build an engine whose first round is dealt from `deck`.
    ///
    /// `deck` must be a fresh full set (see `Deck::with_top_cards`); later
    /// rounds use freshly shuffled decks.
    pub fn with_deck(config: EngineConfig, deck: Deck) -> Result<Self, ConfigError> {
        if !deck.is_fresh() {
            return Err(ConfigError::IncompleteDeck { cards: deck.len() });
        }
        let mut engine = Self::new(config)?;
        engine.table.deck = deck;
        Ok(engine)
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Fresh snapshot of the table.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.table.snapshot()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cards across deck, hands and discard pile. Always the full set.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.table.total_cards()
    }

    /// The whole discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> Vec<Card> {
        self.table.discard.iter().copied().collect()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// The AI turn waiting to run, if any.
    #[must_use]
    pub fn pending_ai_turn(&self) -> Option<ScheduledTurn> {
        self.pending_ai
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    pub fn add_listener(&mut self, listener: impl GameListener + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn emit(&mut self, event: GameEvent) {
        self.listeners.notify(&event);
    }

    fn emit_state(&mut self) {
        let state = self.table.snapshot();
        self.emit(GameEvent::StateUpdated(state));
    }

    /// Log and report a rejected intent.
    fn reject(&mut self, err: EngineError) -> EngineError {
        warn!(error = %err, "intent rejected");
        self.emit(GameEvent::Error(err.to_string()));
        err
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Deal the first round and notify `on_initialized`.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        if self.table.phase != Phase::NotStarted {
            return Err(self.reject(EngineError::AlreadyStarted));
        }

        let deck = std::mem::take(&mut self.table.deck);
        self.table.deal_round(deck, self.config.hand_size);
        self.history.clear();

        info!(seats = self.table.seat_count(), "game started");
        let state = self.table.snapshot();
        self.emit(GameEvent::Initialized(state));
        self.schedule_ai();
        Ok(())
    }

    /// Zero every score and deal a fresh round. Allowed in any phase and
    /// recorded in history.
    pub fn restart_game(&mut self) {
        self.history.record(self.table.clone());

        for player in &mut self.table.seats {
            player.reset_score();
        }
        let deck = Deck::new(&mut self.rng);
        self.table.deal_round(deck, self.config.hand_size);

        info!("game restarted");
        let state = self.table.snapshot();
        self.emit(GameEvent::Initialized(state));
        self.schedule_ai();
    }

    /// Check that `seat` may play or draw right now.
    fn check_turn(&self, seat: SeatId) -> Result<(), EngineError> {
        self.check_in_progress()?;
        if seat != self.table.current {
            return Err(EngineError::NotYourTurn {
                seat,
                current: self.table.current,
            });
        }
        if self.table.turn_acted {
            return Err(EngineError::TurnAlreadyActed);
        }
        Ok(())
    }

    fn check_in_progress(&self) -> Result<(), EngineError> {
        match self.table.phase {
            Phase::InProgress => Ok(()),
            Phase::NotStarted => Err(EngineError::NotStarted),
            Phase::GameOver => Err(EngineError::GameOver),
        }
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Play the card at `index` from `seat`'s hand.
    ///
    /// `color` declares the color of a wild and must come from the active
    /// face's palette; a forced-color draw card requires one. It is ignored
    /// for non-wild cards.
    pub fn play_card(
        &mut self,
        seat: SeatId,
        index: usize,
        color: Option<Color>,
    ) -> Result<PlayOutcome, EngineError> {
        if let Err(err) = self.validate_play(seat, index, color) {
            return Err(self.reject(err));
        }

        self.history.record(self.table.clone());
        self.pending_ai = None;

        let Some(mut played) = self.table.player_mut(seat).take_card(index) else {
            return Err(self.reject(EngineError::InvalidHandIndex {
                index,
                hand_size: card_count(&self.table, seat),
            }));
        };
        if played.is_wild() {
            if let Some(color) = color {
                played.set_chosen_color(color);
            }
        }
        self.table.discard.push_back(played);
        debug!(%seat, index, card = %played, "card played");
        self.emit_state();

        if self.table.player(seat).hand_size() == 0 {
            return Ok(self.finish_round(seat));
        }

        let effect = Effect::of(&played);
        let result = EffectResolver::resolve(&mut self.table, &effect, self.config.forced_draw_cap);
        if !effect.is_none() {
            debug!(?effect, ?result, "effect resolved");
        }

        let reopened = result == ResolveResult::KeepTurn;
        self.table.turn_acted = !reopened;
        match result {
            ResolveResult::Flipped => self.emit_state(),
            ResolveResult::Degraded(message) => {
                warn!(%message, "forced draw cut short");
                self.emit(GameEvent::Error(message));
            }
            ResolveResult::Resolved | ResolveResult::KeepTurn => {}
        }
        self.emit_state();

        if reopened {
            self.schedule_ai();
        }
        Ok(PlayOutcome::Played { reopened })
    }

    fn validate_play(
        &self,
        seat: SeatId,
        index: usize,
        color: Option<Color>,
    ) -> Result<(), EngineError> {
        self.check_turn(seat)?;

        let hand = self.table.player(seat).hand();
        let card = *hand.get(index).ok_or(EngineError::InvalidHandIndex {
            index,
            hand_size: hand.len(),
        })?;

        if let Some(top) = self.table.top_discard() {
            if !self.table.is_playable(&card) {
                return Err(EngineError::IllegalPlay { card, top: *top });
            }
        }

        if card.is_wild() {
            match color {
                Some(color) if !color.is_on_palette(self.table.face) => {
                    return Err(EngineError::InvalidColor {
                        color,
                        face: self.table.face,
                    });
                }
                None if card.rank() == Rank::WildDrawColor => {
                    return Err(EngineError::ColorRequired);
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Score the round for `winner`, then either end the game or deal again.
    fn finish_round(&mut self, winner: SeatId) -> PlayOutcome {
        let points: u32 = SeatId::all(self.table.seat_count())
            .filter(|&seat| seat != winner)
            .map(|seat| self.table.player(seat).hand_value())
            .sum();
        self.table.player_mut(winner).add_score(points);
        let score = self.table.player(winner).score();

        info!(%winner, points, score, "round won");
        let state = self.table.snapshot();
        self.emit(GameEvent::RoundWon {
            winner,
            points,
            state,
        });

        if score >= self.config.target_score {
            self.table.phase = Phase::GameOver;
            self.pending_ai = None;
            info!(%winner, score, "game won");
            let state = self.table.snapshot();
            self.emit(GameEvent::GameWon { winner, state });
            return PlayOutcome::GameWon { winner, points };
        }

        let deck = Deck::new(&mut self.rng);
        self.table.deal_round(deck, self.config.hand_size);
        self.emit_state();
        self.schedule_ai();
        PlayOutcome::RoundWon { winner, points }
    }

    /// Draw one card for `seat` and return a copy of it.
    ///
    /// The turn stays open when the drawn card can be played right away.
    pub fn draw_card(&mut self, seat: SeatId) -> Result<Card, EngineError> {
        if let Err(err) = self.check_turn(seat) {
            return Err(self.reject(err));
        }
        if self.table.deck.is_empty() {
            return Err(self.reject(EngineError::DeckEmpty));
        }

        self.history.record(self.table.clone());
        self.pending_ai = None;

        let Some(card) = self.table.draw_into(seat) else {
            return Err(self.reject(EngineError::DeckEmpty));
        };
        let playable = self.table.is_playable(&card);
        self.table.turn_acted = !playable;
        debug!(%seat, card = %card, playable, "card drawn");

        self.emit_state();
        Ok(card)
    }

    /// Pass control to the next seat and return it.
    pub fn end_turn(&mut self) -> Result<SeatId, EngineError> {
        if let Err(err) = self.check_in_progress() {
            return Err(self.reject(err));
        }

        self.history.record(self.table.clone());
        self.table.advance();
        self.table.turn_acted = false;

        let seat = self.table.current;
        debug!(%seat, "turn advanced");
        let state = self.table.snapshot();
        self.emit(GameEvent::TurnAdvanced { seat, state });
        self.schedule_ai();
        Ok(seat)
    }

    /// Restore the table before the last recorded intent. Returns `false`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(self.table.clone()) else {
            return false;
        };
        self.table = previous;
        debug!(undo = self.history.undo_depth(), redo = self.history.redo_depth(), "undo");
        self.emit_state();
        self.schedule_ai();
        true
    }

    /// Reapply the last undone intent. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(self.table.clone()) else {
            return false;
        };
        self.table = next;
        debug!(undo = self.history.undo_depth(), redo = self.history.redo_depth(), "redo");
        self.emit_state();
        self.schedule_ai();
        true
    }

    // =========================================================================
    // AI turns
    // =========================================================================

    /// Arm a turn for the current seat if it is an AI with a fresh turn;
    /// otherwise disarm.
    fn schedule_ai(&mut self) {
        self.pending_ai = if self.ai_may_act(self.table.current) {
            Some(ScheduledTurn::new(
                self.table.current,
                Instant::now(),
                self.config.ai_delay,
            ))
        } else {
            None
        };
    }

    fn ai_may_act(&self, seat: SeatId) -> bool {
        self.table.phase == Phase::InProgress
            && self.table.current == seat
            && !self.table.turn_acted
            && self.table.player(seat).is_ai()
    }

    /// Run the pending AI turn if it is due at `now`. Returns whether a
    /// turn ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(turn) = self.pending_ai else {
            return false;
        };
        if !self.ai_may_act(turn.seat) {
            self.pending_ai = None;
            return false;
        }
        if !turn.is_due(now) {
            return false;
        }

        self.pending_ai = None;
        self.run_ai_turn(turn.seat);
        true
    }

    /// Run pending AI turns back-to-back, ignoring the thinking delay, until
    /// a human seat has control or `limit` turns have run. Returns the number
    /// of turns run.
    pub fn run_ai_turns(&mut self, limit: usize) -> usize {
        let mut ran = 0;
        while ran < limit {
            let Some(turn) = self.pending_ai.take() else {
                break;
            };
            if !self.ai_may_act(turn.seat) {
                break;
            }
            self.run_ai_turn(turn.seat);
            ran += 1;
        }
        ran
    }

    fn run_ai_turn(&mut self, seat: SeatId) {
        let Some(difficulty) = self.table.player(seat).difficulty() else {
            return;
        };

        let state = self.table.snapshot();
        let choice = difficulty.select_move(&state, &mut self.rng);
        debug!(%seat, ?difficulty, ?choice, "ai move");

        match choice {
            AiMove::Play(index) => self.ai_play(seat, difficulty, index),
            AiMove::Draw => match self.draw_card(seat) {
                Ok(_) if !self.table.turn_acted => {
                    let last = card_count(&self.table, seat).saturating_sub(1);
                    self.ai_play(seat, difficulty, last);
                }
                Ok(_) | Err(_) => self.ai_end_turn(),
            },
        }
    }

    fn ai_play(&mut self, seat: SeatId, difficulty: Difficulty, index: usize) {
        let hand = self.table.player(seat).hand().clone();
        let color = match hand.get(index) {
            Some(card) if card.is_wild() => {
                Some(difficulty.choose_color(&hand, self.table.face, &mut self.rng))
            }
            _ => None,
        };

        match self.play_card(seat, index, color) {
            Ok(PlayOutcome::Played { reopened: true })
            | Ok(PlayOutcome::RoundWon { .. })
            | Ok(PlayOutcome::GameWon { .. }) => {}
            Ok(PlayOutcome::Played { reopened: false }) | Err(_) => self.ai_end_turn(),
        }
    }

    fn ai_end_turn(&mut self) {
        if let Err(err) = self.end_turn() {
            debug!(error = %err, "ai could not end its turn");
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Encode the whole game: table, history and RNG position.
    pub fn save(&self) -> Result<Vec<u8>, PersistError> {
        let body = SaveBody {
            rules: RuleSettings {
                hand_size: self.config.hand_size,
                target_score: self.config.target_score,
                forced_draw_cap: self.config.forced_draw_cap,
            },
            table: self.table.clone(),
            history: self.history.clone(),
            rng: self.rng.state(),
        };
        let bytes = persist::encode(&body)?;
        info!(bytes = bytes.len(), "game saved");
        Ok(bytes)
    }

    /// Replace the whole game with a saved one.
    ///
    /// Seats are taken from the save, not from this engine's configuration.
    /// On error the engine is left untouched.
    pub fn load(&mut self, bytes: &[u8]) -> Result<GameState, PersistError> {
        let body = match persist::decode(bytes) {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "load rejected");
                return Err(err);
            }
        };

        self.config.hand_size = body.rules.hand_size;
        self.config.target_score = body.rules.target_score;
        self.config.forced_draw_cap = body.rules.forced_draw_cap;
        self.config.seats = body
            .table
            .seats
            .iter()
            .map(|p: &Player| SeatConfig {
                name: p.name().to_string(),
                kind: p.kind(),
            })
            .collect();
        self.table = body.table;
        self.history = body.history;
        self.rng = GameRng::from_state(&body.rng);

        info!(seats = self.table.seat_count(), phase = ?self.table.phase, "game loaded");
        self.emit_state();
        self.schedule_ai();
        Ok(self.table.snapshot())
    }

    /// `save` straight to a file.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let bytes = self.save()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// `load` straight from a file.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<GameState, PersistError> {
        let bytes = std::fs::read(path)?;
        self.load(&bytes)
    }
}

fn card_count(table: &Table, seat: SeatId) -> usize {
    table.player(seat).hand_size()
}
