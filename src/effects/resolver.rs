//! Effect resolution - executing effects on the table.
//!
//! The `EffectResolver` applies one card's effect to the table right after
//! the card lands on the discard pile. Resolution never fails: draws that
//! run into an exhausted deck keep whatever was drawn and report the
//! shortfall instead of rolling back.

use tracing::debug;

use crate::cards::Color;
use crate::core::SeatId;
use crate::engine::Table;

use super::Effect;

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ResolveResult {
    /// Effect resolved completely.
    Resolved,
    /// The face flipped; observers need a fresh snapshot.
    Flipped,
    /// The playing seat acts again.
    KeepTurn,
    /// A forced draw was cut short by an empty deck or the draw cap.
    /// Cards already drawn stay drawn.
    Degraded(String),
}

/// Resolves effects on the table.
pub(crate) struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` for the card just played by the current seat.
    ///
    /// `forced_draw_cap` bounds `DrawUntilColor`.
    pub(crate) fn resolve(
        table: &mut Table,
        effect: &Effect,
        forced_draw_cap: usize,
    ) -> ResolveResult {
        match *effect {
            Effect::None => ResolveResult::Resolved,

            Effect::Skip => {
                table.advance();
                ResolveResult::Resolved
            }

            Effect::Reverse => {
                table.direction = table.direction.reversed();
                if table.seat_count() == 2 {
                    table.advance();
                }
                ResolveResult::Resolved
            }

            Effect::Draw {
                count,
                extra_advances,
            } => {
                table.advance();
                let victim = table.current;
                let drawn = Self::draw_cards(table, victim, count);
                for _ in 0..extra_advances {
                    table.advance();
                }

                debug!(%victim, drawn, count, "forced draw");
                if drawn < count {
                    ResolveResult::Degraded(format!(
                        "deck exhausted: {} drew {} of {} cards",
                        victim, drawn, count
                    ))
                } else {
                    ResolveResult::Resolved
                }
            }

            Effect::Flip => {
                table.flip_all();
                debug!(face = %table.face, "table flipped");
                ResolveResult::Flipped
            }

            Effect::SkipEveryone => ResolveResult::KeepTurn,

            Effect::DrawUntilColor { color } => {
                table.advance();
                let victim = table.current;
                match color {
                    Some(color) => Self::draw_until(table, victim, color, forced_draw_cap),
                    None => ResolveResult::Resolved,
                }
            }
        }
    }

    /// Draw up to `count` cards into `seat`. Returns the number drawn.
    fn draw_cards(table: &mut Table, seat: SeatId, count: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            if table.draw_into(seat).is_none() {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    fn draw_until(table: &mut Table, seat: SeatId, color: Color, cap: usize) -> ResolveResult {
        for drawn in 0..cap {
            let Some(card) = table.draw_into(seat) else {
                debug!(%seat, drawn, %color, "deck exhausted before color showed");
                return ResolveResult::Degraded(format!(
                    "deck exhausted: {} drew {} cards without finding {}",
                    seat, drawn, color
                ));
            };
            if card.color() == color {
                debug!(%seat, drawn = drawn + 1, %color, "draw until color");
                return ResolveResult::Resolved;
            }
        }

        debug!(%seat, cap, %color, "forced draw cap reached");
        ResolveResult::Degraded(format!(
            "{} drew the maximum of {} cards without finding {}",
            seat, cap, color
        ))
    }
}
