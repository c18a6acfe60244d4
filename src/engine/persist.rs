//! Save files.
//!
//! ## Layout
//!
//! - 4-byte magic `FLIP`
//! - format version, `u16` little-endian
//! - bincode body: rule settings, live table, undo/redo history, RNG state
//!
//! Decoding validates everything before a single byte reaches the engine,
//! so a rejected blob leaves the live game exactly as it was.

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::cards::{Deck, FULL_SET_SIZE};
use crate::core::config::{hand_size_fits, MAX_SEATS, MIN_SEATS};
use crate::core::{GameRngState, PersistError};

use super::history::History;
use super::table::Table;

/// Leading bytes of every save file.
pub const MAGIC: [u8; 4] = *b"FLIP";

/// Current body layout.
pub const FORMAT_VERSION: u16 = 1;

/// Upper bound on a decoded body.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

const HEADER_LEN: usize = MAGIC.len() + 2;

/// Rule settings that travel with a save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RuleSettings {
    pub(crate) hand_size: usize,
    pub(crate) target_score: u32,
    pub(crate) forced_draw_cap: usize,
}

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SaveBody {
    pub(crate) rules: RuleSettings,
    pub(crate) table: Table,
    pub(crate) history: History<Table>,
    pub(crate) rng: GameRngState,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_BODY_BYTES)
        .reject_trailing_bytes()
}

pub(crate) fn encode(body: &SaveBody) -> Result<Vec<u8>, PersistError> {
    let encoded = options().serialize(body).map_err(PersistError::Encode)?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + encoded.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&encoded);
    Ok(bytes)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<SaveBody, PersistError> {
    if bytes.len() < HEADER_LEN || bytes[..MAGIC.len()] != MAGIC {
        return Err(PersistError::BadMagic);
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(version));
    }

    let body: SaveBody = options()
        .deserialize(&bytes[HEADER_LEN..])
        .map_err(PersistError::Decode)?;

    validate_table(&body.table, "table")?;
    validate_rules(&body.rules, body.table.seat_count())?;
    for entry in body.history.iter() {
        validate_table(entry, "history entry")?;
        if entry.seat_count() != body.table.seat_count() {
            return Err(PersistError::Inconsistent(
                "history entry has a different seat count".to_string(),
            ));
        }
    }

    Ok(body)
}

fn validate_rules(rules: &RuleSettings, seats: usize) -> Result<(), PersistError> {
    if rules.hand_size == 0
        || rules.target_score == 0
        || !hand_size_fits(rules.hand_size, seats)
    {
        return Err(PersistError::Inconsistent(format!(
            "invalid rule settings: {:?}",
            rules
        )));
    }
    Ok(())
}

fn validate_table(table: &Table, what: &str) -> Result<(), PersistError> {
    let seats = table.seat_count();
    if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
        return Err(PersistError::Inconsistent(format!(
            "{} has {} seats",
            what, seats
        )));
    }
    if table.current.index() >= seats {
        return Err(PersistError::Inconsistent(format!(
            "{} points at {} of {} seats",
            what, table.current, seats
        )));
    }
    let total = table.total_cards();
    if total != FULL_SET_SIZE {
        return Err(PersistError::Inconsistent(format!(
            "{} holds {} cards, expected {}",
            what, total, FULL_SET_SIZE
        )));
    }
    if !Deck::is_full_set(table.cards()) {
        return Err(PersistError::Inconsistent(format!(
            "{} does not hold the standard card set",
            what
        )));
    }
    if let Some(card) = table.cards().find(|c| c.face() != table.face) {
        return Err(PersistError::Inconsistent(format!(
            "{} shows {} face up on a {} table",
            what,
            card.face(),
            table.face
        )));
    }

    // Only a wild on the discard pile may carry a chosen color, and it must
    // be a color of the face showing.
    let mut held = table
        .deck
        .iter()
        .chain(table.seats.iter().flat_map(|p| p.hand().iter()));
    if held.any(|c| c.chosen_color().is_some()) {
        return Err(PersistError::Inconsistent(format!(
            "{} has a chosen color on a card that was never played",
            what
        )));
    }
    for card in table.discard.iter() {
        if let Some(color) = card.chosen_color() {
            if !card.is_wild() || !color.is_on_palette(table.face) {
                return Err(PersistError::Inconsistent(format!(
                    "{} has {} chosen on {}",
                    what, color, card
                )));
            }
        }
    }
    Ok(())
}
