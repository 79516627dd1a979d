// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Board and rows types.
//!
//! A board has three rows that must be ordered by strength once complete, the
//! back row at least as strong as the middle row and the middle row at least as
//! strong as the front row. A complete board that breaks the ordering is fouled.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    error::ActionError,
    poker::{Card, HandEvaluation, Rank, evaluate},
};

/// The board rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    /// The 3 cards front row.
    Front,
    /// The 5 cards middle row.
    Mid,
    /// The 5 cards back row.
    Back,
}

impl RowKind {
    /// All rows from the front.
    pub const ALL: [RowKind; 3] = [RowKind::Front, RowKind::Mid, RowKind::Back];

    /// Number of slots in the row.
    pub fn capacity(&self) -> usize {
        match self {
            RowKind::Front => 3,
            RowKind::Mid | RowKind::Back => 5,
        }
    }

    /// Checks if this is the front row.
    pub fn is_front(&self) -> bool {
        matches!(self, RowKind::Front)
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RowKind::Front => "front",
            RowKind::Mid => "mid",
            RowKind::Back => "back",
        };

        write!(f, "{name}")
    }
}

/// A row of card slots, once filled a slot is never cleared within a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    kind: RowKind,
    slots: Vec<Option<Card>>,
}

impl Row {
    /// Creates an empty row.
    pub fn new(kind: RowKind) -> Self {
        Self {
            kind,
            slots: vec![None; kind.capacity()],
        }
    }

    /// The row kind.
    pub fn kind(&self) -> RowKind {
        self.kind
    }

    /// The row slots.
    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    /// The cards placed in this row.
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Number of cards in this row.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Checks if the row has no cards.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if all slots hold a card.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The lowest index empty slot.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Checks if a card with this rank is in the row.
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.slots.iter().flatten().any(|c| c.rank() == rank)
    }

    /// Places a card in an empty slot.
    pub fn place(&mut self, slot: usize, card: Card) -> Result<(), ActionError> {
        let row = self.kind;
        match self.slots.get_mut(slot) {
            None => Err(ActionError::SlotOutOfRange { row, slot }),
            Some(s) if s.is_some() => Err(ActionError::SlotOccupied { row, slot }),
            Some(s) => {
                *s = Some(card);
                Ok(())
            }
        }
    }

    /// Evaluates the cards in this row.
    pub fn evaluate(&self) -> HandEvaluation {
        evaluate(&self.cards(), self.kind.is_front())
    }
}

/// A player board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    front: Row,
    mid: Row,
    back: Row,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            front: Row::new(RowKind::Front),
            mid: Row::new(RowKind::Mid),
            back: Row::new(RowKind::Back),
        }
    }
}

impl Board {
    /// The number of cards on a complete board.
    pub const SIZE: usize = 13;

    /// Returns a row.
    pub fn row(&self, kind: RowKind) -> &Row {
        match kind {
            RowKind::Front => &self.front,
            RowKind::Mid => &self.mid,
            RowKind::Back => &self.back,
        }
    }

    fn row_mut(&mut self, kind: RowKind) -> &mut Row {
        match kind {
            RowKind::Front => &mut self.front,
            RowKind::Mid => &mut self.mid,
            RowKind::Back => &mut self.back,
        }
    }

    /// Iterates the rows from the front.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        [&self.front, &self.mid, &self.back].into_iter()
    }

    /// Places a card in a row slot.
    pub fn place(&mut self, kind: RowKind, slot: usize, card: Card) -> Result<(), ActionError> {
        self.row_mut(kind).place(slot, card)
    }

    /// Places a card in the first empty slot of a row, returns the slot index or
    /// `None` if the row is full.
    pub fn place_first_empty(&mut self, kind: RowKind, card: Card) -> Option<usize> {
        let row = self.row_mut(kind);
        let slot = row.first_empty()?;
        row.place(slot, card).ok().map(|_| slot)
    }

    /// Number of cards on the board.
    pub fn placed(&self) -> usize {
        self.rows().map(Row::len).sum()
    }

    /// Number of empty slots on the board.
    pub fn open_slots(&self) -> usize {
        Self::SIZE - self.placed()
    }

    /// Checks if every slot holds a card.
    pub fn is_full(&self) -> bool {
        self.rows().all(Row::is_full)
    }

    /// Checks if a card is on the board.
    pub fn contains(&self, card: Card) -> bool {
        self.rows().any(|r| r.slots().contains(&Some(card)))
    }

    /// Evaluates all rows, the front row without straights and flushes.
    pub fn evaluate(&self) -> BoardEvaluation {
        BoardEvaluation {
            front: self.front.evaluate(),
            mid: self.mid.evaluate(),
            back: self.back.evaluate(),
        }
    }

    /// Checks if the rows break the strength ordering.
    ///
    /// On a partial board this evaluates the cards placed so far, empty rows
    /// evaluate to the lowest hand, so the result is only a preview until the
    /// board is full.
    pub fn is_foul(&self) -> bool {
        self.evaluate().is_foul()
    }
}

/// The evaluation of the three rows of a board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEvaluation {
    /// The front row evaluation.
    pub front: HandEvaluation,
    /// The middle row evaluation.
    pub mid: HandEvaluation,
    /// The back row evaluation.
    pub back: HandEvaluation,
}

impl BoardEvaluation {
    /// Returns a row evaluation.
    pub fn row(&self, kind: RowKind) -> &HandEvaluation {
        match kind {
            RowKind::Front => &self.front,
            RowKind::Mid => &self.mid,
            RowKind::Back => &self.back,
        }
    }

    /// Checks if the rows break the back >= mid >= front ordering.
    pub fn is_foul(&self) -> bool {
        self.back < self.mid || self.mid < self.front
    }
}
