//! Exploration mechanics
//!
//! Walks the player through the mansion one room at a time, filing every
//! clue found into the notebook. Rejected input re-displays the same room in
//! a loop; nothing here recurses.

use crate::console::{self, Theme};
use crate::data::{ClueCollection, Room, RoomId, RoomMap, Side};
use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

/// A navigation choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Left,
    Right,
    Stop,
}

impl Move {
    pub fn side(self) -> Option<Side> {
        match self {
            Move::Left => Some(Side::Left),
            Move::Right => Some(Side::Right),
            Move::Stop => None,
        }
    }

    /// Shortcut shown in the move menu
    pub fn key(self) -> &'static str {
        match self {
            Move::Left => "l",
            Move::Right => "r",
            Move::Stop => "s",
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Move::Left),
            "right" | "r" => Ok(Move::Right),
            "stop" | "s" => Ok(Move::Stop),
            other => Err(GameError::InvalidInput(format!("unknown move '{}'", other))),
        }
    }
}

/// Why an exploration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplorationEnd {
    /// The player chose to stop and accuse
    Stopped,
    /// The player walked towards an exit that does not exist
    DeadEnd,
    /// Standard input ran out
    InputClosed,
}

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(RoomId),
    Finished(ExplorationEnd),
}

/// Summary of a finished exploration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationReport {
    pub end: ExplorationEnd,
    pub final_room: RoomId,
    pub rooms_entered: usize,
    pub clues_collected: usize,
    pub rejected_inputs: usize,
}

/// Player position in the mansion
#[derive(Debug, Clone)]
pub struct Explorer<'a> {
    map: &'a RoomMap,
    current: RoomId,
}

impl<'a> Explorer<'a> {
    /// Start at the entrance
    pub fn new(map: &'a RoomMap) -> Self {
        Self {
            map,
            current: map.root(),
        }
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    pub fn current_room(&self) -> &'a Room {
        &self.map[self.current]
    }

    /// Moves offered in the current room; stopping is always possible
    pub fn available_moves(&self) -> Vec<Move> {
        let room = self.current_room();
        let mut moves = Vec::with_capacity(3);
        if room.left().is_some() {
            moves.push(Move::Left);
        }
        if room.right().is_some() {
            moves.push(Move::Right);
        }
        moves.push(Move::Stop);
        moves
    }

    /// File the current room's clue, if any
    ///
    /// Returns the clue and whether it was new to the notebook.
    pub fn collect_clue(&self, notebook: &mut ClueCollection) -> Option<(&'a str, bool)> {
        let clue = self.current_room().clue.as_deref()?;
        Some((clue, notebook.insert(clue)))
    }

    /// Apply a move without any I/O
    ///
    /// Heading towards a missing exit ends the exploration.
    pub fn apply(&mut self, mv: Move) -> Step {
        let Some(side) = mv.side() else {
            return Step::Finished(ExplorationEnd::Stopped);
        };
        match self.map.child(self.current, side) {
            Some(next) => {
                self.current = next;
                Step::Moved(next)
            }
            None => Step::Finished(ExplorationEnd::DeadEnd),
        }
    }

    /// Drive the exploration over a console until it ends
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        notebook: &mut ClueCollection,
        input: &mut R,
        output: &mut W,
        theme: &Theme,
    ) -> Result<ExplorationReport> {
        let mut report = ExplorationReport {
            end: ExplorationEnd::Stopped,
            final_room: self.current,
            rooms_entered: 1,
            clues_collected: 0,
            rejected_inputs: 0,
        };

        loop {
            let room = self.current_room();
            console::room_header(output, theme, &room.name)?;

            if let Some((clue, newly_collected)) = self.collect_clue(notebook) {
                if newly_collected {
                    report.clues_collected += 1;
                    debug!(room = %room.name, clue, "clue collected");
                }
                console::clue_found(output, theme, clue, newly_collected)?;
            }

            console::moves(output, theme, self.map, self.current, &self.available_moves())?;
            console::prompt(output, theme, "Your choice:")?;

            let Some(token) = console::read_token(input)? else {
                report.end = ExplorationEnd::InputClosed;
                break;
            };

            let mv = match token.parse::<Move>() {
                Ok(mv) => mv,
                Err(err) => {
                    debug!(room = %room.name, %err, "navigation input rejected");
                    report.rejected_inputs += 1;
                    console::invalid_move(output, theme, &token)?;
                    continue;
                }
            };

            match self.apply(mv) {
                Step::Moved(_) => report.rooms_entered += 1,
                Step::Finished(end) => {
                    match end {
                        ExplorationEnd::DeadEnd => console::exploration_finished(output, theme)?,
                        _ => console::leaving(output, theme)?,
                    }
                    report.end = end;
                    break;
                }
            }
        }

        report.final_room = self.current;
        info!(
            end = ?report.end,
            rooms = report.rooms_entered,
            clues = report.clues_collected,
            "exploration finished"
        );
        Ok(report)
    }
}
