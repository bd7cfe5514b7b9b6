//! Core game logic and state management

pub mod accusation;
pub mod exploration;
pub mod scenario;

use crate::config::GameConfig;
use crate::console::{self, Theme};
use crate::data::*;
use crate::{GameError, Result};
use accusation::{AccusationEngine, Verdict};
use chrono::{DateTime, Utc};
use exploration::{ExplorationReport, Explorer};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{info, info_span, warn};

/// One playthrough of the mansion case
#[derive(Debug, Clone)]
pub struct Game {
    /// Session identifier, carried on every log line
    pub id: Id,

    pub config: GameConfig,

    /// Current game phase
    pub phase: GamePhase,

    map: RoomMap,
    index: ClueIndex,
    roster: SuspectRoster,

    /// Clues collected so far
    notebook: ClueCollection,

    /// Suspect named in the accusation, once made
    accused: Option<String>,

    rooms_entered: usize,

    /// Message log (mirrors what was shown to the player)
    pub message_log: Vec<GameMessage>,
}

/// Current phase of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    Accusing,
    GameOver(GameOutcome),
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Confirmed,
    InsufficientEvidence,
    AccusationAbandoned,
}

/// A message kept in the session log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub source: String,
    pub message: String,
}

impl GameMessage {
    pub fn info(source: &str, message: &str) -> Self {
        Self::new(Severity::Info, source, message)
    }

    pub fn new(severity: Severity, source: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            source: source.to_string(),
            message: message.to_string(),
        }
    }
}

impl Game {
    /// Create a new game on the stock mansion
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let map = scenario::build_mansion()?;
        let index = scenario::clue_index(config.bucket_count)?;
        Ok(Self::from_parts(config, map, index, scenario::suspect_roster()))
    }

    /// Create a game on custom content
    pub fn from_parts(config: GameConfig, map: RoomMap, index: ClueIndex, roster: SuspectRoster) -> Self {
        let mut game = Self {
            id: Id::new(),
            config,
            phase: GamePhase::Exploring,
            map,
            index,
            roster,
            notebook: ClueCollection::new(),
            accused: None,
            rooms_entered: 0,
            message_log: Vec::new(),
        };

        info!(
            session = %game.id,
            rooms = game.map.len(),
            buckets = game.index.bucket_count(),
            associations = game.index.len(),
            longest_chain = game.index.longest_chain(),
            "game created"
        );
        game.add_message(GameMessage::info("System", "You arrive at the mansion. Find the culprit."));
        game
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    pub fn map(&self) -> &RoomMap {
        &self.map
    }

    pub fn index(&self) -> &ClueIndex {
        &self.index
    }

    pub fn roster(&self) -> &SuspectRoster {
        &self.roster
    }

    pub fn notebook(&self) -> &ClueCollection {
        &self.notebook
    }

    pub fn accused(&self) -> Option<&str> {
        self.accused.as_deref()
    }

    /// Explore the mansion from the entrance
    pub fn explore<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        theme: &Theme,
    ) -> Result<ExplorationReport> {
        if self.phase != GamePhase::Exploring {
            return Err(GameError::InvalidInput(format!("cannot explore during {:?}", self.phase)).into());
        }

        let mut explorer = Explorer::new(&self.map);
        let report = explorer.run(&mut self.notebook, input, output, theme)?;

        self.rooms_entered += report.rooms_entered;
        let severity = if report.clues_collected > 0 {
            Severity::Discovery
        } else {
            Severity::Info
        };
        self.add_message(GameMessage::new(
            severity,
            "Exploration",
            &format!(
                "Explored {} rooms and collected {} new clues",
                report.rooms_entered, report.clues_collected
            ),
        ));
        self.phase = GamePhase::Accusing;
        Ok(report)
    }

    /// Show the evidence, read the player's accusation and score it
    pub fn accuse<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W, theme: &Theme) -> Result<GameOutcome> {
        if self.phase != GamePhase::Accusing {
            return Err(GameError::InvalidInput(format!("cannot accuse during {:?}", self.phase)).into());
        }

        console::accusation_header(output, theme)?;
        console::collected_clues(output, theme, &self.notebook)?;
        console::roster(output, theme, &self.roster)?;
        console::prompt(output, theme, "👮 Who is the culprit? (enter the number):")?;

        let scored = match console::read_token(input)? {
            Some(token) => accusation::parse_choice(&token).and_then(|choice| self.score(choice)),
            None => Err(GameError::InputClosed),
        };

        let outcome = match scored {
            Ok(verdict) => {
                console::verdict(output, theme, &verdict)?;
                self.accused = Some(verdict.suspect().to_string());
                self.add_message(GameMessage::new(
                    Severity::Verdict,
                    "Accusation",
                    &format!("Accused {} with {} clues", verdict.suspect(), verdict.clue_count()),
                ));
                info!(
                    suspect = verdict.suspect(),
                    clues = verdict.clue_count(),
                    confirmed = verdict.is_confirmed(),
                    "verdict"
                );
                if verdict.is_confirmed() {
                    GameOutcome::Confirmed
                } else {
                    GameOutcome::InsufficientEvidence
                }
            }
            Err(err) => {
                warn!(%err, "accusation abandoned");
                console::invalid_accusation(output, theme, &err.to_string())?;
                self.add_message(GameMessage::new(Severity::Warning, "Accusation", &err.to_string()));
                GameOutcome::AccusationAbandoned
            }
        };

        self.phase = GamePhase::GameOver(outcome);
        Ok(outcome)
    }

    /// Score an accusation against the current notebook
    pub fn score(&self, choice: usize) -> std::result::Result<Verdict, GameError> {
        AccusationEngine::new(&self.notebook, &self.index, &self.roster)
            .with_threshold(self.config.corroboration_threshold)
            .evaluate(choice)
    }

    /// Play the whole case: explore, then accuse
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W, theme: &Theme) -> Result<GameOutcome> {
        let span = info_span!("session", id = %self.id);
        let _guard = span.enter();

        self.explore(input, output, theme)?;
        let outcome = self.accuse(input, output, theme)?;
        console::case_notes(output, theme, &self.message_log)?;
        Ok(outcome)
    }

    /// Check current game status
    pub fn check_status(&self) -> String {
        format!(
            "Phase: {:?} | Rooms entered: {} | Clues: {} | Accused: {}",
            self.phase,
            self.rooms_entered,
            self.notebook.len(),
            self.accused.as_deref().unwrap_or("nobody")
        )
    }

    /// Outcome, once the game is over
    pub fn check_game_over(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}
