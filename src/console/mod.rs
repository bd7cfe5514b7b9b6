//! Console presentation
//!
//! Line-oriented rendering of the game over any `Write` sink, with optional
//! color through crossterm. The engines call into here and never format
//! player-facing text themselves.

use crate::data::{ClueCollection, RoomId, RoomMap, Severity, SuspectRoster};
use crate::game::accusation::Verdict;
use crate::game::exploration::Move;
use crate::game::GameMessage;
use crossterm::style::{Color, Stylize};
use std::io::{self, BufRead, IsTerminal, Write};

/// Color scheme for the game
pub struct Theme {
    pub colored: bool,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub header: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colored: true,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            header: Color::Magenta,
            muted: Color::DarkGrey,
        }
    }
}

impl Theme {
    /// Colors only when stdout is a terminal
    pub fn detect() -> Self {
        Self {
            colored: io::stdout().is_terminal(),
            ..Self::default()
        }
    }

    /// Same text, no escape codes
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn strong(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Startup banner
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════════════╗
║                 🕵  DETECTIVE QUEST  🕵                 ║
╚══════════════════════════════════════════════════════╝
"#;

pub fn banner<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.strong(LOGO, theme.header))?;
    writeln!(out, "{}", theme.paint(&format!("Version {}", crate::VERSION), theme.muted))?;
    writeln!(out, "Explore the mansion, collect clues and unmask the culprit!")?;
    writeln!(out)
}

pub fn room_header<W: Write>(out: &mut W, theme: &Theme, name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.strong(&format!("=== YOU ARE IN: {} ===", name), theme.accent))
}

/// Report the clue lying in the current room
pub fn clue_found<W: Write>(out: &mut W, theme: &Theme, clue: &str, newly_collected: bool) -> io::Result<()> {
    writeln!(out, "🔍 You found a clue: {}", theme.paint(clue, theme.warning))?;
    if newly_collected {
        writeln!(out, "{}", theme.paint("✅ Clue added to your notebook!", theme.success))
    } else {
        writeln!(out, "{}", theme.paint("📒 This clue is already in your notebook.", theme.muted))
    }
}

/// List the moves offered in `room`
pub fn moves<W: Write>(out: &mut W, theme: &Theme, map: &RoomMap, room: RoomId, available: &[Move]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.strong("Where to next?", theme.header))?;
    for &mv in available {
        match mv.side() {
            Some(side) => {
                let Some(child) = map.child(room, side) else {
                    continue;
                };
                writeln!(out, "({}) - Go to {} ({})", mv.key(), map[child].name, side)?;
            }
            None => writeln!(out, "({}) - Stop exploring and make an accusation", mv.key())?,
        }
    }
    Ok(())
}

pub fn prompt<W: Write>(out: &mut W, theme: &Theme, text: &str) -> io::Result<()> {
    write!(out, "\n{} ", theme.strong(text, theme.accent))?;
    out.flush()
}

pub fn invalid_move<W: Write>(out: &mut W, theme: &Theme, token: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme.paint(&format!("❌ '{}' is not a valid choice! Try again.", token), theme.alert)
    )
}

pub fn exploration_finished<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.paint("There is nowhere further to go. End of the exploration!", theme.muted))
}

pub fn leaving<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.paint("🏃 Leaving the exploration...", theme.muted))
}

pub fn accusation_header<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.strong("🎭 ========== ACCUSATION PHASE ==========", theme.header))
}

/// Show the notebook in sorted order
pub fn collected_clues<W: Write>(out: &mut W, theme: &Theme, clues: &ClueCollection) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.strong("📋 Clues collected (in order):", theme.accent))?;
    if clues.is_empty() {
        return writeln!(out, "No clues were collected!");
    }
    for clue in clues {
        writeln!(out, "- {}", clue)?;
    }
    Ok(())
}

pub fn roster<W: Write>(out: &mut W, theme: &Theme, roster: &SuspectRoster) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.strong("🔎 Suspects:", theme.accent))?;
    for (choice, name) in roster.entries() {
        writeln!(out, "{}. {}", choice, name)?;
    }
    Ok(())
}

pub fn invalid_accusation<W: Write>(out: &mut W, theme: &Theme, reason: &str) -> io::Result<()> {
    writeln!(out, "{}", theme.paint(&format!("❌ Invalid accusation! {}", reason), theme.alert))
}

pub fn verdict<W: Write>(out: &mut W, theme: &Theme, verdict: &Verdict) -> io::Result<()> {
    let suspect = verdict.suspect();
    writeln!(out)?;
    writeln!(out, "⚖  You accused: {}", theme.strong(suspect, theme.header))?;
    writeln!(out, "🔍 Clues pointing to {}: {}", suspect, verdict.clue_count())?;
    writeln!(out)?;

    if verdict.is_confirmed() {
        writeln!(out, "{}", theme.strong("🎉 CONGRATULATIONS! The accusation is correct!", theme.success))?;
        writeln!(out, "There is enough evidence to arrest {}!", suspect)
    } else {
        writeln!(out, "{}", theme.strong("💔 WRONG ACCUSATION!", theme.alert))?;
        writeln!(out, "There are not enough clues to support the accusation against {}.", suspect)?;
        writeln!(out, "The real culprit got away...")
    }
}

/// Replay the session log, one line per message
pub fn case_notes<W: Write>(out: &mut W, theme: &Theme, messages: &[GameMessage]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.strong("🗒  Case notes:", theme.accent))?;
    for entry in messages {
        let line = format!("{} [{}] {}", entry.severity.symbol(), entry.source, entry.message);
        let color = match entry.severity {
            Severity::Info => theme.muted,
            Severity::Discovery => theme.warning,
            Severity::Warning => theme.alert,
            Severity::Verdict => theme.header,
        };
        writeln!(out, "{}", theme.paint(&line, color))?;
    }
    Ok(())
}

pub fn farewell<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.paint("👋 Thanks for playing Detective Quest!", theme.accent))
}

/// Read the next non-blank line and return its first word
///
/// `None` means the input is exhausted.
pub fn read_token<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_token_skips_blank_lines() {
        let mut input = Cursor::new("\n   \n  left  extra\nstop\n");
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("left"));
        assert_eq!(read_token(&mut input).unwrap().as_deref(), Some("stop"));
        assert_eq!(read_token(&mut input).unwrap(), None);
    }

    #[test]
    fn test_plain_theme_has_no_escape_codes() {
        let theme = Theme::plain();
        assert_eq!(theme.paint("clue", theme.alert), "clue");
        assert_eq!(theme.strong("clue", theme.alert), "clue");
    }

    #[test]
    fn test_banner_shows_version() {
        let mut out = Vec::new();
        banner(&mut out, &Theme::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("Version {}", crate::VERSION)));
    }

    #[test]
    fn test_moves_lists_only_offered_exits() {
        let mut builder = RoomMap::builder();
        let hall = builder.add_room("Hall", None);
        let attic = builder.add_room("Attic", None);
        builder.link(hall, crate::data::Side::Right, attic).unwrap();
        let map = builder.build(hall).unwrap();

        let mut out = Vec::new();
        moves(&mut out, &Theme::plain(), &map, hall, &[Move::Right, Move::Stop]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(r) - Go to Attic (right)"));
        assert!(!text.contains("(l)"));
        assert!(text.ends_with("(s) - Stop exploring and make an accusation\n"));

        let mut out = Vec::new();
        moves(&mut out, &Theme::plain(), &map, attic, &[Move::Stop]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Go to"));
        assert!(text.contains("(s) - Stop"));
    }

    #[test]
    fn test_case_notes_use_severity_symbols() {
        let log = vec![
            GameMessage::info("System", "You arrive at the mansion."),
            GameMessage::new(Severity::Discovery, "Exploration", "Collected 3 new clues"),
            GameMessage::new(Severity::Verdict, "Accusation", "Accused Pedro with 2 clues"),
        ];
        let mut out = Vec::new();
        case_notes(&mut out, &Theme::plain(), &log).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("ℹ [System] You arrive at the mansion."));
        assert!(text.contains("🔍 [Exploration] Collected 3 new clues"));
        assert!(text.contains("⚖ [Accusation] Accused Pedro with 2 clues"));
    }

    #[test]
    fn test_empty_notebook_message() {
        let mut out = Vec::new();
        collected_clues(&mut out, &Theme::plain(), &ClueCollection::new()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No clues were collected!"));
    }
}
