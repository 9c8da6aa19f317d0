//! Chat command parsing.

use storage::{MoodFilter, ANY_MOOD};

use crate::access::Role;

/// Reply keyboard shown by `/start` and `/menu`.
pub const MENU_ROWS: [[&str; 2]; 2] = [["/romantic", "/sad"], ["/hope", "/shayari"]];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/upload [mood]`: wait for a voice note tagged with `mood` (default "any").
    Upload { mood: String },
    /// `/addtext <mood> <text>`.
    AddText { mood: String, text: String },
    /// `/addtext` without both arguments.
    AddTextUsage,
    /// `/start` or `/menu`.
    Menu,
    /// `/shayari`, `/romantic`, `/sad`, `/hope`.
    Deliver(MoodFilter),
    /// `/stats`: jar counts per mood.
    Stats,
}

/// Splits off the first whitespace-separated word; the rest keeps its inner spacing.
fn split_first_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

impl Command {
    /// Parses a message text. Returns None for anything that is not one of the bot's commands.
    /// A `@botname` suffix on the command is accepted and ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let (head, args) = split_first_word(text);
        let name = head.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);

        let command = match name {
            "upload" => {
                let (mood, _) = split_first_word(args);
                Self::Upload {
                    mood: if mood.is_empty() { ANY_MOOD } else { mood }.to_string(),
                }
            }
            "addtext" => {
                let (mood, text) = split_first_word(args);
                if mood.is_empty() || text.is_empty() {
                    Self::AddTextUsage
                } else {
                    Self::AddText {
                        mood: mood.to_string(),
                        text: text.to_string(),
                    }
                }
            }
            "start" | "menu" => Self::Menu,
            "shayari" => Self::Deliver(MoodFilter::Any),
            "romantic" | "sad" | "hope" => Self::Deliver(MoodFilter::parse(name)),
            "stats" => Self::Stats,
            _ => return None,
        };
        Some(command)
    }

    pub fn required_role(&self) -> Role {
        match self {
            Self::Upload { .. } | Self::AddText { .. } | Self::AddTextUsage | Self::Stats => {
                Role::Admin
            }
            Self::Menu | Self::Deliver(_) => Role::Recipient,
        }
    }
}
