//! CLI configuration, read from `tactica.toml` in the working directory.
//! Missing file or missing keys fall back to defaults.

use serde::Deserialize;
use tactica_core::Color;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search depth in plies
    pub depth: u8,
    /// Opening book location
    pub book_path: String,
    /// Append played moves to the book and save it on exit
    pub record_book: bool,
    /// Side the engine plays: "white", "black", or "none" for two players
    pub ai_plays: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: 3,
            book_path: "opening_book.json".into(),
            record_book: false,
            ai_plays: "black".into(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("Warning: ignoring bad config {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Which color the engine plays, if any.
    pub fn ai_side(&self) -> Option<Color> {
        match self.ai_plays.to_lowercase().as_str() {
            "white" | "w" => Some(Color::White),
            "black" | "b" => Some(Color::Black),
            _ => None,
        }
    }
}
