use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "snek";
const SCORE_FILE_NAME: &str = "scores.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Best score persisted as JSON between sessions.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
    /// Best score as it stood when the current game began.
    reference: u32,
}

impl HighScoreStore {
    /// Opens the store at the default location.
    ///
    /// A missing file means a first run and starts at zero. An unreadable or
    /// malformed file is logged and also starts at zero; it is overwritten on
    /// the next new record.
    #[must_use]
    pub fn open_default() -> Self {
        Self::open(scores_path())
    }

    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let best = match load_from_path(&path) {
            Ok(best) => best,
            Err(error) => {
                log::warn!("ignoring high score file {}: {error}", path.display());
                0
            }
        };

        Self {
            path,
            best,
            reference: best,
        }
    }

    #[must_use]
    pub fn best(&self) -> u32 {
        self.best
    }

    /// The score a finished game is compared against on the game-over screen.
    ///
    /// Stays fixed while a game is played and recorded, so a record set by
    /// that game still reads as new until [`Self::begin_game`] is called.
    #[must_use]
    pub fn reference(&self) -> u32 {
        self.reference
    }

    /// Marks the start of a new game.
    pub fn begin_game(&mut self) {
        self.reference = self.best;
    }

    /// Records a finished game's score; writes the file only on a new record.
    ///
    /// Returns whether `score` beat the previous best.
    pub fn record(&mut self, score: u32) -> io::Result<bool> {
        if score <= self.best {
            return Ok(false);
        }

        self.best = score;
        save_to_path(&self.path, score)?;
        log::info!("new high score {score}");
        Ok(true)
    }
}

fn load_from_path(path: &Path) -> io::Result<u32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    serde_json::from_str::<ScoreFile>(&raw)
        .map(|file| file.high_score)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn save_to_path(path: &Path, score: u32) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}
