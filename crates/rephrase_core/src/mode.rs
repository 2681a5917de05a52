//! Output contract selection for a rephrase call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which prompt template and response skeleton a call uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Question only.
    Rephrase,
    /// Question plus five synthetic passages.
    #[default]
    RephraseAndChunks,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Rephrase => "rephrase",
            Mode::RephraseAndChunks => "rephrase-and-chunks",
        }
    }

    /// Resolve an optional mode name. Names match exactly; absent and
    /// unrecognized names (including other spellings) fall back to
    /// [`Mode::RephraseAndChunks`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("rephrase") => Mode::Rephrase,
            _ => Mode::default(),
        }
    }

    /// Whether the model is asked for synthetic chunks.
    pub fn wants_chunks(&self) -> bool {
        matches!(self, Mode::RephraseAndChunks)
    }
}

impl FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::from_name(Some(s)))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
