//! Game regions, each served from its own dataset snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A game server region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    /// Japanese server.
    #[default]
    JP,
    /// North American server.
    NA,
    /// Chinese server.
    CN,
    /// Korean server.
    KR,
    /// Taiwanese server.
    TW,
}

impl Region {
    /// Every region.
    pub const ALL: [Region; 5] = [Self::JP, Self::NA, Self::CN, Self::KR, Self::TW];

    /// Upper-case region code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::JP => "JP",
            Self::NA => "NA",
            Self::CN => "CN",
            Self::KR => "KR",
            Self::TW => "TW",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_argument(format!("unknown region: {s}")))
    }
}
