//! Trait lists.

use serde::Serialize;

/// An individuality trait. Upstream encodes a negated trait as a
/// negative ID.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NiceTrait {
    /// The trait ID, always positive.
    pub id: i64,
    /// True if the trait must be absent.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub negative: bool,
}

impl NiceTrait {
    /// Decodes one raw trait ID.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self {
            id: raw.abs(),
            negative: raw < 0,
        }
    }
}

/// Decodes a raw trait list, keeping order.
#[must_use]
pub fn traits(raw: &[i64]) -> Vec<NiceTrait> {
    raw.iter().copied().map(NiceTrait::from_raw).collect()
}
