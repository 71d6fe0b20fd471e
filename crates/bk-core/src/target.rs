//! Where a barge is sent: back to the origin to reload, or to a vessel.

use std::fmt;

use crate::VesselId;

/// Literal used for the origin in action tags and serialised snapshots.
pub const ORIGIN_TAG: &str = "ORIGIN";

/// The destination of an assignment.
///
/// Also used as a barge's reservation: while a barge holds `Target::Origin`
/// no other barge may be sent to reload, and while it holds
/// `Target::Vessel(v)` no other barge may be sent to `v`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Target {
    /// The resupply point at position 0.
    Origin,
    /// A moored vessel.
    Vessel(VesselId),
}

impl Target {
    #[inline]
    pub fn is_origin(self) -> bool {
        matches!(self, Target::Origin)
    }

    /// The vessel id, or `None` for the origin.
    #[inline]
    pub fn vessel(self) -> Option<VesselId> {
        match self {
            Target::Origin     => None,
            Target::Vessel(id) => Some(id),
        }
    }
}

impl From<VesselId> for Target {
    #[inline]
    fn from(id: VesselId) -> Self {
        Target::Vessel(id)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Origin     => f.write_str(ORIGIN_TAG),
            Target::Vessel(id) => write!(f, "{id}"),
        }
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────
//
// Wire form: the string "ORIGIN" or the bare integer vessel id.

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{ORIGIN_TAG, Target};
    use crate::VesselId;

    impl Serialize for Target {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Target::Origin     => serializer.serialize_str(ORIGIN_TAG),
                Target::Vessel(id) => serializer.serialize_u32(id.0),
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TargetRepr {
        Vessel(u32),
        Marker(String),
    }

    impl<'de> Deserialize<'de> for Target {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match TargetRepr::deserialize(deserializer)? {
                TargetRepr::Vessel(id) => Ok(Target::Vessel(VesselId(id))),
                TargetRepr::Marker(s) if s == ORIGIN_TAG => Ok(Target::Origin),
                TargetRepr::Marker(s) => Err(D::Error::custom(format!(
                    "expected \"{ORIGIN_TAG}\" or a vessel id, got {s:?}"
                ))),
            }
        }
    }
}
