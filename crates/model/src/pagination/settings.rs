use serde::Deserialize;
use std::num::IntErrorKind;
use tracing::warn;

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Page size bounds for one list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Used when `first` is absent or unusable.
    pub default_limit: u32,
    /// Upper bound for a requested page size.
    pub max_limit: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

impl PageSettings {
    /// Builds settings, pulling inconsistent bounds back into range.
    pub fn new(default_limit: u32, max_limit: u32) -> Self {
        let max = max_limit.max(1);
        let limit = default_limit.clamp(1, max);
        if max != max_limit || limit != default_limit {
            warn!(
                default_limit,
                max_limit, "Adjusted page settings to default={limit}, max={max}"
            );
        }
        Self {
            default_limit: limit,
            max_limit: max,
        }
    }

    /// Re-applies the bounds of [`PageSettings::new`], e.g. after deserializing.
    pub fn validated(self) -> Self {
        Self::new(self.default_limit, self.max_limit)
    }

    /// Interprets a client-supplied `first` parameter.
    ///
    /// Returns `None` when the value is absent, not a number, or not
    /// positive; values above the maximum, however large, are capped.
    pub fn requested_limit(&self, first: Option<&str>) -> Option<u32> {
        let requested = match first?.trim().parse::<i64>() {
            Ok(requested) => requested,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => return Some(self.max_limit),
            Err(_) => return None,
        };
        if requested <= 0 {
            return None;
        }
        Some(requested.min(i64::from(self.max_limit)) as u32)
    }
}
