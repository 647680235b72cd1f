use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resumption point handed to clients between list requests.
///
/// The token is a base64url (unpadded) encoding of `{"offset":o,"limit":l}`.
/// Nothing is stored server side, so decoding the token is all it takes to
/// resume.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: u64,
    pub limit: u32,
}

/// Which way a cursor is being followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    After,
    Before,
}

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("cursor is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("cursor payload is malformed: {0}")]
    Format(#[from] serde_json::Error),

    /// The payload decoded but points before the first row.
    #[error("cursor offset {offset} is negative")]
    Negative { offset: i64 },

    #[error("cursor limit must be positive, got {limit}")]
    BadLimit { limit: i64 },
}

/// Wire shape, signed so that negative offsets can be recognised instead of
/// failing as a type mismatch.
#[derive(Deserialize)]
struct RawCursor {
    offset: i64,
    limit: i64,
}

impl Cursor {
    pub fn new(offset: u64, limit: u32) -> Self {
        Self { offset, limit }
    }

    pub fn encode(&self) -> Result<String, CursorError> {
        let json = serde_json::to_vec(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
        let raw: RawCursor = serde_json::from_slice(&bytes)?;

        if raw.offset < 0 {
            return Err(CursorError::Negative { offset: raw.offset });
        }
        let limit = u32::try_from(raw.limit)
            .ok()
            .filter(|l| *l > 0)
            .ok_or(CursorError::BadLimit { limit: raw.limit })?;

        Ok(Self {
            offset: raw.offset as u64,
            limit,
        })
    }

    /// Moves one page of `limit` rows in `direction`.
    ///
    /// Returns `None` when stepping backwards would land before the first
    /// row; there is no page in that direction.
    pub fn step(&self, direction: Direction, limit: u32) -> Option<Cursor> {
        let offset = match direction {
            Direction::After => self.offset.checked_add(u64::from(limit))?,
            Direction::Before => self.offset.checked_sub(u64::from(limit))?,
        };
        Some(Cursor { offset, limit })
    }
}
