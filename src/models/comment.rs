use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::user::User;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const MIN_COMMENT_LENGTH: usize = 50;
pub const MAX_COMMENT_LENGTH: usize = 300;

/// A review left on an offer. Never mutated after it is received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// ISO-8601 timestamp.
    pub date: String,
    pub user: User,
    pub comment: String,
    pub rating: u8,
}

/// Body of `POST /comments/{offerId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentPayload {
    pub comment: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("rating must be between {MIN_RATING} and {MAX_RATING}, got {0}")]
    RatingOutOfRange(u8),

    #[error("review must be at least {MIN_COMMENT_LENGTH} characters, got {0}")]
    TooShort(usize),

    #[error("review must be at most {MAX_COMMENT_LENGTH} characters, got {0}")]
    TooLong(usize),
}

/// Input of the create-comment action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub offer_id: String,
    pub rating: u8,
    pub comment: String,
}

impl CommentDraft {
    /// Review form rules. Callers check a draft before submitting it;
    /// the create-comment action itself posts whatever it is given.
    pub fn validate(&self) -> Result<(), DraftError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(DraftError::RatingOutOfRange(self.rating));
        }

        let len = self.comment.trim().chars().count();
        if len < MIN_COMMENT_LENGTH {
            return Err(DraftError::TooShort(len));
        }
        if len > MAX_COMMENT_LENGTH {
            return Err(DraftError::TooLong(len));
        }

        Ok(())
    }

    pub fn payload(&self) -> CommentPayload {
        CommentPayload {
            comment: self.comment.trim().to_string(),
            rating: self.rating,
        }
    }
}
