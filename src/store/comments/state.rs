use std::sync::Arc;

use crate::models::Comment;
use crate::store::mvi::SliceState;

/// Reviews of the currently opened offer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentsState {
    pub comments: Arc<Vec<Comment>>,
    pub is_loading: bool,
}

impl SliceState for CommentsState {}
