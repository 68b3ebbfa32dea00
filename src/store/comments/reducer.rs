use std::sync::Arc;

use crate::store::action::{Action, Lifecycle};
use crate::store::comments::state::CommentsState;
use crate::store::mvi::Reducer;

pub struct CommentsReducer;

impl Reducer for CommentsReducer {
    type State = CommentsState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::GetComments(Lifecycle::Pending) | Action::CreateComment(Lifecycle::Pending) => {
                CommentsState {
                    is_loading: true,
                    ..state
                }
            }
            Action::GetComments(Lifecycle::Fulfilled(comments)) => CommentsState {
                comments: Arc::new(comments.clone()),
                is_loading: false,
            },
            Action::CreateComment(Lifecycle::Fulfilled(created)) => {
                let mut comments = state.comments;
                Arc::make_mut(&mut comments).extend(created.iter().cloned());
                CommentsState {
                    comments,
                    is_loading: false,
                }
            }
            Action::GetComments(Lifecycle::Rejected(_))
            | Action::CreateComment(Lifecycle::Rejected(_)) => CommentsState {
                is_loading: false,
                ..state
            },
            _ => state,
        }
    }
}
