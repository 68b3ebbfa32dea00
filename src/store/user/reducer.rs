use crate::models::AuthorizationStatus;
use crate::store::action::{Action, Lifecycle};
use crate::store::mvi::Reducer;
use crate::store::user::state::UserState;

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::CheckAuth(Lifecycle::Pending)
            | Action::Login(Lifecycle::Pending)
            | Action::Logout(Lifecycle::Pending) => UserState {
                is_loading: true,
                ..state
            },
            Action::CheckAuth(Lifecycle::Fulfilled(info))
            | Action::Login(Lifecycle::Fulfilled(info)) => UserState {
                user: Some(info.clone()),
                authorization_status: AuthorizationStatus::Auth,
                is_loading: false,
            },
            Action::CheckAuth(Lifecycle::Rejected(_))
            | Action::Login(Lifecycle::Rejected(_))
            | Action::Logout(Lifecycle::Fulfilled(())) => UserState {
                user: None,
                authorization_status: AuthorizationStatus::NoAuth,
                is_loading: false,
            },
            // A failed logout leaves the session as it was.
            Action::Logout(Lifecycle::Rejected(_)) => UserState {
                is_loading: false,
                ..state
            },
            _ => state,
        }
    }
}
