use crate::models::{AuthInfo, AuthorizationStatus};
use crate::store::mvi::SliceState;

/// Session of the current user.
///
/// `user` is `Some` exactly when `authorization_status` is `Auth`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    pub user: Option<AuthInfo>,
    pub authorization_status: AuthorizationStatus,
    pub is_loading: bool,
}

impl SliceState for UserState {}
