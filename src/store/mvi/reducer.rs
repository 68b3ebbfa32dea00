use super::intent::Intent;
use super::state::SliceState;

/// One slice's transition function.
///
/// `reduce` takes the old slice by value and returns the next one. It must
/// not perform I/O. The intent is borrowed since the root reducer offers
/// the same action to all slices.
pub trait Reducer {
    type State: SliceState;
    type Intent: Intent;

    /// Actions the slice ignores hand back `state` as it came in.
    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State;
}
