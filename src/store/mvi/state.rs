/// Bound for the value a slice reducer owns.
///
/// Slices keep their lists behind `Arc`, so a clone is a few pointer copies
/// and an untouched list keeps its identity across dispatches.
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
