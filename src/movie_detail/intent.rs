/// User-facing intents for the movie detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieDetailIntent {
    /// Fetch the detail record for the given id. Issued automatically at
    /// construction with the controller's bound id.
    Load(u64),
    /// Re-fetch the bound id after a failure.
    Retry,
    /// The back affordance was tapped.
    BackRequested,
}
