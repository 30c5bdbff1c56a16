/// User-facing intents for the movie list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieListIntent {
    /// Load the first page. Issued automatically at construction; ignored
    /// while an initial load is already in flight.
    LoadInitial,
    /// Re-fetch the first page and replace the list. Deliberately unguarded:
    /// overlapping refreshes race and the last completion wins.
    Refresh,
    /// Fetch the page after `current_page`. Ignored while paginating or once
    /// the catalog is exhausted.
    LoadNextPage,
    /// A movie row was tapped.
    MovieSelected(u64),
    /// Retry after a blocking error; same path as `LoadInitial`.
    Retry,
}
