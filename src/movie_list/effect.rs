use crate::mvi::Effect;

/// One-shot notifications from the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieListEffect {
    NavigateToDetail(u64),
}

impl Effect for MovieListEffect {}
