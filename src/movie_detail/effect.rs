use crate::mvi::Effect;

/// One-shot notifications from the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieDetailEffect {
    NavigateBack,
}

impl Effect for MovieDetailEffect {}
