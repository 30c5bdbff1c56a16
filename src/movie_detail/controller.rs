use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::MovieRepository;
use crate::movie_detail::effect::MovieDetailEffect;
use crate::movie_detail::intent::MovieDetailIntent;
use crate::movie_detail::reducer::{MovieDetailReducer, MovieDetailTransition};
use crate::movie_detail::state::MovieDetailState;
use crate::mvi::{ControllerScope, EffectChannel, EffectStream, Reducer};

/// Controller for the movie detail screen.
///
/// The movie id is bound at construction (it comes from the navigation that
/// opened the screen); `Retry` always re-fetches that id. State and effect
/// observation follow the same contract as the list controller.
pub struct MovieDetailController {
    repository: Arc<dyn MovieRepository>,
    movie_id: u64,
    state: watch::Sender<MovieDetailState>,
    effects: EffectChannel<MovieDetailEffect>,
    scope: ControllerScope,
}

impl MovieDetailController {
    /// Construct the controller and kick off the detail load for `movie_id`.
    ///
    /// Must run inside a tokio runtime; the fetch is spawned on it.
    pub fn new(repository: Arc<dyn MovieRepository>, movie_id: u64) -> Self {
        let (state, _) = watch::channel(MovieDetailState::default());
        let controller = Self {
            repository,
            movie_id,
            state,
            effects: EffectChannel::new(),
            scope: ControllerScope::new(),
        };
        controller.handle_intent(MovieDetailIntent::Load(movie_id));
        controller
    }

    /// Subscribe to state snapshots, replay-latest.
    pub fn state(&self) -> watch::Receiver<MovieDetailState> {
        self.state.subscribe()
    }

    /// The current snapshot, for one-off reads.
    pub fn current_state(&self) -> MovieDetailState {
        self.state.borrow().clone()
    }

    /// Claim the single effect stream. `None` once already claimed.
    pub fn effects(&self) -> Option<EffectStream<MovieDetailEffect>> {
        self.effects.subscribe()
    }

    /// Dispatch an intent. Fire-and-forget; never blocks.
    pub fn handle_intent(&self, intent: MovieDetailIntent) {
        match intent {
            MovieDetailIntent::Load(movie_id) => self.load(movie_id),
            MovieDetailIntent::Retry => self.load(self.movie_id),
            MovieDetailIntent::BackRequested => {
                self.effects.emit(MovieDetailEffect::NavigateBack);
            }
        }
    }

    /// Abandon the in-flight fetch; no state mutation can happen afterwards.
    pub fn dispose(&self) {
        self.scope.dispose();
    }

    fn load(&self, movie_id: u64) {
        self.state.send_modify(|state| {
            *state =
                MovieDetailReducer::reduce(state.clone(), MovieDetailTransition::LoadStarted);
        });

        let repository = Arc::clone(&self.repository);
        let state = self.state.clone();
        let scope = self.scope.clone();
        self.scope.spawn(async move {
            let transition = match repository.fetch_detail(movie_id).await {
                Ok(detail) => MovieDetailTransition::LoadSucceeded { detail },
                Err(err) => MovieDetailTransition::LoadFailed {
                    message: err.to_string(),
                },
            };
            if scope.is_disposed() {
                return;
            }
            state.send_modify(|current| {
                *current = MovieDetailReducer::reduce(current.clone(), transition);
            });
        });
    }
}

impl Drop for MovieDetailController {
    fn drop(&mut self) {
        self.scope.dispose();
    }
}
