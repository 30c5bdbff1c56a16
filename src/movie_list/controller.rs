use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::MovieRepository;
use crate::movie_list::effect::MovieListEffect;
use crate::movie_list::intent::MovieListIntent;
use crate::movie_list::reducer::{MovieListReducer, MovieListTransition};
use crate::movie_list::state::MovieListState;
use crate::mvi::{ControllerScope, EffectChannel, EffectStream, Reducer};

/// Controller for the movie list screen.
///
/// Owns its [`MovieListState`] exclusively: renderers observe it through the
/// watch channel (new subscribers get the current snapshot immediately) and
/// feed intents back through [`handle_intent`](Self::handle_intent), which is
/// synchronous and safe to call from the event loop at any time.
///
/// Guard checks and their `*Started` transitions apply atomically inside one
/// watch mutation before the fetch task spawns, so a burst of identical
/// intents cannot start duplicate fetches. Completions from two in-flight
/// fetches apply in completion order: the last to resolve wins.
pub struct MovieListController {
    repository: Arc<dyn MovieRepository>,
    state: watch::Sender<MovieListState>,
    effects: EffectChannel<MovieListEffect>,
    scope: ControllerScope,
}

impl MovieListController {
    /// Construct the controller and kick off the initial load.
    ///
    /// Must run inside a tokio runtime; fetches are spawned on it.
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        let (state, _) = watch::channel(MovieListState::default());
        let controller = Self {
            repository,
            state,
            effects: EffectChannel::new(),
            scope: ControllerScope::new(),
        };
        controller.handle_intent(MovieListIntent::LoadInitial);
        controller
    }

    /// Subscribe to state snapshots, replay-latest.
    pub fn state(&self) -> watch::Receiver<MovieListState> {
        self.state.subscribe()
    }

    /// The current snapshot, for one-off reads.
    pub fn current_state(&self) -> MovieListState {
        self.state.borrow().clone()
    }

    /// Claim the single effect stream. `None` once already claimed.
    pub fn effects(&self) -> Option<EffectStream<MovieListEffect>> {
        self.effects.subscribe()
    }

    /// Dispatch an intent. Fire-and-forget; never blocks.
    pub fn handle_intent(&self, intent: MovieListIntent) {
        match intent {
            MovieListIntent::LoadInitial | MovieListIntent::Retry => self.load_initial(),
            MovieListIntent::Refresh => self.refresh(),
            MovieListIntent::LoadNextPage => self.load_next_page(),
            MovieListIntent::MovieSelected(movie_id) => {
                self.effects.emit(MovieListEffect::NavigateToDetail(movie_id));
            }
        }
    }

    /// Abandon in-flight fetches; no state mutation can happen afterwards.
    pub fn dispose(&self) {
        self.scope.dispose();
    }

    fn load_initial(&self) {
        let mut started = false;
        self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            *state = MovieListReducer::reduce(state.clone(), MovieListTransition::LoadStarted);
            started = true;
            true
        });
        if !started {
            tracing::debug!("initial load already in flight, intent suppressed");
            return;
        }

        let repository = Arc::clone(&self.repository);
        self.run_transition(async move {
            match repository.fetch_page(1).await {
                Ok(movies) => MovieListTransition::LoadSucceeded { movies },
                Err(err) => MovieListTransition::LoadFailed {
                    message: err.to_string(),
                },
            }
        });
    }

    fn refresh(&self) {
        // No overlap guard here: rapid refreshes race and whichever fetch
        // completes last determines the visible list.
        self.state.send_modify(|state| {
            *state = MovieListReducer::reduce(state.clone(), MovieListTransition::RefreshStarted);
        });

        let repository = Arc::clone(&self.repository);
        self.run_transition(async move {
            match repository.fetch_page(1).await {
                Ok(movies) => MovieListTransition::RefreshSucceeded { movies },
                Err(err) => MovieListTransition::RefreshFailed {
                    message: err.to_string(),
                },
            }
        });
    }

    fn load_next_page(&self) {
        let mut next_page = None;
        self.state.send_if_modified(|state| {
            if state.is_paginating || !state.has_more_pages {
                return false;
            }
            next_page = Some(state.current_page + 1);
            *state = MovieListReducer::reduce(state.clone(), MovieListTransition::PageStarted);
            true
        });
        let Some(page) = next_page else {
            tracing::debug!("pagination suppressed, already paginating or exhausted");
            return;
        };

        let repository = Arc::clone(&self.repository);
        self.run_transition(async move {
            match repository.fetch_page(page).await {
                Ok(movies) => MovieListTransition::PageSucceeded { page, movies },
                Err(err) => {
                    tracing::warn!(page, error = %err, "pagination failed silently");
                    MovieListTransition::PageFailed
                }
            }
        });
    }

    /// Run a fetch to completion and apply its transition, unless the scope
    /// was disposed in the meantime.
    fn run_transition<F>(&self, fetch: F)
    where
        F: Future<Output = MovieListTransition> + Send + 'static,
    {
        let state = self.state.clone();
        let scope = self.scope.clone();
        self.scope.spawn(async move {
            let transition = fetch.await;
            if scope.is_disposed() {
                return;
            }
            state.send_modify(|current| {
                *current = MovieListReducer::reduce(current.clone(), transition);
            });
        });
    }
}

impl Drop for MovieListController {
    fn drop(&mut self) {
        self.scope.dispose();
    }
}
