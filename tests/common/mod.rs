//! Shared fixtures for the integration suites.

#![allow(dead_code)]

pub mod fake_repository;

use std::time::Duration;

use moviefeed::domain::{Genre, Movie, MovieDetail};
use tokio::sync::watch;

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: None,
        release_date: Some("2024-01-01".to_string()),
        vote_average: 7.0,
        overview: "Overview".to_string(),
    }
}

pub fn detail(id: u64, title: &str) -> MovieDetail {
    MovieDetail {
        id,
        title: title.to_string(),
        overview: "Overview".to_string(),
        poster_path: None,
        backdrop_path: None,
        release_date: "2024-01-01".to_string(),
        vote_average: 7.0,
        vote_count: 100,
        runtime: Some(120),
        genres: vec![Genre {
            id: 18,
            name: "Drama".to_string(),
        }],
        tagline: None,
    }
}

/// Await the first snapshot satisfying `predicate`, bounded by a timeout so a
/// broken controller fails the test instead of hanging it.
pub async fn wait_until<S, F>(rx: &mut watch::Receiver<S>, predicate: F) -> S
where
    S: Clone + Send + Sync + 'static,
    F: Fn(&S) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let snapshot = rx.borrow_and_update();
                if predicate(&snapshot) {
                    return snapshot.clone();
                }
            }
            rx.changed().await.expect("state stream closed");
        }
    })
    .await
    .expect("timed out waiting for state")
}
