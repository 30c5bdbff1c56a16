//! Queue-driven repository fake.
//!
//! Results are queued ahead of the call that consumes them, mirroring how the
//! controllers are exercised: queue, construct, dispatch, await. Call counts
//! and requested pages/ids are recorded for guard assertions, and an optional
//! gate holds fetches open so tests can observe in-flight states.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use moviefeed::domain::{FetchError, Movie, MovieDetail, MovieRepository};
use parking_lot::Mutex;
use tokio::sync::Notify;

pub struct FakeRepository {
    pages: Mutex<VecDeque<Result<Vec<Movie>, FetchError>>>,
    details: Mutex<VecDeque<Result<MovieDetail, FetchError>>>,
    page_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    requested_pages: Mutex<Vec<u32>>,
    requested_ids: Mutex<Vec<u64>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            pages: Mutex::new(VecDeque::new()),
            details: Mutex::new(VecDeque::new()),
            page_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            requested_pages: Mutex::new(Vec::new()),
            requested_ids: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
        })
    }

    pub fn push_page(&self, result: Result<Vec<Movie>, FetchError>) {
        self.pages.lock().push_back(result);
    }

    pub fn push_detail(&self, result: Result<MovieDetail, FetchError>) {
        self.details.lock().push_back(result);
    }

    /// Install a gate; every subsequent fetch parks until `notify_one`.
    pub fn gate(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock() = Some(Arc::clone(&gate));
        gate
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.lock().clone()
    }

    pub fn requested_ids(&self) -> Vec<u64> {
        self.requested_ids.lock().clone()
    }

    async fn pass_gate(&self) {
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl MovieRepository for FakeRepository {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Movie>, FetchError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_pages.lock().push(page);
        self.pass_gate().await;
        self.pages
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new("no queued page result")))
    }

    async fn fetch_detail(&self, movie_id: u64) -> Result<MovieDetail, FetchError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids.lock().push(movie_id);
        self.pass_gate().await;
        self.details
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new("no queued detail result")))
    }
}
