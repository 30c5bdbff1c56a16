//! One-shot effect delivery for the MVI loop.
//!
//! Effects (navigation requests and the like) are deliberately kept out of
//! state: re-rendering the latest snapshot must never replay a navigation.
//! The channel buffers emissions until the single consumer attaches, so an
//! effect fired before the renderer subscribes is delivered, not dropped.

use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Marker trait for one-shot effect objects.
pub trait Effect: Send + 'static {}

/// Buffered, ordered, single-consumer effect queue.
///
/// Producers enqueue with [`emit`](EffectChannel::emit); the one consumer
/// claims the [`EffectStream`] via [`subscribe`](EffectChannel::subscribe)
/// and receives effects in FIFO order, each delivered at most once.
pub struct EffectChannel<E> {
    tx: mpsc::UnboundedSender<E>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<E>>>,
}

impl<E: Effect> EffectChannel<E> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: Mutex::new(Some(rx)),
        }
    }

    /// Enqueue an effect for the consumer.
    ///
    /// Emissions before [`subscribe`](Self::subscribe) are buffered. Emitting
    /// after the stream has been dropped discards the effect; that only
    /// happens once the consuming scope is gone.
    pub fn emit(&self, effect: E) {
        if self.tx.send(effect).is_err() {
            tracing::debug!("effect dropped, stream already closed");
        }
    }

    /// Claim the consuming end of the channel.
    ///
    /// Returns `None` if the stream was already claimed; the channel is
    /// single-consumer by contract.
    pub fn subscribe(&self) -> Option<EffectStream<E>> {
        self.rx.lock().take().map(|rx| EffectStream { rx })
    }
}

impl<E: Effect> Default for EffectChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The consuming end of an [`EffectChannel`].
pub struct EffectStream<E> {
    rx: mpsc::UnboundedReceiver<E>,
}

impl<E> EffectStream<E> {
    /// Await the next effect, in emission order.
    ///
    /// Returns `None` once the producing controller has been dropped and the
    /// buffer is drained.
    pub async fn next(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Dequeue without waiting; `None` when the buffer is empty.
    pub fn try_next(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }
}
