//! Externally-settled one-shot values
//!
//! Mirrors the deferred-promise pattern: construction hands back the
//! pending value together with its resolve/reject controls, so the
//! producing side can be wired up after the consumer already holds the
//! future.

use tokio::sync::oneshot;

/// Error surfaced to the waiting side when a deferred value never resolves.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettleError<E> {
    /// The controlling side rejected with an error value
    #[error("Deferred value was rejected")]
    Rejected(E),
    /// The controlling side was dropped before settling
    #[error("Deferred value was dropped before settling")]
    Dropped,
}

/// Resolve/reject handle for a [`Pending`] value. Consumed on settle.
#[derive(Debug)]
pub struct Deferred<T, E> {
    tx: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Deferred<T, E> {
    /// Settle the pending value successfully.
    ///
    /// Returns the value back if the waiting side already gave up.
    pub fn resolve(self, value: T) -> Result<(), T> {
        self.tx.send(Ok(value)).map_err(|sent| match sent {
            Ok(value) => value,
            Err(_) => unreachable!("sent an Ok"),
        })
    }

    /// Settle the pending value with an error.
    pub fn reject(self, error: E) -> Result<(), E> {
        self.tx.send(Err(error)).map_err(|sent| match sent {
            Err(error) => error,
            Ok(_) => unreachable!("sent an Err"),
        })
    }
}

/// The waiting side of a deferred value.
#[derive(Debug)]
pub struct Pending<T, E> {
    rx: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Pending<T, E> {
    /// Wait until the controlling [`Deferred`] settles.
    pub async fn wait(self) -> Result<T, SettleError<E>> {
        match self.rx.await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => Err(SettleError::Rejected(error)),
            Err(_) => Err(SettleError::Dropped),
        }
    }
}

/// Create a deferred value: the pending future plus its settle handle.
pub fn deferred<T, E>() -> (Pending<T, E>, Deferred<T, E>) {
    let (tx, rx) = oneshot::channel();
    (Pending { rx }, Deferred { tx })
}
