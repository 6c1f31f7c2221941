//! Deferred values.
//!
//! [`Deferred::wait`] is the one place where resolution blocks. Swapping the
//! implementation (e.g. for one that parks a cooperative task instead of a
//! thread) only requires another [`Deferred`] type.

use super::value::Value;
use crate::error::DeferredError;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::fmt;
use std::future::Future;

/// A value whose computation may still be in flight.
pub trait Deferred: Send + Sync + fmt::Debug {
    /// Block the calling thread until the value is available.
    fn wait(&self) -> Result<Value, DeferredError>;
}

type SharedOutcome = Shared<BoxFuture<'static, Result<Value, DeferredError>>>;

/// A deferred value backed by a future.
///
/// The outcome is computed once and shared by every waiter.
#[derive(Clone)]
pub struct FutureValue {
    inner: SharedOutcome,
}

impl FutureValue {
    pub fn new<F, E>(future: F) -> Self
    where
        F: Future<Output = Result<Value, E>> + Send + 'static,
        E: fmt::Display,
    {
        let future = future.map(|outcome| outcome.map_err(|e| DeferredError::Failed(e.to_string())));
        Self {
            inner: future.boxed().shared(),
        }
    }

    pub fn ready(value: Value) -> Self {
        Self::new(futures::future::ready(Ok::<_, DeferredError>(value)))
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let error = DeferredError::Failed(message.into());
        Self {
            inner: futures::future::ready(Err(error)).boxed().shared(),
        }
    }

    /// Completed outcome, if the future already finished.
    pub fn peek(&self) -> Option<Result<Value, DeferredError>> {
        self.inner.peek().cloned()
    }
}

impl Deferred for FutureValue {
    fn wait(&self) -> Result<Value, DeferredError> {
        futures::executor::block_on(self.inner.clone())
    }
}

impl fmt::Debug for FutureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.inner.peek() {
            Some(Ok(_)) => "ready",
            Some(Err(_)) => "failed",
            None => "pending",
        };
        f.debug_struct("FutureValue").field("state", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_and_failed() {
        assert_eq!(FutureValue::ready(Value::Int(7)).wait(), Ok(Value::Int(7)));
        assert_eq!(
            FutureValue::failed("backend down").wait(),
            Err(DeferredError::Failed("backend down".into()))
        );
    }

    #[test]
    fn test_wait_blocks_until_sender_completes() {
        let (tx, rx) = tokio::sync::oneshot::channel::<Value>();
        let deferred = FutureValue::new(rx);

        let handle = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            tx.send(Value::str("late")).unwrap();
        });

        assert_eq!(deferred.wait(), Ok(Value::str("late")));
        // Later waiters see the shared outcome
        assert_eq!(deferred.peek(), Some(Ok(Value::str("late"))));
        handle.join().unwrap();
    }

    #[test]
    fn test_dropped_sender_is_a_failure() {
        let (tx, rx) = tokio::sync::oneshot::channel::<Value>();
        drop(tx);
        let deferred = FutureValue::new(rx);
        assert!(matches!(deferred.wait(), Err(DeferredError::Failed(_))));
    }
}
