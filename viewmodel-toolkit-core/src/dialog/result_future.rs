//! One-shot typed dialog result

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::error::{ToolkitError, ToolkitResult};

/// Create a connected completer/future pair
pub fn result_channel<T>() -> (ResultCompleter<T>, ResultFuture<T>) {
    let (sender, receiver) = oneshot::channel();
    (
        ResultCompleter {
            sender: Some(sender),
        },
        ResultFuture { receiver },
    )
}

/// Producing side; resolves exactly once
#[derive(Debug)]
pub struct ResultCompleter<T> {
    sender: Option<oneshot::Sender<T>>,
}

impl<T> ResultCompleter<T> {
    pub fn is_resolved(&self) -> bool {
        self.sender.is_none()
    }

    /// Deliver the result
    ///
    /// # Errors
    /// `ToolkitError::AlreadyResolved` on any call after the first
    pub fn resolve(&mut self, value: T) -> ToolkitResult<()> {
        let Some(sender) = self.sender.take() else {
            log::error!("Dialog result resolved more than once");
            return Err(ToolkitError::AlreadyResolved);
        };
        if sender.send(value).is_err() {
            log::warn!("Dialog result resolved after its consumer went away");
        }
        Ok(())
    }
}

/// Consuming side; awaited once by the caller that opened the dialog
///
/// Resolves to `ToolkitError::SessionAbandoned` if the completer is dropped
/// without resolving.
#[derive(Debug)]
pub struct ResultFuture<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> ResultFuture<T> {
    /// Take the result if it is already available, without suspending
    pub fn try_take(&mut self) -> ToolkitResult<Option<T>> {
        match self.receiver.try_recv() {
            Ok(value) => Ok(Some(value)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Closed) => Err(ToolkitError::SessionAbandoned),
        }
    }
}

impl<T> Future for ResultFuture<T> {
    type Output = ToolkitResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(|_| ToolkitError::SessionAbandoned))
    }
}
