//! Bridges single-shot callback-based remote calls into futures.
//!
//! The cell resolves exactly once. A remote API that fires its completion a
//! second time hits a logged no-op, and one that never fires it leaves the
//! future pending — the same contract the remote service itself gives.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use futures::task::AtomicWaker;

enum CellState<T, E> {
    Pending,
    Resolved(Result<T, E>),
    Taken,
}

struct Cell<T, E> {
    state: Mutex<CellState<T, E>>,
    waker: AtomicWaker,
}

/// Producer half of the bridge, handed to the code issuing the remote call.
pub struct RemotePromise<T, E> {
    cell: Arc<Cell<T, E>>,
}

impl<T, E> Clone for RemotePromise<T, E> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T, E> RemotePromise<T, E> {
    /// Resolves the bridged call. The first resolution wins; any later one
    /// is dropped with a warning.
    pub fn resolve(&self, result: Result<T, E>) {
        let mut state = self
            .cell
            .state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        if matches!(*state, CellState::Pending) {
            *state = CellState::Resolved(result);
            drop(state);
            self.cell.waker.wake();
        } else {
            log::warn!("remote completion fired more than once; extra resolution ignored");
        }
    }
}

/// Consumer half of the bridge. Dropping it does not retract the remote
/// call — the operation still completes server-side.
pub struct RemoteFuture<T, E> {
    cell: Arc<Cell<T, E>>,
}

impl<T, E> Future for RemoteFuture<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.cell.waker.register(cx.waker());
        let mut state = self
            .cell
            .state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        match std::mem::replace(&mut *state, CellState::Taken) {
            CellState::Resolved(result) => Poll::Ready(result),
            CellState::Pending => {
                *state = CellState::Pending;
                Poll::Pending
            }
            CellState::Taken => {
                log::debug!("remote future polled after completion");
                Poll::Pending
            }
        }
    }
}

/// Issues a callback-based remote operation immediately and returns the
/// future for its single resolution.
pub fn remote_call<T, E, F>(issue: F) -> RemoteFuture<T, E>
where
    F: FnOnce(RemotePromise<T, E>),
{
    let cell = Arc::new(Cell {
        state: Mutex::new(CellState::Pending),
        waker: AtomicWaker::new(),
    });
    issue(RemotePromise {
        cell: Arc::clone(&cell),
    });
    RemoteFuture { cell }
}
