use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(not(unix))]
use futures::future::BoxFuture;
#[cfg(unix)]
use smallvec::SmallVec;
#[cfg(unix)]
use tokio::signal::unix::{self, Signal, SignalKind};

/// Resolves once the process is asked to shut down.
pub struct SignalHandler {
    #[cfg(unix)]
    signals: SmallVec<[Signal; 3]>,
    #[cfg(not(unix))]
    ctrl_c: BoxFuture<'static, std::io::Result<()>>,
}

impl SignalHandler {
    #[cfg(unix)]
    pub fn new() -> Self {
        trace!("registering signal listeners");

        let mut signals = SmallVec::new();

        for kind in [
            SignalKind::interrupt(),
            SignalKind::terminate(),
            SignalKind::quit(),
        ] {
            match unix::signal(kind) {
                Ok(listener) => signals.push(listener),
                Err(error) => error!("failed to listen for signal {:?}: {}", kind, error),
            }
        }

        SignalHandler { signals }
    }

    #[cfg(not(unix))]
    pub fn new() -> Self {
        trace!("registering ctrl-c listener");

        SignalHandler {
            ctrl_c: Box::pin(tokio::signal::ctrl_c()),
        }
    }
}

impl Future for SignalHandler {
    type Output = ();

    #[cfg(unix)]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let ready = self
            .signals
            .iter_mut()
            .any(|signal| signal.poll_recv(cx).is_ready());

        if ready {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }

    #[cfg(not(unix))]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.ctrl_c.as_mut().poll(cx).map(|_| ())
    }
}
