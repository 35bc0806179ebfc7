//! Deadline helpers for backend requests.
//!
//! Browser fetches and provider token calls can hang forever; every one the
//! panel issues is raced against a `gloo-timers` deadline.

#[cfg(test)]
#[path = "timeout_test.rs"]
mod timeout_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

/// A request outlived its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request timed out after {ms} ms")]
pub struct Elapsed {
    pub ms: u32,
}

/// Resolve `work`, or `None` if `deadline` fires first.
pub async fn race<F, D>(work: F, deadline: D) -> Option<F::Output>
where
    F: Future,
    D: Future<Output = ()>,
{
    match select(pin!(work), pin!(deadline)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

/// A future that completes after `ms` milliseconds. Outside the browser
/// there is no timer and it never completes.
pub fn deadline(ms: u32) -> impl Future<Output = ()> {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
        futures::future::pending()
    }
}

/// Resolve `work` within `ms` milliseconds.
///
/// # Errors
///
/// Returns [`Elapsed`] when the deadline fires first.
pub async fn with_timeout<F: Future>(work: F, ms: u32) -> Result<F::Output, Elapsed> {
    race(work, deadline(ms)).await.ok_or(Elapsed { ms })
}
