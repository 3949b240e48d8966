//! Browser task helpers.
//!
//! Handlers only fire in the browser, but they are compiled for SSR too.
//! These wrappers keep call sites free of `cfg` blocks: on the server the
//! future is dropped unpolled and sleeps return immediately.

use std::future::Future;

/// Run `fut` on the browser event loop.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(fut);
    }
}

/// Wait `ms` milliseconds.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
