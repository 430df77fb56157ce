//! Browser implementations of the guard's navigation and timing seams.

use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use session::{Navigator, Timer};

/// Full-page navigation through `window.location`.
///
/// A full load guarantees the protected view unmounts and its activation is
/// discarded along with every pending request.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::warn!("navigation to {path} failed");
            }
        }
    }
}

/// `setTimeout`-backed delays.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}

/// Navigate without going through a guard, e.g. after a successful sign-in.
pub fn go_to(path: &str) {
    BrowserNavigator.navigate(path);
}
