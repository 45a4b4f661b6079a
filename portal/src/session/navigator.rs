//! Login redirect side effect of a terminal refresh failure.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Where the front end is, and how to send it back to the login entry point.
pub trait Navigator: Send + Sync {
    /// True when the login entry point is already showing.
    fn is_at_login(&self) -> bool;

    /// Navigate to the login entry point.
    fn redirect_to_login(&self);
}

/// Navigator for non-graphical front ends.
///
/// Records that a redirect happened so the caller can prompt for a new
/// login once the current command finishes.
#[derive(Debug, Default)]
pub struct LoginRedirect {
    at_login: AtomicBool,
    redirects: AtomicUsize,
}

impl LoginRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator that starts on the login entry point.
    pub fn at_login() -> Self {
        Self {
            at_login: AtomicBool::new(true),
            redirects: AtomicUsize::new(0),
        }
    }

    /// Number of redirects performed so far.
    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }

    /// Leave the login entry point, e.g. after a successful sign-in.
    pub fn leave_login(&self) {
        self.at_login.store(false, Ordering::SeqCst);
    }
}

impl Navigator for LoginRedirect {
    fn is_at_login(&self) -> bool {
        self.at_login.load(Ordering::SeqCst)
    }

    fn redirect_to_login(&self) {
        if self.at_login.swap(true, Ordering::SeqCst) {
            return;
        }
        self.redirects.fetch_add(1, Ordering::SeqCst);
        tracing::warn!("Session ended, redirecting to login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_is_recorded_once_until_leaving_login() {
        let nav = LoginRedirect::new();
        assert!(!nav.is_at_login());

        nav.redirect_to_login();
        nav.redirect_to_login();
        assert!(nav.is_at_login());
        assert_eq!(nav.redirect_count(), 1);

        nav.leave_login();
        nav.redirect_to_login();
        assert_eq!(nav.redirect_count(), 2);
    }
}
