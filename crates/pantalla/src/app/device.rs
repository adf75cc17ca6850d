//! Polling automation layer over an [`AppSession`].
//!
//! Every query waits for its target with a bounded poll loop, mirroring
//! how a real device driver tolerates rendering latency. Timeouts
//! surface as typed errors so the retry layer can classify them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::session::AppSession;
use crate::app::UiElement;
use crate::result::{HarnessError, HarnessResult};
use crate::wait::{poll_until, WaitOptions};

/// Handle used by screen objects to observe and drive the session
#[derive(Debug, Clone)]
pub struct Device {
    session: Rc<RefCell<AppSession>>,
    wait: WaitOptions,
}

impl Device {
    /// Wrap a fresh session with the given wait options
    #[must_use]
    pub fn new(session: AppSession, wait: WaitOptions) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            wait,
        }
    }

    /// Wait options used for every lookup on this device
    #[must_use]
    pub const fn wait_options(&self) -> WaitOptions {
        self.wait
    }

    /// Wait until an element is visible and return it
    pub fn find(&self, id: &str) -> HarnessResult<UiElement> {
        poll_until(&self.wait, || self.session.borrow().element(id)).ok_or_else(|| {
            HarnessError::navigation(format!("locate element '{id}'"), self.wait.timeout_ms)
        })
    }

    /// Wait until an element is visible, then tap it
    pub fn tap(&self, id: &str) -> HarnessResult<()> {
        self.find(id)?;
        if self.session.borrow_mut().tap(id) {
            tracing::trace!(id, "tapped");
            Ok(())
        } else {
            Err(HarnessError::navigation(format!("tap element '{id}'"), 0))
        }
    }

    /// Text of an element, waiting for it to appear first
    pub fn text_of(&self, id: &str) -> HarnessResult<String> {
        Ok(self.find(id)?.text)
    }

    /// Wait until an element is visible, failing verification on timeout
    pub fn expect_visible(&self, id: &str, expected: &str) -> HarnessResult<()> {
        poll_until(&self.wait, || self.session.borrow().element(id))
            .map(|_| ())
            .ok_or_else(|| HarnessError::verification(expected))
    }

    /// Assert an element is not on the current surface.
    ///
    /// Absence is checked once rather than polled; waiting for a thing
    /// to stay gone would only slow passing runs down.
    pub fn expect_absent(&self, id: &str, expected: &str) -> HarnessResult<()> {
        if self.session.borrow().element(id).is_none() {
            Ok(())
        } else {
            Err(HarnessError::verification(expected))
        }
    }

    /// Load a URL in a new tab via the session
    pub fn open_url(&self, url: &str) -> HarnessResult<()> {
        self.session.borrow_mut().open_url(url)
    }

    /// Run a closure against the raw session state
    pub fn inspect<T>(&self, f: impl FnOnce(&AppSession) -> T) -> T {
        f(&self.session.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::elements;
    use crate::settings::SettingsOverrides;

    fn device() -> Device {
        // Short timeout keeps negative tests fast.
        let wait = WaitOptions::default()
            .with_timeout(50)
            .with_poll_interval(5);
        Device::new(AppSession::new(SettingsOverrides::default()), wait)
    }

    #[test]
    fn test_find_visible_element() {
        let d = device();
        let el = d.find(elements::TAB_COUNTER).unwrap();
        assert_eq!(el.text, "0");
    }

    #[test]
    fn test_find_missing_element_times_out_retryable() {
        let d = device();
        let err = d.find(elements::URL_FIELD).unwrap_err();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("url-field"));
    }

    #[test]
    fn test_tap_drives_session_state() {
        let d = device();
        d.tap(elements::PRIVATE_BROWSING_BUTTON).unwrap();
        assert!(d.inspect(AppSession::private_mode));
        d.expect_visible(
            elements::PRIVATE_SESSION_DESCRIPTION,
            "private session description",
        )
        .unwrap();
    }

    #[test]
    fn test_expect_absent_passes_immediately() {
        let d = device();
        d.expect_absent(elements::URL_FIELD, "no browser chrome on home")
            .unwrap();
        let err = d
            .expect_absent(elements::HOME_WORDMARK, "wordmark gone")
            .unwrap_err();
        assert!(matches!(err, HarnessError::Verification { .. }));
    }

    #[test]
    fn test_clones_share_one_session() {
        let d = device();
        let other = d.clone();
        d.tap(elements::ONBOARDING_DISMISS).unwrap();
        other
            .expect_absent(elements::ONBOARDING_DISMISS, "onboarding stays dismissed")
            .unwrap();
    }
}
