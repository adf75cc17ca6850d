//! Screen-object navigation layer.
//!
//! Each screen type wraps a [`Device`] and is only constructible once
//! its anchor element has been verified on the current surface, so
//! holding a screen value means the app is actually showing it.
//! Actions that move between surfaces return a [`Transition`], which
//! must be driven with [`Transition::to`] before the destination can
//! be interacted with.
//!
//! ```
//! use pantalla::robot::home_screen;
//! use pantalla::{AppSession, Device, SettingsOverrides, WaitOptions};
//!
//! let device = Device::new(
//!     AppSession::new(SettingsOverrides::default()),
//!     WaitOptions::default(),
//! );
//! home_screen(&device)?
//!     .dismiss_onboarding()?
//!     .open_tab_overview()?
//!     .to(|overview| overview.close_overview()?.to(|home| home.verify_home_chrome().map(|_| ())))?;
//! # Ok::<(), pantalla::HarnessError>(())
//! ```

pub mod browser;
pub mod customize;
pub mod home;
pub mod tabs;

pub use browser::BrowserScreen;
pub use customize::CustomizePanel;
pub use home::{home_screen, HomeScreen, PrivateHomeScreen};
pub use tabs::TabOverview;

use std::marker::PhantomData;

use crate::result::HarnessResult;

/// Establish the first screen state of a scenario.
///
/// Invoked once per scenario body; the closure performs the entry
/// verification and yields the starting screen.
pub fn enter<S>(initial: impl FnOnce() -> HarnessResult<S>) -> HarnessResult<S> {
    initial()
}

/// A verified move from one screen to another.
///
/// The source screen is consumed when the transition is created, so
/// stale handles to the previous surface cannot outlive the move.
#[must_use = "a transition does nothing until driven with `to`"]
#[derive(Debug)]
pub struct Transition<Source, Dest> {
    destination: Dest,
    _source: PhantomData<Source>,
}

impl<Source, Dest> Transition<Source, Dest> {
    pub(crate) const fn new(destination: Dest) -> Self {
        Self {
            destination,
            _source: PhantomData,
        }
    }

    /// Continue the scenario on the destination screen.
    ///
    /// This is the only way to reach the destination; an unresolved
    /// transition cannot yield a screen handle.
    pub fn to<R>(self, block: impl FnOnce(Dest) -> HarnessResult<R>) -> HarnessResult<R> {
        block(self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppSession, Device};
    use crate::settings::SettingsOverrides;
    use crate::wait::WaitOptions;

    fn device() -> Device {
        let wait = WaitOptions::default()
            .with_timeout(50)
            .with_poll_interval(5);
        Device::new(AppSession::new(SettingsOverrides::default()), wait)
    }

    #[test]
    fn test_enter_yields_verified_initial_screen() {
        let device = device();
        let home = enter(|| home_screen(&device)).unwrap();
        home.verify_home_chrome().unwrap();
    }

    #[test]
    fn test_transition_runs_block_on_destination() {
        let t: Transition<u8, &str> = Transition::new("dest");
        let seen = t.to(|d| Ok(d.len())).unwrap();
        assert_eq!(seen, 4);
    }

    #[test]
    fn test_chained_navigation_round_trip() {
        let device = device();
        home_screen(&device)
            .unwrap()
            .open_tab_overview()
            .unwrap()
            .to(|overview| {
                overview
                    .close_overview()?
                    .to(|home| home.verify_home_chrome().map(|_| ()))
            })
            .unwrap();
    }

    #[test]
    fn test_attach_fails_on_wrong_surface() {
        let device = device();
        // No page is loaded, so the browser anchor never appears.
        assert!(BrowserScreen::attach(device).is_err());
    }
}
