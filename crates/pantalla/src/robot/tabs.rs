//! Tab overview screen object.

use crate::app::{elements, Device};
use crate::result::HarnessResult;
use crate::robot::browser::BrowserScreen;
use crate::robot::home::HomeScreen;
use crate::robot::Transition;

/// The tab overview drawer
#[derive(Debug)]
pub struct TabOverview {
    device: Device,
}

impl TabOverview {
    pub(crate) fn attach(device: Device) -> HarnessResult<Self> {
        device.expect_visible(elements::TAB_OVERVIEW, "tab overview")?;
        Ok(Self { device })
    }

    /// Check a tab with the given title is listed
    pub fn verify_tab_present(self, title: &str) -> HarnessResult<Self> {
        self.device
            .expect_visible(&elements::tab_item(title), &format!("tab '{title}' listed"))?;
        Ok(self)
    }

    /// Check no tab with the given title is listed
    pub fn verify_tab_absent(self, title: &str) -> HarnessResult<Self> {
        self.device.expect_absent(
            &elements::tab_item(title),
            &format!("tab '{title}' not listed"),
        )?;
        Ok(self)
    }

    /// Close the tab with the given title and stay in the overview
    pub fn close_tab(self, title: &str) -> HarnessResult<Self> {
        self.device.tap(&elements::tab_close(title))?;
        self.device.expect_absent(
            &elements::tab_item(title),
            &format!("tab '{title}' closed"),
        )?;
        Ok(self)
    }

    /// Close the most recently used tab of the current mode
    pub fn close_active_tab(self) -> HarnessResult<Self> {
        self.device.tap(elements::TAB_CLOSE_ACTIVE)?;
        Ok(self)
    }

    /// Reopen a listed tab in the browser
    pub fn open_tab(self, title: &str) -> HarnessResult<Transition<Self, BrowserScreen>> {
        self.device.tap(&elements::tab_item(title))?;
        let destination = BrowserScreen::attach(self.device)?;
        Ok(Transition::new(destination))
    }

    /// Dismiss the overview and return home
    pub fn close_overview(self) -> HarnessResult<Transition<Self, HomeScreen>> {
        self.device.tap(elements::TAB_OVERVIEW_CLOSE)?;
        let destination = HomeScreen::attach(self.device)?;
        Ok(Transition::new(destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppSession;
    use crate::robot::home_screen;
    use crate::settings::SettingsOverrides;
    use crate::wait::WaitOptions;

    fn device() -> Device {
        let wait = WaitOptions::default()
            .with_timeout(50)
            .with_poll_interval(5);
        Device::new(AppSession::new(SettingsOverrides::default()), wait)
    }

    fn open(device: &Device, name: &str) {
        device
            .open_url(&format!("https://pages.example.com/{name}"))
            .unwrap();
        device.tap(elements::BROWSER_HOME_BUTTON).unwrap();
    }

    #[test]
    fn test_listing_and_closing_tabs() {
        let device = device();
        open(&device, "alpha");
        open(&device, "beta");

        home_screen(&device)
            .unwrap()
            .open_tab_overview()
            .unwrap()
            .to(|overview| {
                overview
                    .verify_tab_present("alpha")?
                    .verify_tab_present("beta")?
                    .close_tab("beta")?
                    .verify_tab_absent("beta")?
                    .close_overview()?
                    .to(|home| home.verify_tab_counter(1).map(|_| ()))
            })
            .unwrap();
    }

    #[test]
    fn test_reopen_tab_from_overview() {
        let device = device();
        open(&device, "alpha");

        home_screen(&device)
            .unwrap()
            .open_tab_overview()
            .unwrap()
            .to(|overview| {
                overview
                    .open_tab("alpha")?
                    .to(|browser| browser.verify_url_contains("alpha").map(|_| ()))
            })
            .unwrap();
    }

    #[test]
    fn test_close_active_tab_empties_overview() {
        let device = device();
        open(&device, "alpha");

        home_screen(&device)
            .unwrap()
            .open_tab_overview()
            .unwrap()
            .to(|overview| {
                overview
                    .close_active_tab()?
                    .verify_tab_absent("alpha")?
                    .close_overview()?
                    .to(|home| home.verify_tab_counter(0).map(|_| ()))
            })
            .unwrap();
    }
}
