//! Browser screen object.

use crate::app::{elements, Device};
use crate::result::{HarnessError, HarnessResult};
use crate::robot::home::{HomeScreen, PrivateHomeScreen};
use crate::robot::Transition;

/// The browser surface with a loaded page
#[derive(Debug)]
pub struct BrowserScreen {
    device: Device,
}

impl BrowserScreen {
    pub(crate) fn attach(device: Device) -> HarnessResult<Self> {
        device.expect_visible(elements::URL_FIELD, "browser url field")?;
        Ok(Self { device })
    }

    /// Check the loaded URL matches exactly
    pub fn verify_url(self, expected: &str) -> HarnessResult<Self> {
        let url = self.device.text_of(elements::URL_FIELD)?;
        if url == expected {
            Ok(self)
        } else {
            Err(HarnessError::verification(format!(
                "url '{expected}', got '{url}'"
            )))
        }
    }

    /// Check the loaded URL contains the given fragment
    pub fn verify_url_contains(self, fragment: &str) -> HarnessResult<Self> {
        let url = self.device.text_of(elements::URL_FIELD)?;
        if url.contains(fragment) {
            Ok(self)
        } else {
            Err(HarnessError::verification(format!(
                "url containing '{fragment}', got '{url}'"
            )))
        }
    }

    /// Check the page body contains the given text
    pub fn verify_page_content(self, expected: &str) -> HarnessResult<Self> {
        let body = self.device.text_of(elements::PAGE_BODY)?;
        if body.contains(expected) {
            Ok(self)
        } else {
            Err(HarnessError::verification(format!(
                "page content containing '{expected}', got '{body}'"
            )))
        }
    }

    /// Return to the regular home screen
    pub fn go_to_home(self) -> HarnessResult<Transition<Self, HomeScreen>> {
        self.device.tap(elements::BROWSER_HOME_BUTTON)?;
        let destination = HomeScreen::attach(self.device)?;
        Ok(Transition::new(destination))
    }

    /// Return to the private home screen
    pub fn go_to_private_home(self) -> HarnessResult<Transition<Self, PrivateHomeScreen>> {
        self.device.tap(elements::BROWSER_HOME_BUTTON)?;
        let destination = PrivateHomeScreen::attach(self.device)?;
        Ok(Transition::new(destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppSession;
    use crate::asset::AssetServer;
    use crate::robot::home_screen;
    use crate::settings::SettingsOverrides;
    use crate::wait::WaitOptions;

    fn device() -> Device {
        let wait = WaitOptions::default()
            .with_timeout(200)
            .with_poll_interval(5);
        Device::new(AppSession::new(SettingsOverrides::default()), wait)
    }

    #[test]
    fn test_load_served_page_and_verify() {
        let mut server = AssetServer::new();
        server.start().unwrap();
        let page = server.page(7).unwrap();

        let device = device();
        home_screen(&device)
            .unwrap()
            .open_url(&page.url)
            .unwrap()
            .to(|browser| {
                browser
                    .verify_url(&page.url)?
                    .verify_page_content("Page content: 7")?
                    .go_to_home()?
                    .to(|home| home.verify_tab_counter(1).map(|_| ()))
            })
            .unwrap();
    }

    #[test]
    fn test_url_mismatch_is_verification_error() {
        let device = device();
        device.open_url("https://pages.example.com/somewhere").unwrap();
        let browser = BrowserScreen::attach(device).unwrap();
        let err = browser.verify_url("https://other.example.com/").unwrap_err();
        assert!(matches!(err, HarnessError::Verification { .. }));
    }

    #[test]
    fn test_private_page_returns_to_private_home() {
        let device = device();
        home_screen(&device)
            .unwrap()
            .toggle_private_mode()
            .unwrap()
            .open_common_myths_link()
            .unwrap()
            .to(|browser| {
                browser
                    .go_to_private_home()?
                    .to(|home| home.verify_tab_counter(1).map(|_| ()))
            })
            .unwrap();
    }
}
