//! Customize-homepage panel screen object.

use crate::app::{elements, Device};
use crate::result::{HarnessError, HarnessResult};
use crate::robot::home::HomeScreen;
use crate::robot::Transition;

/// The customize-homepage settings panel
#[derive(Debug)]
pub struct CustomizePanel {
    device: Device,
}

impl CustomizePanel {
    pub(crate) fn attach(device: Device) -> HarnessResult<Self> {
        device.expect_visible(elements::CUSTOMIZE_PANEL, "customize panel")?;
        Ok(Self { device })
    }

    /// Flip the recommended-stories switch
    pub fn toggle_stories(self) -> HarnessResult<Self> {
        self.device.tap(elements::CUSTOMIZE_STORIES_TOGGLE)?;
        Ok(self)
    }

    /// Flip the jump-back-in switch
    pub fn toggle_jump_back_in(self) -> HarnessResult<Self> {
        self.device.tap(elements::CUSTOMIZE_JUMP_BACK_IN_TOGGLE)?;
        Ok(self)
    }

    /// Check the stories switch position
    pub fn verify_stories_toggle(self, enabled: bool) -> HarnessResult<Self> {
        self.verify_toggle(elements::CUSTOMIZE_STORIES_TOGGLE, "stories", enabled)
    }

    /// Check the jump-back-in switch position
    pub fn verify_jump_back_in_toggle(self, enabled: bool) -> HarnessResult<Self> {
        self.verify_toggle(
            elements::CUSTOMIZE_JUMP_BACK_IN_TOGGLE,
            "jump-back-in",
            enabled,
        )
    }

    fn verify_toggle(self, id: &str, name: &str, enabled: bool) -> HarnessResult<Self> {
        let want = if enabled { "on" } else { "off" };
        let text = self.device.text_of(id)?;
        if text == want {
            Ok(self)
        } else {
            Err(HarnessError::verification(format!(
                "{name} toggle {want}, got {text}"
            )))
        }
    }

    /// Leave the panel and return to the home screen
    pub fn go_back_to_home(self) -> HarnessResult<Transition<Self, HomeScreen>> {
        self.device.tap(elements::CUSTOMIZE_BACK_BUTTON)?;
        let destination = HomeScreen::attach(self.device)?;
        Ok(Transition::new(destination))
    }
}
