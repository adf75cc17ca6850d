//! Deterministic state machine standing in for the application under test.

use crate::app::elements;
use crate::app::UiElement;
use crate::asset::fetch_page;
use crate::result::HarnessResult;
use crate::settings::SettingsOverrides;

/// URL behind the private-browsing "common myths" link
pub const COMMON_MYTHS_URL: &str =
    "https://support.example.com/kb/common-myths-about-private-browsing";

/// Text shown on the private-browsing home surface
const PRIVATE_SESSION_TEXT: &str = "You're in a private session";

/// The surface currently shown by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Home screen (regular or private, depending on mode)
    Home,
    /// Browser with a loaded page
    Browser,
    /// Tab overview drawer
    TabOverview,
    /// Customize-homepage panel
    Customize,
}

/// An open tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Page title
    pub title: String,
    /// Loaded URL
    pub url: String,
    /// Loaded document body
    pub body: String,
    /// Whether the tab was opened in private mode
    pub private: bool,
}

/// Simulated application session.
///
/// Holds the navigable UI state for exactly one scenario attempt. The
/// tab list is ordered by recency; the last entry is the most recently
/// used tab, which is what the jump-back-in section surfaces.
#[derive(Debug)]
pub struct AppSession {
    surface: Surface,
    private_mode: bool,
    onboarding_dismissed: bool,
    flags: SettingsOverrides,
    tabs: Vec<Tab>,
    active: Option<usize>,
    visited: Vec<String>,
}

impl AppSession {
    /// Start a fresh session with the given overrides applied
    #[must_use]
    pub fn new(overrides: SettingsOverrides) -> Self {
        Self {
            surface: Surface::Home,
            private_mode: false,
            onboarding_dismissed: false,
            flags: overrides,
            tabs: Vec::new(),
            active: None,
            visited: Vec::new(),
        }
    }

    /// Surface currently shown
    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Whether private browsing mode is active
    #[must_use]
    pub fn private_mode(&self) -> bool {
        self.private_mode
    }

    /// Snapshot of the open tabs
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Load a URL in a new tab and show the browser surface.
    ///
    /// Loopback URLs are fetched over HTTP so content genuinely flows
    /// through the asset origin; remote URLs are recorded without a
    /// network round trip.
    pub fn open_url(&mut self, url: &str) -> HarnessResult<()> {
        let (title, body) = if url.starts_with("http://127.0.0.1") {
            let page = fetch_page(url)?;
            (page.title, page.body)
        } else {
            let title = url
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or(url)
                .to_string();
            (title, url.to_string())
        };

        tracing::debug!(url, %title, private = self.private_mode, "page loaded");
        // Private visits leave no history trace.
        if !self.private_mode {
            self.visited.push(url.to_string());
        }
        self.tabs.push(Tab {
            title,
            url: url.to_string(),
            body,
            private: self.private_mode,
        });
        self.active = Some(self.tabs.len() - 1);
        self.surface = Surface::Browser;
        Ok(())
    }

    /// Look up a visible element by id
    #[must_use]
    pub fn element(&self, id: &str) -> Option<UiElement> {
        self.render().into_iter().find(|e| e.id == id)
    }

    /// Dispatch a tap gesture to a visible element.
    ///
    /// Returns `false` when the element is not currently visible or has
    /// no tap behavior, leaving the session untouched.
    pub fn tap(&mut self, id: &str) -> bool {
        if self.element(id).is_none() {
            return false;
        }

        match id {
            elements::ONBOARDING_DISMISS => self.onboarding_dismissed = true,
            elements::PRIVATE_BROWSING_BUTTON => self.private_mode = !self.private_mode,
            elements::COMMON_MYTHS_LINK => {
                // Remote URL: recorded without a network round trip.
                let _ = self.open_url(COMMON_MYTHS_URL);
            }
            elements::TAB_COUNTER | elements::JUMP_BACK_IN_SHOW_ALL => {
                self.surface = Surface::TabOverview;
            }
            elements::CUSTOMIZE_HOME_BUTTON => self.surface = Surface::Customize,
            elements::MENU_BUTTON => {}
            elements::BROWSER_HOME_BUTTON
            | elements::TAB_OVERVIEW_CLOSE
            | elements::CUSTOMIZE_BACK_BUTTON => self.surface = Surface::Home,
            elements::TAB_CLOSE_ACTIVE => {
                if let Some(index) = self.last_mode_tab_index() {
                    self.close_tab(index);
                }
            }
            elements::CUSTOMIZE_STORIES_TOGGLE => {
                self.flags.stories_enabled = !self.flags.stories_enabled;
            }
            elements::CUSTOMIZE_JUMP_BACK_IN_TOGGLE => {
                self.flags.jump_back_in_enabled = !self.flags.jump_back_in_enabled;
            }
            other => {
                if let Some(title) = other.strip_prefix("tab-close-button-") {
                    let title = title.to_string();
                    if let Some(index) = self.mode_tab_index_by_title(&title) {
                        self.close_tab(index);
                    }
                } else if let Some(title) = other.strip_prefix("tab-item-") {
                    let title = title.to_string();
                    if let Some(index) = self.mode_tab_index_by_title(&title) {
                        // Reopening a tab makes it the most recent one.
                        let tab = self.tabs.remove(index);
                        self.tabs.push(tab);
                        self.active = Some(self.tabs.len() - 1);
                        self.surface = Surface::Browser;
                    }
                } else {
                    return false;
                }
            }
        }
        true
    }

    /// Elements visible on the current surface
    #[must_use]
    pub fn render(&self) -> Vec<UiElement> {
        match self.surface {
            Surface::Home => {
                if self.private_mode {
                    self.render_private_home()
                } else {
                    self.render_home()
                }
            }
            Surface::Browser => self.render_browser(),
            Surface::TabOverview => self.render_tab_overview(),
            Surface::Customize => self.render_customize(),
        }
    }

    fn render_home(&self) -> Vec<UiElement> {
        let mut out = vec![
            UiElement::new(elements::HOME_WORDMARK, ""),
            UiElement::new(elements::PRIVATE_BROWSING_BUTTON, ""),
            UiElement::new(elements::NAVIGATION_TOOLBAR, ""),
            UiElement::new(elements::MENU_BUTTON, ""),
            UiElement::new(elements::TAB_COUNTER, self.mode_tab_count().to_string()),
            UiElement::new(elements::CUSTOMIZE_HOME_BUTTON, ""),
        ];
        if self.flags.onboarding_enabled && !self.onboarding_dismissed {
            out.push(UiElement::new(elements::ONBOARDING_DISMISS, ""));
        }
        if self.flags.jump_back_in_enabled {
            if let Some(tab) = self.tabs.iter().rev().find(|t| !t.private) {
                out.push(UiElement::new(elements::JUMP_BACK_IN_SECTION, ""));
                out.push(UiElement::new(elements::JUMP_BACK_IN_TITLE, &tab.title));
                out.push(UiElement::new(elements::JUMP_BACK_IN_URL, &tab.url));
                out.push(UiElement::new(elements::JUMP_BACK_IN_SHOW_ALL, ""));
            }
        }
        if self.flags.recently_visited_enabled && !self.visited.is_empty() {
            out.push(UiElement::new(elements::RECENTLY_VISITED_SECTION, ""));
        }
        if self.flags.stories_enabled {
            out.push(UiElement::new(elements::STORIES_SECTION, ""));
            if self.flags.stories_by_topic_enabled {
                out.push(UiElement::new(elements::STORIES_BY_TOPIC_SECTION, ""));
            }
        }
        out
    }

    fn render_private_home(&self) -> Vec<UiElement> {
        vec![
            UiElement::new(elements::PRIVATE_SESSION_DESCRIPTION, PRIVATE_SESSION_TEXT),
            UiElement::new(elements::COMMON_MYTHS_LINK, ""),
            UiElement::new(elements::PRIVATE_BROWSING_BUTTON, ""),
            UiElement::new(elements::NAVIGATION_TOOLBAR, ""),
            UiElement::new(elements::MENU_BUTTON, ""),
            UiElement::new(elements::TAB_COUNTER, self.mode_tab_count().to_string()),
        ]
    }

    fn render_browser(&self) -> Vec<UiElement> {
        let mut out = Vec::new();
        if let Some(tab) = self.active.and_then(|i| self.tabs.get(i)) {
            out.push(UiElement::new(elements::URL_FIELD, &tab.url));
            out.push(UiElement::new(elements::PAGE_BODY, &tab.body));
        }
        out.push(UiElement::new(elements::BROWSER_HOME_BUTTON, ""));
        out.push(UiElement::new(
            elements::TAB_COUNTER,
            self.mode_tab_count().to_string(),
        ));
        out
    }

    fn render_tab_overview(&self) -> Vec<UiElement> {
        let mut out = vec![
            UiElement::new(elements::TAB_OVERVIEW, ""),
            UiElement::new(elements::TAB_OVERVIEW_CLOSE, ""),
        ];
        for tab in self.tabs.iter().filter(|t| t.private == self.private_mode) {
            out.push(UiElement::new(elements::tab_item(&tab.title), &tab.title));
            out.push(UiElement::new(elements::tab_close(&tab.title), ""));
        }
        if self.last_mode_tab_index().is_some() {
            out.push(UiElement::new(elements::TAB_CLOSE_ACTIVE, ""));
        }
        out
    }

    fn render_customize(&self) -> Vec<UiElement> {
        let on_off = |enabled: bool| if enabled { "on" } else { "off" };
        vec![
            UiElement::new(elements::CUSTOMIZE_PANEL, ""),
            UiElement::new(
                elements::CUSTOMIZE_STORIES_TOGGLE,
                on_off(self.flags.stories_enabled),
            ),
            UiElement::new(
                elements::CUSTOMIZE_JUMP_BACK_IN_TOGGLE,
                on_off(self.flags.jump_back_in_enabled),
            ),
            UiElement::new(elements::CUSTOMIZE_BACK_BUTTON, ""),
        ]
    }

    fn mode_tab_count(&self) -> usize {
        self.tabs
            .iter()
            .filter(|t| t.private == self.private_mode)
            .count()
    }

    fn last_mode_tab_index(&self) -> Option<usize> {
        self.tabs
            .iter()
            .rposition(|t| t.private == self.private_mode)
    }

    fn mode_tab_index_by_title(&self, title: &str) -> Option<usize> {
        self.tabs
            .iter()
            .position(|t| t.private == self.private_mode && t.title == title)
    }

    fn close_tab(&mut self, index: usize) {
        self.tabs.remove(index);
        self.active = match self.active {
            Some(a) if a == index => None,
            Some(a) if a > index => Some(a - 1),
            other => other,
        };
    }
}
