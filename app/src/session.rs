//! Page session bound to Dioxus signals
//!
//! One [`PageSession`] lives in a signal at the app root. Every timer the
//! session schedules is armed here as a spawned `gloo-timers` timeout; when
//! it elapses the handle is fired back into the session and any newly
//! scheduled timers are armed in turn. Unmounting the root tears the
//! session down, so a late timeout finds its handle cancelled and does
//! nothing.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::typing::Segment;
use folio_core::{
    InteractionBlocker, IntroSnapshot, MenuDismiss, MobileMenu, PageSession, Section, SiteConfig,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

use crate::api::{self, DocumentListener, DocumentSurface};

/// Owned copy of a highlighted text run, for rendering.
#[derive(Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub highlighted: bool,
}

fn to_runs(segments: Vec<Segment<'_>>) -> Vec<TextRun> {
    segments
        .into_iter()
        .map(|segment| TextRun {
            text: segment.text.to_string(),
            highlighted: segment.highlighted,
        })
        .collect()
}

/// Handle to the page session, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct PageHandle {
    session: Signal<PageSession>,
    config: Signal<SiteConfig>,
}

impl PageHandle {
    pub fn snapshot(&self) -> IntroSnapshot {
        self.session.read().snapshot()
    }

    pub fn is_animations_complete(&self) -> bool {
        self.session.read().is_animations_complete()
    }

    pub fn config(&self) -> Signal<SiteConfig> {
        self.config
    }

    pub fn title_runs(&self) -> Vec<TextRun> {
        to_runs(self.session.read().typing().title_segments())
    }

    pub fn description_runs(&self) -> Vec<TextRun> {
        to_runs(self.session.read().typing().description_segments())
    }

    pub fn loading_status(&self) -> (f64, String) {
        let session = self.session.read();
        (session.loading().progress(), session.loading().status_text())
    }

    /// Restart the copy notification after a successful copy.
    pub fn notify_copied(&self) {
        let mut session = self.session;
        session.write().notify_copied();
        self.arm_pending();
    }

    /// Arm a browser timeout for every handle the session scheduled since
    /// the last call.
    fn arm_pending(&self) {
        let mut session = self.session;
        let unarmed = session.write().take_unarmed();
        for (handle, delay) in unarmed {
            let handle_copy = *self;
            spawn(async move {
                TimeoutFuture::new(millis(delay)).await;
                let mut session = handle_copy.session;
                // The signal is gone once the page unmounts
                let fired = session.try_write().map(|mut s| s.fire(handle)).unwrap_or(false);
                if fired {
                    handle_copy.arm_pending();
                }
            });
        }
    }

    fn teardown(&self) {
        let mut session = self.session;
        if let Ok(mut session) = session.try_write() {
            session.teardown();
        }
    }
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Create the page session at the app root and start it.
pub fn use_page_provider(config: &SiteConfig) -> PageHandle {
    let session = use_signal(|| {
        let seed = config.intro.seed.unwrap_or_else(api::entropy_seed);
        tracing::info!(seed, loading = config.intro.loading_screen, "Starting intro");
        PageSession::new(config, seed)
    });
    let config = use_signal(|| config.clone());
    let page = use_context_provider(|| PageHandle { session, config });

    use_hook(move || {
        let mut session = page.session;
        session.write().mount();
        page.arm_pending();
    });
    use_drop(move || page.teardown());

    page
}

pub fn use_page() -> PageHandle {
    use_context::<PageHandle>()
}

// ─────────────────────────────────────────────────────────────────────────────
// Interaction Blocking
// ─────────────────────────────────────────────────────────────────────────────

/// Block page input until the intro completes.
pub fn use_interaction_blocker(page: PageHandle) {
    let mut blocker = use_signal(InteractionBlocker::<DocumentSurface>::new);

    use_effect(move || {
        let complete = page.is_animations_complete();
        blocker.write().sync(complete, DocumentSurface::new);
    });

    use_drop(move || blocker.write().lift());
}

// ─────────────────────────────────────────────────────────────────────────────
// Mobile Menu
// ─────────────────────────────────────────────────────────────────────────────

pub const MENU_ID: &str = "mobile-menu";
pub const MENU_BUTTON_ID: &str = "mobile-menu-button";

#[derive(Clone, Copy, PartialEq)]
pub struct MenuHandle {
    menu: Signal<MobileMenu>,
    page: PageHandle,
}

impl MenuHandle {
    pub fn is_open(&self) -> bool {
        self.menu.read().is_open()
    }

    pub fn toggle(&self) {
        let unlocked = self.page.is_animations_complete();
        let mut menu = self.menu;
        menu.write().toggle(unlocked);
    }

    /// Safe to call from raw DOM listeners that may outlive the navbar.
    pub fn dismiss(&self, reason: MenuDismiss) {
        let Ok(unlocked) = self.page.session.try_read().map(|s| s.is_animations_complete()) else {
            return;
        };
        let mut menu = self.menu;
        let open = menu.try_peek().map(|m| m.is_open()).unwrap_or(false);
        if open && let Ok(mut menu) = menu.try_write() {
            menu.dismiss(reason, unlocked);
        }
    }

    /// Scroll to a section and close the menu.
    pub fn navigate(&self, section: Section) {
        let offset = self.page.config().read().header_offset_px;
        if api::scroll_to_element(section.id(), offset) {
            self.dismiss(MenuDismiss::Navigate);
        }
    }
}

/// Mobile menu state with Escape and outside-click dismissal.
pub fn use_mobile_menu(page: PageHandle) -> MenuHandle {
    let menu = use_signal(MobileMenu::default);
    let handle = MenuHandle { menu, page };

    // Listeners live as long as the navbar
    use_hook(move || {
        let on_mousedown = DocumentListener::new("mousedown", move |event| {
            if !api::event_within(&event, MENU_ID) && !api::event_within(&event, MENU_BUTTON_ID) {
                handle.dismiss(MenuDismiss::OutsideClick);
            }
        });
        let on_keydown = DocumentListener::new("keydown", move |event| {
            let escape = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if escape {
                handle.dismiss(MenuDismiss::Escape);
            }
        });
        std::rc::Rc::new((on_mousedown, on_keydown))
    });

    handle
}
