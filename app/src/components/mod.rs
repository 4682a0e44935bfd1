//! UI Components
//!
//! One module per page section, plus the overlays driven by the page
//! session.

mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod loading;
mod navbar;
mod notification;
mod overlay;
mod tech_stack;
mod timeline;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::LoadingOverlay;
pub use navbar::Navbar;
pub use notification::CopyNotification;
pub use overlay::InteractionOverlay;
pub use timeline::Timeline;
