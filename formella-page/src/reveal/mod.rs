// reveal/ - Scroll reveal
//
// One-shot latch per section: a section is revealed the first time the
// intersection facility reports it inside the viewport, and stays revealed
// for the rest of the page session.
//
// The controller owns the registry and the revealed set. The facility is a
// trait so the browser observer and test doubles plug in the same way.

mod controller;
mod facility;
mod registry;
mod revealed;

pub use controller::{NotificationSink, SectionRegistration, Subscription, VisibilityController};
pub use facility::{IntersectionEntry, IntersectionFacility};
pub use registry::Registry;
pub use revealed::RevealedSet;

/// Class applied to a section wrapper before its reveal.
pub const HIDDEN_CLASS: &str = "opacity-0";
/// Class applied once the section has been revealed.
pub const REVEALED_CLASS: &str = "fade-in";

/// Pick the presentation class for a reveal state.
#[inline]
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed { REVEALED_CLASS } else { HIDDEN_CLASS }
}
