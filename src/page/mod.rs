// Page state machine - the headless interaction core
//
// Everything in this tree models the behavior of the page without touching
// the terminal: scroll position, active-section tracking, the compact-layout
// menu, the notification slot, the contact form, and the orchestrating
// controller. Timing-sensitive pieces take an explicit `Instant` so the
// whole tree is testable with synthetic clocks.
//
// The coordinate space is virtual pixels: the page as designed, independent
// of terminal geometry. The TUI maps pixels onto cells at a fixed scale.

pub mod controller;
pub mod form;
pub mod menu;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod throttle;
