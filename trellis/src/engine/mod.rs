//! Pure layout engines shared by the scrolling widgets.
//!
//! Everything in here is a deterministic function of its inputs: no state,
//! no host callbacks. The widgets own the state and call into these on every
//! scroll/resize event.

pub mod sticky;
pub mod window;
