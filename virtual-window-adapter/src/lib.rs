//! Event plumbing for the `virtual-window` crate.
//!
//! `virtual-window` reconciles on demand; this crate decides *when*. It provides small,
//! framework-neutral helpers that a host binding wires to its scroll container:
//!
//! - Animation-frame coalescing of scroll events, throttled per device class
//! - Resize de-duplication
//! - Tween-based smooth scrolling
//! - Scroll anchoring by item key (prepend or re-sort without visual jumps)
//!
//! [`Driver`] bundles all of them around any [`virtual_window::ScrollView`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod device;
mod driver;
mod frame;
mod resize;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{ScrollAnchor, apply_anchor, capture_anchor_at, capture_first_visible_anchor};
pub use device::{DeviceClass, MOBILE_MAX_WIDTH, Tuning};
pub use driver::{Driver, DriverOptions};
pub use frame::FrameCoalescer;
pub use resize::ResizeTracker;
pub use tween::{Easing, Tween};
