//! # `inline_optional` - Inline Optional Values
//!
//! A value of type `T` that may or may not be present, stored inline with no
//! heap allocation, and with explicit control over when that value is
//! constructed, assigned and destroyed.
//!
//! ## Lifecycle Guarantees
//!
//! - **Exactly-once construction**: a `T` is only ever constructed into an
//!   empty slot; assigning onto a live value assigns it in place.
//! - **Exactly-once destruction**: the live value is dropped by `reset`, by an
//!   assignment from an empty container, or when the container is dropped,
//!   and never twice.
//! - **No hidden defaults**: `T` need not implement `Default`; an empty
//!   container holds no `T` at all.
//!
//! ## Access
//!
//! - [`Optional::value`] is the checked path and returns
//!   [`BadOptionalAccess`] on an empty container.
//! - `Deref` is the ergonomic path; dereferencing an empty container is a
//!   caller bug and panics.
//! - [`Optional::get_unchecked`] is the unchecked fast path, an `unsafe fn`
//!   whose precondition is `has_value()`.
//!
//! ## Feature Flags
//!
//! - `tracing`: emits TRACE-level lifecycle events (construct, assign, move
//!   out, destroy) under the `inline_optional` target.
//! - `proptest`: exports [`strategy::optional_strategy`].
//!
//! ## Example
//!
//! ```rust
//! use inline_optional::{BadOptionalAccess, Optional};
//!
//! let mut slot: Optional<String> = Optional::new();
//! assert_eq!(slot.value(), Err(BadOptionalAccess));
//!
//! slot.assign(String::from("x"));
//! assert_eq!(*slot, "x");
//!
//! slot.reset();
//! assert!(!slot.has_value());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod optional;
mod raw;
#[cfg(feature = "proptest")]
pub mod strategy;
mod trace;

pub use error::BadOptionalAccess;
pub use optional::Optional;

// Compile-time assertions for the inline layout.
const _: () = {
    use core::mem;

    // Storage is exactly one `T` plus the flag, with `T`'s alignment.
    assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<Optional<u64>>() == mem::size_of::<u64>() * 2);
    assert!(mem::size_of::<Optional<u8>>() == 2);

    // Zero-sized payloads cost only the flag.
    assert!(mem::size_of::<Optional<()>>() == 1);
};
