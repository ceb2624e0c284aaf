//! Raw storage layer.
//!
//! Higher layers (`optional`) do not perform ad-hoc `MaybeUninit` unsafe
//! operations; they call the small, audited surface in [`slot`]. This module
//! does **not** make those operations safe by itself, it only keeps their
//! safety conditions in one place.

pub(crate) mod slot;
