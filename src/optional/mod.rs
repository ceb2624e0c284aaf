//! `Optional<T>` — an inline, allocation-free optional value.
//!
//! The value lives in a `MaybeUninit<T>` slot owned by the container. A `T`
//! exists in that slot only between an explicit construct-in-place and the
//! matching destroy-in-place; the `engaged` flag records which side of that
//! window the container is on.
//!
//! ## States
//! - **Empty**: no `T` exists. `has_value()` is `false`.
//! - **Engaged**: exactly one live `T` exists. `has_value()` is `true`.
//!
//! Assigning a value onto an engaged container assigns the live `T` in place
//! instead of destroying and reconstructing it. Assigning from an empty
//! container resets the target.
//!
//! ## Moves
//! Rust moves are destructive, so a container consumed by [`Optional::assign_from`]
//! is gone. [`Optional::take_from`] moves out of a borrowed container and
//! always leaves it empty.


use core::{
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

use crate::error::BadOptionalAccess;
use crate::raw::slot;
use crate::trace::lifecycle;

/// A value of type `T` that may or may not be present, stored inline.
///
/// Layout note: `storage` comes first so `engaged` can sit in tail padding.
pub struct Optional<T> {
    storage: MaybeUninit<T>,
    engaged: bool,
}

impl<T> Optional<T> {
    /// Creates an empty container. No `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
            engaged: false,
        }
    }

    /// Creates a container holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        let mut this = Self::new();
        this.construct(value);
        this
    }

    /// Returns `true` if the container holds a value.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.engaged
    }

    /// Returns `true` if the container is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        !self.engaged
    }

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the container is empty. The container
    /// is left untouched.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        if self.engaged {
            // SAFETY: `engaged` is true.
            Ok(unsafe { slot::assume_init_ref(&self.storage) })
        } else {
            Err(BadOptionalAccess)
        }
    }

    /// Returns an exclusive reference to the contained value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the container is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        if self.engaged {
            // SAFETY: `engaged` is true.
            Ok(unsafe { slot::assume_init_mut(&mut self.storage) })
        } else {
            Err(BadOptionalAccess)
        }
    }

    /// Returns a reference to the contained value without checking for emptiness.
    ///
    /// # Safety
    /// The container must hold a value (`has_value()` is `true`). Calling this
    /// on an empty container is undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.engaged, "get_unchecked on an empty Optional");
        // SAFETY: caller guarantees `engaged`.
        unsafe { slot::assume_init_ref(&self.storage) }
    }

    /// Returns an exclusive reference to the contained value without checking
    /// for emptiness.
    ///
    /// # Safety
    /// The container must hold a value (`has_value()` is `true`).
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.engaged, "get_unchecked_mut on an empty Optional");
        // SAFETY: caller guarantees `engaged`.
        unsafe { slot::assume_init_mut(&mut self.storage) }
    }

    /// Returns `Some(&T)` if engaged.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.value().ok()
    }

    /// Returns `Some(&mut T)` if engaged.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.value_mut().ok()
    }

    /// Assigns `value` to the container.
    ///
    /// If the container is engaged, the live value is assigned in place and the
    /// previous value is dropped exactly once. Otherwise `value` is constructed
    /// in the empty slot.
    pub fn assign(&mut self, value: T) -> &mut T {
        if self.engaged {
            lifecycle!("assign", T);
            // SAFETY: `engaged` is true.
            let live = unsafe { slot::assume_init_mut(&mut self.storage) };
            *live = value;
            live
        } else {
            self.construct(value)
        }
    }

    /// Move-assigns from another container, consuming it.
    ///
    /// An engaged `source` is assigned as by [`assign`](Self::assign); an
    /// empty `source` resets `self`.
    pub fn assign_from(&mut self, source: Optional<T>) {
        match source.into_option() {
            Some(value) => {
                self.assign(value);
            }
            None => self.reset(),
        }
    }

    /// Move-assigns from a borrowed container, leaving `source` empty.
    pub fn take_from(&mut self, source: &mut Optional<T>) {
        match source.take() {
            Some(value) => {
                self.assign(value);
            }
            None => self.reset(),
        }
    }

    /// Destroys the current value, if any, then constructs one from `f`.
    ///
    /// If `f` panics the container is left empty.
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.reset();
        self.construct(f())
    }

    /// Returns the contained value, constructing it from `f` if the container
    /// is empty.
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if !self.engaged {
            self.construct(f());
        }
        // SAFETY: engaged on both paths.
        unsafe { slot::assume_init_mut(&mut self.storage) }
    }

    /// Moves the value out, leaving the container empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if !self.engaged {
            return None;
        }
        self.engaged = false;
        lifecycle!("move out", T);
        // SAFETY: the slot was engaged; clearing the flag hands ownership to us.
        Some(unsafe { slot::move_out(&self.storage) })
    }

    /// Replaces the contents with `value`, returning the previous value.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let previous = self.take();
        self.construct(value);
        previous
    }

    /// Converts into a standard `Option<T>`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    /// Destroys the contained value, if any. Idempotent.
    #[inline]
    pub fn reset(&mut self) {
        if self.engaged {
            self.destroy();
        }
    }

    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.engaged, "construct over a live value");
        lifecycle!("construct", T);
        // SAFETY: `engaged` is false, so the slot is vacant.
        let live = unsafe { slot::construct_in_place(&mut self.storage, value) };
        self.engaged = true;
        live
    }

    fn destroy(&mut self) {
        debug_assert!(self.engaged, "destroy of an empty slot");
        lifecycle!("destroy", T);
        // Clear first: a panicking `T::drop` must not leave the flag set.
        self.engaged = false;
        // SAFETY: the slot was engaged and is now marked vacant.
        unsafe { slot::destroy_in_place(&mut self.storage) };
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::some(value.clone()),
            None => Self::new(),
        }
    }

    /// Copy-assignment: an engaged target is updated with `T::clone_from`.
    fn clone_from(&mut self, source: &Self) {
        let Some(value) = source.as_option() else {
            self.reset();
            return;
        };
        if self.engaged {
            lifecycle!("assign", T);
            // SAFETY: `engaged` is true.
            let live = unsafe { slot::assume_init_mut(&mut self.storage) };
            live.clone_from(value);
        } else {
            self.construct(value.clone());
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

/// Dereferencing an empty container is a caller bug and panics with the
/// bad-access message. Use [`Optional::get_unchecked`] for the unchecked path.
impl<T> Deref for Optional<T> {
    type Target = T;

    #[track_caller]
    #[inline]
    fn deref(&self) -> &T {
        match self.value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    #[track_caller]
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match self.value_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional(<empty>)"),
        }
    }
}
