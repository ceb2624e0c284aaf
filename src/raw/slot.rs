//! Unsafe, centralized operations on the `MaybeUninit<T>` storage slot.
//!
//! `Optional<T>` keeps its value in a `MaybeUninit<T>` next to an `engaged`
//! flag. These helpers are the only place that turns that slot into a `T`:
//! - construction (`construct_in_place`)
//! - destruction (`destroy_in_place`)
//! - moving out (`move_out`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! The slot holds a live `T` *exactly when* the owning container's `engaged`
//! flag is `true`. Every helper below states which side of that invariant the
//! caller must be on.

use core::mem::MaybeUninit;

/// Constructs `value` inside a vacant slot and returns a reference to it.
///
/// # Safety
/// - `slot` must not hold a live `T`; otherwise the previous value leaks.
/// - The caller must record the slot as occupied before anything can observe it.
#[inline(always)]
pub(crate) unsafe fn construct_in_place<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Runs the destructor of the value held in `slot`.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - Must not be called twice for the same value; callers mark the slot vacant first.
#[inline(always)]
pub(crate) unsafe fn destroy_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { slot.assume_init_drop() }
}

/// Bitwise-moves the live value out of `slot`, leaving it logically vacant.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - The caller must mark the slot vacant so the value is not dropped again.
#[inline(always)]
pub(crate) unsafe fn move_out<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and ownership transfer.
    unsafe { slot.assume_init_read() }
}

/// Interprets an occupied slot as `&T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an occupied slot as `&mut T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_construct_then_destroy_runs_drop_once() {
        let probe = Rc::new(());
        let mut slot = MaybeUninit::uninit();

        unsafe {
            construct_in_place(&mut slot, Rc::clone(&probe));
            assert_eq!(Rc::strong_count(&probe), 2);
            destroy_in_place(&mut slot);
        }
        assert_eq!(Rc::strong_count(&probe), 1);
    }

    #[test]
    fn test_move_out_transfers_ownership() {
        let mut slot = MaybeUninit::uninit();
        unsafe {
            construct_in_place(&mut slot, String::from("moved"));
            *assume_init_mut(&mut slot) += "!";
            assert_eq!(assume_init_ref(&slot), "moved!");
            let owned = move_out(&slot);
            assert_eq!(owned, "moved!");
        }
    }
}
