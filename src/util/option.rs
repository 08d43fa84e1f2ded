#![cfg(feature = "collections")]

use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps a value that can't be [`None`]. Debug builds still check, hitting [`unreachable!`]
    /// on a broken invariant, while release builds compile the check away with
    /// [`unreachable_unchecked`](hint::unreachable_unchecked).
    ///
    /// Callers use this where a length or link invariant already rules out [`None`], so the
    /// usual panic and safety docs are left off.
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: Only called where the caller's own invariant rules out None.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
