#![cfg(feature = "linked")]

use std::fmt::{self, Debug, Formatter};

/// Formats the items of a cloneable iterator as a debug list, without collecting them anywhere
/// first.
pub struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
