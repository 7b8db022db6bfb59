use std::alloc::{self, Layout};
use std::ptr::NonNull;

use tracing::error;

use crate::error::{Error, Result};

/// Moves `value` onto the heap, reporting an exhausted allocator as [`Error::Allocation`] for
/// `structure` instead of aborting the process like `Box::new` does.
pub(crate) fn try_box<T>(value: T, structure: &'static str) -> Result<Box<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        // Zero sized values never touch the allocator.
        return Ok(Box::new(value));
    }

    // SAFETY: `layout` has a non-zero size.
    let raw = unsafe { alloc::alloc(layout) }.cast::<T>();
    let Some(ptr) = NonNull::new(raw) else {
        error!(structure, "Error allocating memory for {}", structure);
        return Err(Error::Allocation(structure));
    };

    // SAFETY: `ptr` was just returned by the global allocator for `Layout::new::<T>()`, which is
    // exactly the allocation `Box<T>` expects to own and later free. Writing initializes it.
    unsafe {
        ptr.as_ptr().write(value);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}
