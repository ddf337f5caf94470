//! Fallible allocation for sizes read from input.

use crate::error::{GraphError, Result};

fn too_large(context: &str, len: usize) -> GraphError {
    GraphError::invalid_value(context, format!("{} (too large to allocate)", len))
}

/// `len` copies of `value`, or `InvalidValue` when the buffer cannot be reserved
pub(crate) fn filled<T: Clone>(context: &str, len: usize, value: T) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| too_large(context, len))?;
    items.resize(len, value);
    Ok(items)
}

/// `[0, 1, .., len - 1]`
pub(crate) fn identity(context: &str, len: usize) -> Result<Vec<usize>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| too_large(context, len))?;
    items.extend(0..len);
    Ok(items)
}
