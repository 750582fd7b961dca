//! Input size limits.

use crate::Error;

/// Largest input accepted, bounded by the `u32` offsets in [`crate::Range`].
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// Reject inputs whose offsets would not fit in a [`crate::Range`].
pub fn check_input_len(input: &str) -> Result<(), Error> {
    if input.len() > MAX_INPUT_LEN {
        return Err(Error::InputTooLarge {
            len: input.len(),
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}
