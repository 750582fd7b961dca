//! Compact range representation for zero-copy text references.
//!
//! Uses `u32` offsets to save memory (8 bytes vs 16 for usize pair).
//! Inputs longer than `u32::MAX` bytes are rejected up front
//! (see [`crate::limits::MAX_INPUT_LEN`]).

/// Compact byte range into the source text.
///
/// # Example
/// ```
/// use marktag::Range;
///
/// let input = "Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice(input), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

// Compile-time size verification
const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the text this range refers to.
    ///
    /// Ranges produced by this crate always sit on ASCII marker or
    /// line boundaries, so they are valid `str` slice points.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start_usize()..self.end_usize()]
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Check if `other` lies entirely inside this range.
    #[inline]
    pub const fn covers(&self, other: Range) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}
