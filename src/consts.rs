/// Number of entries in the reference table (codes 0..=115).
/// Six-element codes past `..--..` ('?') carry no assignment and are not stored.
pub const SEMAPHORE_MAX: usize = 116;

/// Longest dot/dash sequence a `MorseCode` can hold.
pub const MAX_ELEMENTS: usize = 6;

/// Size of the full code space for `MAX_ELEMENTS` elements plus the leading bit.
pub const CODE_SPACE: usize = 1 << (MAX_ELEMENTS + 1);

/// The line-break token (prosign `.-.-`).
pub const LINE_BREAK: char = '\r';
