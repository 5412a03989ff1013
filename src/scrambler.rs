//! Scrambler: deterministic weak-key to printable-ASCII transform.
//!
//! Implements the mixing loop that converts a non-empty byte key into a
//! fixed 32-byte output. Each produced byte averages a key byte with its
//! mirror from the opposite end of the key, perturbed by a running shift
//! fed back from the previous output byte, then wrapped into the printable
//! ASCII range.
//!
//! Matches the original Go `WeakKeyScrambler` byte-for-byte for all inputs
//! whose first byte is at least `0x21`. For first bytes below `0x21` the
//! original's truncated modulo could leak out-of-range output; this
//! implementation uses a Euclidean modulo so the range invariant holds
//! unconditionally.

use crate::error::ScrambleError;

/// Length of a scrambled key in bytes.
pub const SCRAMBLED_KEY_LEN: usize = 32;

/// Lowest printable output byte (`!`).
const PRINTABLE_MIN: i64 = 0x21;

/// Number of distinct printable output values (`!` through `}`).
const PRINTABLE_SPAN: i64 = 0x5D;

/// Wraps an arbitrary integer into the printable ASCII range [0x21, 0x7D].
///
/// Uses a Euclidean (non-negative result) modulo, so negative inputs wrap
/// into range as well. This is the sole range-normalization mechanism of
/// the transform.
fn wrap_printable(i: i64) -> u8 {
    (i.rem_euclid(PRINTABLE_SPAN) + PRINTABLE_MIN) as u8
}

/// A 32-byte scrambled key composed exclusively of printable ASCII.
///
/// Every byte lies in the closed range [0x21, 0x7D] (`!` through `}`),
/// so the value is always valid ASCII and valid UTF-8. Produced only by
/// [`scramble`]; immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambledKey([u8; SCRAMBLED_KEY_LEN]);

impl ScrambledKey {
    /// Returns the scrambled key as a byte array reference.
    pub fn as_bytes(&self) -> &[u8; SCRAMBLED_KEY_LEN] {
        &self.0
    }

    /// Returns the scrambled key as a string slice.
    ///
    /// Always succeeds: every byte is printable ASCII by construction.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("scrambled key is printable ASCII")
    }

    /// Consumes the key and returns the raw 32-byte array.
    pub fn into_bytes(self) -> [u8; SCRAMBLED_KEY_LEN] {
        self.0
    }
}

impl AsRef<[u8]> for ScrambledKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for ScrambledKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scrambles a weak key into a 32-byte printable-ASCII key.
///
/// The transform is a pure function of the input bytes: identical input
/// always yields identical output. It performs repeated passes over the
/// key until 32 bytes have been produced; short keys are traversed
/// multiple times, long keys at most once.
///
/// For each key byte at position `i`, the byte and its mirror
/// (`key[len - i - 1]`) are each shifted by the running shift plus `i`,
/// wrapped into the printable range, halved, summed, and wrapped again.
/// The running shift starts at `key[0] - 0x21` and thereafter tracks the
/// most recently produced output byte.
///
/// The input is treated as raw bytes. Multi-byte encoded text is scrambled
/// by its byte sequence, not its character sequence.
///
/// # Parameters
/// - `key`: The key to scramble. Must not be empty.
///
/// # Returns
/// The 32-byte [`ScrambledKey`], every byte in [0x21, 0x7D].
///
/// # Errors
/// Returns [`ScrambleError::EmptyKey`] if `key` is empty. This is the only
/// error condition; the mixing loop itself cannot fail.
///
/// # Examples
///
/// ```
/// use keyscrambler::scramble;
///
/// let key = scramble("weakpassword").unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
///
/// ```
/// use keyscrambler::{scramble, error::ScrambleError};
///
/// assert_eq!(scramble([]), Err(ScrambleError::EmptyKey));
/// ```
pub fn scramble(key: impl AsRef<[u8]>) -> Result<ScrambledKey, ScrambleError> {
    let key = key.as_ref();
    if key.is_empty() {
        return Err(ScrambleError::EmptyKey);
    }

    let mut out = [0u8; SCRAMBLED_KEY_LEN];
    let mut produced = 0usize;
    // Seeds the first produced byte; afterwards the shift tracks the output.
    let mut shift = i64::from(key[0]) - PRINTABLE_MIN;

    'fill: loop {
        for (i, &b) in key.iter().enumerate() {
            if produced > 0 {
                shift = i64::from(out[produced - 1]) - PRINTABLE_MIN;
            }
            let mirror = key[key.len() - i - 1];
            let shifted_first = wrap_printable(i64::from(b) + shift + i as i64);
            let shifted_last = wrap_printable(i64::from(mirror) + shift + i as i64);
            out[produced] =
                wrap_printable(i64::from(shifted_first / 2) + i64::from(shifted_last / 2));
            produced += 1;
            if produced == SCRAMBLED_KEY_LEN {
                break 'fill;
            }
        }
    }

    Ok(ScrambledKey(out))
}
