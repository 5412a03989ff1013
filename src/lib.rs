//! Deterministic weak-key scrambler.
//!
//! Transforms an arbitrary non-empty byte key into a fixed 32-byte value
//! composed exclusively of printable ASCII characters (`!` through `}`).
//! Intended as a key-shaping step in front of a downstream primitive that
//! requires exactly 32 bytes of key material, such as a 256-bit cipher key.
//!
//! This is **not** a key-derivation function: there is no salting, no entropy
//! amplification, and no brute-force resistance. A weak input key remains a
//! weak key after scrambling; only its shape changes.
//!
//! The transform treats its input strictly as raw bytes. Feeding it encoded
//! multi-byte text (e.g. UTF-8 beyond ASCII) produces output determined by
//! the underlying byte sequence, not the visual character sequence.
//!
//! # Architecture
//!
//! ```text
//! scramble  (mixing loop — repeated passes over the key, pairing each byte
//!            with its mirror from the opposite end, perturbed by a running
//!            shift fed back from the previous output byte)
//!     ↓ every produced byte normalized by
//! wrap      (Euclidean modulo 93, offset 33 — printable ASCII range)
//! ```
//!
//! # Examples
//!
//! Scramble a password into 32 bytes of printable ASCII:
//!
//! ```
//! use keyscrambler::scramble;
//!
//! let key = scramble("weakpassword").unwrap();
//! assert_eq!(key.as_bytes().len(), 32);
//! assert!(key.as_str().bytes().all(|b| (0x21..=0x7D).contains(&b)));
//! ```
//!
//! The empty key is the only error condition:
//!
//! ```
//! use keyscrambler::{scramble, error::ScrambleError};
//!
//! assert_eq!(scramble(""), Err(ScrambleError::EmptyKey));
//! ```

#![deny(clippy::all)]

pub mod error;

mod scrambler;

pub use scrambler::{scramble, ScrambledKey, SCRAMBLED_KEY_LEN};
