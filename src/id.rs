//! Opaque book identifiers and the generators that mint them.

use serde::{Deserialize, Serialize};
use std::fmt;

// Lowercase base-36, the output shape of the catalog's original id scheme.
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 9;

/// An opaque identifier for a [`Book`](crate::Book).
///
/// Tokens are assigned exactly once, when a book enters a
/// [`Library`](crate::Library), and never change afterwards. They are
/// practically unique within a process's lifetime, not cryptographically
/// unique; treat them as opaque text with no structure to rely on.
///
/// Conversions from text exist so that tokens handed to an external
/// consumer (a URL path segment, a form field) can round-trip back into
/// lookups; a token that was never generated simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Returns the identifier as text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BookId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for BookId {
    #[inline]
    fn from(token: String) -> Self {
        BookId(token)
    }
}

impl From<&str> for BookId {
    #[inline]
    fn from(token: &str) -> Self {
        BookId(token.to_owned())
    }
}

/// A source of fresh identifier tokens.
///
/// [`Library`](crate::Library) keeps its generator behind this trait, so
/// substituting a deterministic source (in tests, say) changes nothing
/// about collection logic. Any `FnMut() -> BookId` closure qualifies.
pub trait IdSource {
    /// Produces the next identifier token.
    fn next_id(&mut self) -> BookId;
}

impl<F> IdSource for F
where
    F: FnMut() -> BookId,
{
    #[inline]
    fn next_id(&mut self) -> BookId {
        self()
    }
}

/// The default generator: fixed-length random lowercase alphanumeric
/// tokens.
///
/// Collision probability is non-zero but negligible at this scope; the
/// tokens carry no ordering or timestamp information.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> BookId {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let mut token = String::with_capacity(TOKEN_LEN);
        for _ in 0..TOKEN_LEN {
            let idx = rng.gen_range(0..TOKEN_ALPHABET.len());
            token.push(TOKEN_ALPHABET[idx] as char);
        }
        BookId(token)
    }
}
