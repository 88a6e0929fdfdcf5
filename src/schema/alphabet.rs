//! The fixed input alphabet and its character-to-symbol mapping.

/// The 32-character alphabet. A symbol is a character's index in this string.
///
/// The ordering is load-bearing: it fixes the 5-bit value of every symbol,
/// so any change silently re-encodes every message.
pub const ALPHABET: &str = "+-=ABCDEFGHIJKLMNOPQRSTUVWXYZ_{}";

/// Number of bits needed to represent one symbol.
pub const SYMBOL_BITS: u32 = 5;

/// Ordered character-to-index mapping over [`ALPHABET`].
///
/// Built once; lookups are O(1) over the ASCII range.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Index table keyed by ASCII byte; `NO_SYMBOL` marks absent characters.
    index: [u8; 128],
}

const NO_SYMBOL: u8 = u8::MAX;

impl Alphabet {
    /// Build the mapping for the standard 32-character alphabet.
    pub fn standard() -> Self {
        let mut index = [NO_SYMBOL; 128];
        for (i, c) in ALPHABET.chars().enumerate() {
            index[c as usize] = i as u8;
        }
        Self { index }
    }

    /// Symbol index of `c`, or `None` if `c` is not in the alphabet.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<u8> {
        if (c as u32) < 128 {
            match self.index[c as usize] {
                NO_SYMBOL => None,
                i => Some(i),
            }
        } else {
            None
        }
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        ALPHABET.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}
