//! Fixed-width bit packing and unpacking.
//!
//! The puzzle's transform is a two-stage re-pack: symbols are written out at
//! 5 bits each, then the flat bit stream is re-read at 8 bits per byte. Both
//! directions are pure functions over the whole input.

/// Flatten `values` into a bit sequence, `width` bits per value, MSB first.
///
/// Values wider than `width` bits have their high bits silently dropped;
/// callers validate magnitude up front.
pub fn pack_bits(values: &[u32], width: u32) -> Vec<bool> {
    let mut bits = Vec::with_capacity(values.len() * width as usize);
    for &value in values {
        for shift in (0..width).rev() {
            bits.push((value >> shift) & 1 == 1);
        }
    }
    bits
}

/// Re-read `bits` as values of `width` bits each, MSB first.
///
/// A trailing remainder shorter than `width` is dropped, not an error.
pub fn unpack_bits(bits: &[bool], width: u32) -> Vec<u32> {
    bits.chunks_exact(width as usize)
        .map(|group| group.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pack_is_msb_first() {
        let bits = pack_bits(&[0b10110], 5);
        assert_eq!(bits, vec![true, false, true, true, false]);
    }

    #[test]
    fn test_unpack_folds_msb_first() {
        let bits = vec![true, false, true, true, false];
        assert_eq!(unpack_bits(&bits, 5), vec![0b10110]);
    }

    #[test]
    fn test_repack_lengths() {
        // 8 symbols at 5 bits: 40 bits, re-read as exactly 5 bytes.
        let symbols: Vec<u32> = (0..8).collect();
        let bits = pack_bits(&symbols, 5);
        assert_eq!(bits.len(), 40);
        assert_eq!(unpack_bits(&bits, 8).len(), 5);
    }

    #[test]
    fn test_trailing_remainder_dropped() {
        // 3 symbols at 5 bits: 15 bits, one byte plus a dropped 7-bit tail.
        let bits = pack_bits(&[1, 2, 3], 5);
        assert_eq!(bits.len(), 15);
        assert_eq!(unpack_bits(&bits, 8).len(), 1);
    }

    #[test]
    fn test_known_repack_value() {
        // 0b00011 followed by 0b00100 re-reads as byte 0b00011001 = 0x19.
        let bits = pack_bits(&[3, 4], 5);
        let bytes = unpack_bits(&bits, 8);
        assert_eq!(bytes, vec![0x19]);
    }

    #[test]
    fn test_empty_input() {
        assert!(pack_bits(&[], 5).is_empty());
        assert!(unpack_bits(&[], 8).is_empty());
    }

    proptest! {
        #[test]
        fn prop_roundtrip_five_bit(symbols in prop::collection::vec(0u32..32, 1..64)) {
            let bits = pack_bits(&symbols, 5);
            prop_assert_eq!(unpack_bits(&bits, 5), symbols);
        }

        #[test]
        fn prop_roundtrip_any_width(
            width in 1u32..=16,
            values in prop::collection::vec(0u32..u32::from(u16::MAX), 1..32),
        ) {
            let masked: Vec<u32> = values.iter().map(|v| v & ((1u32 << width) - 1)).collect();
            let bits = pack_bits(&masked, width);
            prop_assert_eq!(bits.len(), masked.len() * width as usize);
            prop_assert_eq!(unpack_bits(&bits, width), masked);
        }
    }
}
