use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Bits `[lsb..=msb]` of `word`, right-justified.
///
/// Panics when the range is inverted or runs past the width of `W`: a bad
/// range can only come from a corrupt table, never from the instruction bits.
pub fn extract<W>(word: W, lsb: u32, msb: u32) -> u32
where
    W: PrimInt + Unsigned + AsPrimitive<u32>,
{
    let bits = W::zero().count_zeros();
    assert!(
        lsb <= msb && msb < bits,
        "internal decoder error: bit range {lsb}-{msb} outside a {bits}-bit word"
    );
    let width = msb - lsb + 1;
    let v: u32 = (word >> lsb as usize).as_();
    if width == 32 { v } else { v & ((1u32 << width) - 1) }
}

/// Same range as [`extract`], sign-extended from its top bit.
pub fn extract_signed<W>(word: W, lsb: u32, msb: u32) -> i32
where
    W: PrimInt + Unsigned + AsPrimitive<u32>,
{
    sign_extend(extract(word, lsb, msb), msb - lsb + 1)
}

pub fn extract_scaled<W>(word: W, lsb: u32, msb: u32, shift: u32) -> u32
where
    W: PrimInt + Unsigned + AsPrimitive<u32>,
{
    extract(word, lsb, msb) << shift
}

/// Two's-complement sign extension of the low `bits` bits of `value`.
pub fn sign_extend(value: u32, bits: u32) -> i32 {
    assert!((1..=32).contains(&bits), "internal decoder error: {bits}-bit field");
    let s = 32 - bits;
    ((value << s) as i32) >> s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(v: i32, bits: u32) -> u32 {
        if bits == 32 { v as u32 } else { (v as u32) & ((1u32 << bits) - 1) }
    }

    #[test]
    fn extracts_right_justified() {
        assert_eq!(extract(0xE1A0_0000u32, 28, 31), 0xE);
        assert_eq!(extract(0xE1A0_0000u32, 0, 31), 0xE1A0_0000);
        assert_eq!(extract(0x4700u16, 7, 15), 0x8E);
        assert_eq!(extract(0x4740u16, 6, 6), 1);
    }

    #[test]
    fn scaled_fields_shift_after_extraction() {
        // thumb `ldr rX, [pc, #imm8*4]`
        assert_eq!(extract_scaled(0x4805u16, 0, 7, 2), 20);
        assert_eq!(extract_scaled(0x8841u16, 6, 10, 1), 2);
        assert_eq!(extract_scaled(0x63ffu32, 0, 7, 3), 0x7f8);
    }

    #[test]
    fn sign_extension_round_trips_every_table_width() {
        for bits in [5u32, 7, 8, 10, 11, 16, 22, 23, 24, 25, 26] {
            let lo = -(1i64 << (bits - 1));
            let hi = (1i64 << (bits - 1)) - 1;
            for v in [lo, lo + 1, -1, 0, 1, hi - 1, hi] {
                let v = v as i32;
                let field = encode(v, bits) << 3;
                assert_eq!(extract_signed(field, 3, 3 + bits - 1), v, "{bits}-bit {v}");
            }
        }
    }

    #[test]
    fn signed_on_halfwords() {
        assert_eq!(extract_signed(0xD0FEu16, 0, 7), -2);
        assert_eq!(extract_signed(0xE400u16, 0, 10), -1024);
    }

    #[test]
    #[should_panic(expected = "internal decoder error")]
    fn inverted_range_is_fatal() {
        extract(0u32, 8, 4);
    }

    #[test]
    #[should_panic(expected = "internal decoder error")]
    fn range_past_halfword_is_fatal() {
        extract(0u16, 12, 16);
    }
}
