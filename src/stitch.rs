//! Two-halfword calls (Thumb `bl`/`blx`, MIPS16 `jal`/`jalx`).
//!
//! The first halfword matches an empty-format table entry. The second
//! halfword is fetched here and both are reported as one 4-byte instruction.

use tracing::debug;

use crate::bits;
use crate::config::Config;
use crate::decoder::{DecodeError, Isa, RawWord, RenderedInstruction, Width};
use crate::disasm::Renderer;
use crate::format::BitRange;
use crate::memory::ByteSource;
use crate::symbols::AddressResolver;
use crate::table::Flow;

/// A joined call: which mnemonic, where it goes, and whether it switches
/// instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub mnemonic: &'static str,
    pub target: u64,
    pub exchange: bool,
}

/// Concatenates fields, most significant first. Returns the value and its
/// total width in bits.
pub fn concat(parts: &[(u16, BitRange)]) -> (u32, u32) {
    parts.iter().fold((0, 0), |(value, width), &(half, r)| {
        ((value << r.width()) | bits::extract(half, r.lsb, r.msb), width + r.width())
    })
}

pub(crate) fn stitch<I: Isa + ?Sized>(
    isa: &I,
    config: &Config,
    address: u64,
    first: RawWord,
    bytes: &mut dyn ByteSource,
    resolver: &dyn AddressResolver,
) -> Result<RenderedInstruction, DecodeError> {
    let second = bytes.read_u16(address.wrapping_add(2), config.endian)?;
    let first = first.bits as u16;
    let pair = isa.join_pair(first, second, address);
    debug!(
        address = format_args!("{address:#x}"),
        mnemonic = pair.mnemonic,
        target = format_args!("{:#x}", pair.target),
        "joined two-halfword call"
    );

    let raw = RawWord { bits: u32::from(first) | u32::from(second) << 16, width: Width::W32 };
    let mut cx = Renderer::new("", raw, address, 0, config, resolver);
    cx.push_str(pair.mnemonic);
    cx.push('\t');
    cx.branch_to(pair.target);
    if pair.exchange {
        cx.mark(Flow::EXCHANGE);
    }
    Ok(cx.finish(Flow::CALL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_orders_high_part_first() {
        let (v, w) = concat(&[(0xf7ff, BitRange::new(0, 10)), (0xfffe, BitRange::new(0, 10))]);
        assert_eq!(w, 22);
        assert_eq!(v, 0x3f_fffe);
        assert_eq!(bits::sign_extend(v, w), -2);
    }
}
