use std::fmt::{self, Write as _};

use crate::bits;
use crate::config::Config;
use crate::decoder::{Isa, RawWord, RenderedInstruction, Width};
use crate::format::{self, BitRange, FieldOp, FormatToken};
use crate::symbols::{self, AddressResolver};
use crate::table::Flow;

/// Operand of an architecture directive: nothing (`%c`), a bit field
/// (`%0-7a`) or a number (`%1z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    None,
    Field(BitRange),
    Number(u32),
}

/// Output sink and word accessors handed to directive renderers.
pub struct Renderer<'a> {
    spec: &'a str,
    word: u32,
    width: Width,
    address: u64,
    pc: u64,
    config: &'a Config,
    resolver: &'a dyn AddressResolver,
    text: String,
    flow: Flow,
    target: Option<u64>,
}

impl<'a> Renderer<'a> {
    pub fn new(
        spec: &'a str,
        raw: RawWord,
        address: u64,
        pc_offset: u64,
        config: &'a Config,
        resolver: &'a dyn AddressResolver,
    ) -> Self {
        let word = match raw.width {
            Width::W16 => raw.bits & 0xffff,
            Width::W32 => raw.bits,
        };
        Self {
            spec,
            word,
            width: raw.width,
            address,
            pc: address.wrapping_add(pc_offset) & config.address_mask,
            config,
            resolver,
            text: String::new(),
            flow: Flow::empty(),
            target: None,
        }
    }

    pub fn word(&self) -> u32 {
        self.word
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    /// The address relative fields are measured from.
    pub fn pc(&self) -> u64 {
        self.pc
    }

    pub fn field(&self, range: BitRange) -> u32 {
        match self.width {
            Width::W16 => bits::extract(self.word as u16, range.lsb, range.msb),
            Width::W32 => bits::extract(self.word, range.lsb, range.msb),
        }
    }

    pub fn signed(&self, range: BitRange) -> i32 {
        bits::sign_extend(self.field(range), range.width())
    }

    pub fn bit(&self, n: u32) -> bool {
        self.field(BitRange::bit(n)) != 0
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn reg_name(&self, index: u32) -> &'static str {
        self.config.scheme.name(index)
    }

    pub fn reg(&mut self, index: u32) {
        let name = self.reg_name(index);
        self.text.push_str(name);
    }

    /// Comma separated register names in braces.
    pub fn reg_list(&mut self, regs: impl IntoIterator<Item = u32>) {
        self.text.push('{');
        for (i, r) in regs.into_iter().enumerate() {
            if i > 0 {
                self.text.push_str(", ");
            }
            self.reg(r);
        }
        self.text.push('}');
    }

    /// `0x` plus the value padded to the width of the instruction.
    pub fn hex(&mut self, v: u32) {
        let digits = self.width as usize * 2;
        let _ = write!(self.text, "{v:#0w$x}", w = digits + 2);
    }

    pub fn offset(&self, base: u64, delta: i64) -> u64 {
        base.wrapping_add_signed(delta) & self.config.address_mask
    }

    /// Writes an address operand with its symbolic annotation.
    pub fn address_ref(&mut self, address: u64) {
        let address = address & self.config.address_mask;
        let hint = self.resolver.resolve(address);
        self.text.push_str(&symbols::format_address(address, &hint));
    }

    /// Writes a branch destination and records it as the target.
    pub fn branch_to(&mut self, target: u64) {
        let target = target & self.config.address_mask;
        self.flow |= Flow::BRANCH;
        self.target = Some(target);
        self.address_ref(target);
    }

    pub fn mark(&mut self, flow: Flow) {
        self.flow |= flow;
    }

    #[cold]
    #[track_caller]
    pub fn corrupt(&self, why: impl fmt::Display) -> ! {
        format::corrupt(self.spec, why)
    }

    pub fn finish(self, flow: Flow) -> RenderedInstruction {
        let flow = self.flow | flow;
        RenderedInstruction {
            address: self.address,
            byte_length: self.width as u8,
            word: self.word,
            text: self.text,
            is_branch: flow.intersects(Flow::BRANCH | Flow::CALL | Flow::RETURN),
            is_call: flow.contains(Flow::CALL),
            target_address: self.target,
            flow,
        }
    }
}

impl fmt::Write for Renderer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

/// Interprets `spec` against the renderer's word.
pub fn render<I: Isa + ?Sized>(isa: &I, spec: &str, cx: &mut Renderer<'_>) {
    for token in format::tokens::<I::Directive>(spec) {
        match token {
            FormatToken::Text(t) => cx.push_str(t),
            FormatToken::Field { range, op } => field(isa, range, op, cx),
            FormatToken::IfSet { bit, ch } => {
                if cx.bit(bit) {
                    cx.push(ch);
                }
            }
            FormatToken::IfClear { bit, ch } => {
                if !cx.bit(bit) {
                    cx.push(ch);
                }
            }
            FormatToken::Choose { bit, set, clear } => {
                let ch = if cx.bit(bit) { set } else { clear };
                cx.push(ch);
            }
            FormatToken::Numbered { n, directive } => isa.render(directive, Arg::Number(n), cx),
            FormatToken::Directive(d) => isa.render(d, Arg::None, cx),
        }
    }
}

fn field<I: Isa + ?Sized>(isa: &I, range: BitRange, op: FieldOp<I::Directive>, cx: &mut Renderer<'_>) {
    match op {
        FieldOp::Decimal => {
            let v = cx.field(range);
            let _ = write!(cx, "{v}");
        }
        FieldOp::Hex => {
            let v = cx.field(range);
            cx.hex(v);
        }
        FieldOp::Nibble => {
            let v = cx.field(range) & 0xf;
            let _ = write!(cx, "{v:x}");
        }
        FieldOp::Register => {
            let r = cx.field(range);
            cx.reg(r);
        }
        FieldOp::Signed => {
            let v = cx.signed(range);
            let _ = write!(cx, "{v}");
        }
        FieldOp::Scaled(shift) => {
            let v = cx.field(range) << shift;
            let _ = write!(cx, "{v}");
        }
        FieldOp::PcRelative(shift) => {
            let delta = i64::from(cx.signed(range)) << shift;
            let target = cx.offset(cx.pc(), delta);
            cx.branch_to(target);
        }
        FieldOp::Arch(d) => isa.render(d, Arg::Field(range), cx),
    }
}
