//! 32-bit ARM with the 16-bit Thumb instruction set.
//!
//! Thumb is selected by bit 0 of the address or by forcing compressed mode.
//! The Thumb `bl`/`blx` prefix is an empty-format entry joined with the
//! following halfword.

use std::fmt::Write as _;

use bitvec::prelude::*;

use crate::bits;
use crate::config::Config;
use crate::decoder::{DecodeRequest, Isa, Width};
use crate::disasm::{Arg, Renderer};
use crate::format::{BitRange, FieldOp, Syntax};
use crate::regs::RegisterScheme;
use crate::stitch::{self, Pair};
use crate::table::{Flow, OpcodeEntry, PcOffset, Table, COND_BRANCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmDirective {
    /// `%c` condition suffix from bits 28-31.
    Cond,
    /// `%o` rotated immediate or shifted register.
    Operand2,
    /// `%a` word/byte load/store address.
    Address,
    /// `%s` halfword and doubleword load/store address.
    HalfAddress,
    /// `%b` branch target; bit 24 is the link bit.
    Branch,
    /// `%B` `blx` immediate target with the H bit.
    BranchExchange,
    /// `%A` coprocessor load/store address.
    CoprocAddress,
    /// `%m` register list from bits 0-15.
    RegMask,
    /// `%C` psr field mask suffix.
    PsrFields,
    FpaCount,
    FpaPrecision,
    FpaLoadPrecision,
    FpaRounding,
    /// `%p` emits `p` when Rd is 15.
    PcSuffix,
    /// `%t` emits `t` for post-indexed user-mode transfers.
    TranslateSuffix,
    /// `%I` Cirrus 7-bit signed shift.
    CirrusShift,
    /// `%S` thumb register from bits 3-5, high when bit 6 is set.
    HighSource,
    /// `%D` thumb register from bits 0-2, high when bit 7 is set.
    HighDest,
    /// `%M` thumb low register list.
    LowRegs,
    /// `%N` thumb low register list plus `lr` when bit 8 is set.
    LowRegsLr,
    /// `%O` thumb low register list plus `pc` when bit 8 is set.
    LowRegsPc,
    /// `%L-Mx` hex immediate, with the IMB swi annotations.
    SwiNumber,
    /// `%L-Mf` fpa register, or a constant when the field exceeds 7.
    FpRegOrConst,
    /// `%L-Ma` thumb literal pool address, word aligned pc plus field × 4.
    LiteralPool,
    /// `%Ny` vfp single register encoding `N`.
    VfpSingle,
    /// `%Nz` vfp double register encoding `N`.
    VfpDouble,
}

impl Syntax for ArmDirective {
    fn bare(c: char) -> Option<Self> {
        use ArmDirective::*;
        Some(match c {
            'c' => Cond,
            'o' => Operand2,
            'a' => Address,
            's' => HalfAddress,
            'b' => Branch,
            'B' => BranchExchange,
            'A' => CoprocAddress,
            'm' => RegMask,
            'C' => PsrFields,
            'F' => FpaCount,
            'P' => FpaPrecision,
            'Q' => FpaLoadPrecision,
            'R' => FpaRounding,
            'p' => PcSuffix,
            't' => TranslateSuffix,
            'I' => CirrusShift,
            'S' => HighSource,
            'D' => HighDest,
            'M' => LowRegs,
            'N' => LowRegsLr,
            'O' => LowRegsPc,
            _ => return None,
        })
    }

    fn field(c: char) -> Option<FieldOp<Self>> {
        Some(match c {
            'r' => FieldOp::Register,
            'd' => FieldOp::Decimal,
            'X' => FieldOp::Nibble,
            'I' => FieldOp::Signed,
            'H' => FieldOp::Scaled(1),
            'W' => FieldOp::Scaled(2),
            'B' => FieldOp::PcRelative(1),
            'x' => FieldOp::Arch(ArmDirective::SwiNumber),
            'f' => FieldOp::Arch(ArmDirective::FpRegOrConst),
            'a' => FieldOp::Arch(ArmDirective::LiteralPool),
            _ => return None,
        })
    }

    fn numbered(c: char) -> Option<Self> {
        match c {
            'y' => Some(ArmDirective::VfpSingle),
            'z' => Some(ArmDirective::VfpDouble),
            _ => None,
        }
    }
}

const CONDITIONS: [&str; 16] =
    ["eq", "ne", "cs", "cc", "mi", "pl", "vs", "vc", "hi", "ls", "ge", "lt", "gt", "le", "", "nv"];

const SHIFTS: [&str; 4] = ["lsl", "lsr", "asr", "ror"];

const FP_CONSTANTS: [&str; 8] = ["0.0", "1.0", "2.0", "3.0", "4.0", "5.0", "0.5", "10.0"];

const P_BIT: u32 = 0x0100_0000;
const U_BIT: u32 = 0x0080_0000;
const W_BIT: u32 = 0x0020_0000;
const I_BIT: u32 = 0x0200_0000;

fn up(w: u32) -> &'static str {
    if w & U_BIT == 0 { "-" } else { "" }
}

fn writeback(w: u32) -> &'static str {
    if w & W_BIT == 0 { "" } else { "!" }
}

fn condition(cx: &mut Renderer<'_>, code: u32) {
    cx.push_str(CONDITIONS[(code & 0xf) as usize]);
    if code & 0xf < 14 {
        cx.mark(Flow::CONDITIONAL);
    }
}

/// Rm with its optional immediate or register shift.
fn shifted_register(cx: &mut Renderer<'_>, w: u32) {
    cx.reg(w & 0xf);
    if w & 0xff0 == 0 {
        return;
    }
    let kind = SHIFTS[((w >> 5) & 3) as usize];
    if w & 0x10 == 0 {
        let mut amount = (w >> 7) & 0x1f;
        if amount == 0 {
            if kind == "ror" {
                cx.push_str(", rrx");
                return;
            }
            amount = 32;
        }
        let _ = write!(cx, ", {kind} #{amount}");
    } else {
        let rs = cx.reg_name((w >> 8) & 0xf);
        let _ = write!(cx, ", {kind} {rs}");
    }
}

fn operand2(cx: &mut Renderer<'_>, w: u32) {
    if w & I_BIT != 0 {
        let rotate = (w & 0xf00) >> 7;
        let imm = (w & 0xff).rotate_right(rotate);
        let _ = write!(cx, "#{}\t; {imm:#x}", imm as i32);
    } else {
        shifted_register(cx, w);
    }
}

/// Data processing with Rd = pc is a jump; `mov pc, lr` is a return.
/// `tst`/`teq`/`cmp`/`cmn` and `msr` never write Rd.
fn data_writes_pc(cx: &mut Renderer<'_>, w: u32) {
    let opcode = (w >> 21) & 0xf;
    if (8..=11).contains(&opcode) || w & 0xf000 != 0xf000 {
        return;
    }
    if opcode == 13 && w & 0x0200_0fff == 0x00e {
        cx.mark(Flow::RETURN);
    } else {
        cx.mark(Flow::BRANCH);
    }
}

/// `ldr pc, [...]` is a jump, or a return when it pops from the stack.
fn load_writes_pc(cx: &mut Renderer<'_>, w: u32) {
    if w >> 28 == 0xf || w & 0x0010_0000 == 0 || w & 0xf000 != 0xf000 {
        return;
    }
    if (w >> 16) & 0xf == 13 {
        cx.mark(Flow::RETURN);
    } else {
        cx.mark(Flow::BRANCH);
    }
}

fn address(cx: &mut Renderer<'_>, w: u32) {
    if w & 0x000f_0000 == 0x000f_0000 && w & I_BIT == 0 {
        let offset = i64::from(w & 0xfff);
        let target = if w & P_BIT != 0 {
            let offset = if w & U_BIT == 0 { -offset } else { offset };
            let _ = write!(cx, "[pc, #{offset}]{}", writeback(w));
            cx.offset(cx.pc(), offset)
        } else {
            let _ = write!(cx, "[pc], #{offset}");
            cx.pc()
        };
        cx.push_str("\t; ");
        cx.address_ref(target);
        return;
    }

    cx.push('[');
    cx.reg((w >> 16) & 0xf);
    let offset = w & 0xfff;
    if w & P_BIT != 0 {
        if w & I_BIT == 0 {
            if offset != 0 {
                let _ = write!(cx, ", {}#{offset}", up(w));
            }
        } else {
            let _ = write!(cx, ", {}", up(w));
            shifted_register(cx, w);
        }
        let _ = write!(cx, "]{}", writeback(w));
    } else if w & I_BIT == 0 {
        if offset != 0 {
            let _ = write!(cx, "], {}#{offset}", up(w));
        } else {
            cx.push(']');
        }
    } else {
        let _ = write!(cx, "], {}", up(w));
        shifted_register(cx, w);
    }
}

fn half_address(cx: &mut Renderer<'_>, w: u32) {
    let imm = ((w & 0xf00) >> 4) | (w & 0xf);
    if w & 0x004f_0000 == 0x004f_0000 {
        let offset = if w & U_BIT == 0 { -i64::from(imm) } else { i64::from(imm) };
        let _ = write!(cx, "[pc, #{offset}]\t; ");
        let target = cx.offset(cx.pc(), offset);
        cx.address_ref(target);
        return;
    }

    cx.push('[');
    cx.reg((w >> 16) & 0xf);
    let immediate = w & 0x0040_0000 != 0;
    let rm = cx.reg_name(w & 0xf);
    if w & P_BIT != 0 {
        if !immediate {
            let _ = write!(cx, ", {}{rm}", up(w));
        } else if imm != 0 {
            let _ = write!(cx, ", {}#{imm}", up(w));
        }
        let _ = write!(cx, "]{}", writeback(w));
    } else if !immediate {
        let _ = write!(cx, "], {}{rm}", up(w));
    } else if imm != 0 {
        let _ = write!(cx, "], {}#{imm}", up(w));
    } else {
        cx.push(']');
    }
}

fn coproc_address(cx: &mut Renderer<'_>, w: u32) {
    cx.push('[');
    cx.reg((w >> 16) & 0xf);
    let offset = (w & 0xff) * 4;
    if offset == 0 {
        cx.push(']');
    } else if w & P_BIT != 0 {
        let _ = write!(cx, ", {}#{offset}]{}", up(w), writeback(w));
    } else {
        let _ = write!(cx, "], {}#{offset}", up(w));
    }
}

/// Thumb `push`/`pop`/`ldmia`/`stmia` lists over r0-r7 plus one optional extra.
fn low_regs(cx: &mut Renderer<'_>, w: u32, extra: Option<u32>) {
    let mask = w & 0xff;
    let extra = extra.filter(|_| w & 0x100 != 0);
    cx.reg_list(mask.view_bits::<Lsb0>().iter_ones().map(|r| r as u32).chain(extra));
}

fn vfp_register(cx: &mut Renderer<'_>, w: u32, form: u32, single: bool) {
    let (low, extra) = match form {
        0 | 4 => (w & 0xf, (w >> 5) & 1),
        1 | 3 => ((w >> 12) & 0xf, (w >> 22) & 1),
        2 => ((w >> 16) & 0xf, (w >> 7) & 1),
        _ => cx.corrupt(format_args!("vfp register form {form}")),
    };
    let kind = if single { 's' } else { 'd' };
    let regno = if single { low << 1 | extra } else { low };
    if form >= 3 {
        cx.push('{');
    }
    let _ = write!(cx, "{kind}{regno}");
    match form {
        3 => {
            let mut count = (w & 0xff) as i32;
            if !single {
                count >>= 1;
            }
            count -= 1;
            if count != 0 {
                let _ = write!(cx, "-{kind}{}", regno as i32 + count);
            }
            cx.push('}');
        }
        4 => {
            let _ = write!(cx, ", {kind}{}}}", regno + 1);
        }
        _ => {}
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Arm;

static TABLES: [&Table; 2] = [&ARM_TABLE, &THUMB_TABLE];

impl Isa for Arm {
    type Directive = ArmDirective;

    fn name(&self) -> &'static str {
        "arm"
    }

    fn tables(&self) -> &'static [&'static Table] {
        &TABLES
    }

    fn schemes(&self) -> &'static [RegisterScheme] {
        SCHEMES
    }

    fn default_scheme(&self) -> &'static str {
        "std"
    }

    fn compressed_mode(&self) -> Option<&'static str> {
        Some("thumb")
    }

    fn request(&self, address: u64, config: &Config) -> DecodeRequest {
        let thumb = config.force_compressed || address & 1 != 0;
        DecodeRequest {
            address: address & !1,
            width: if thumb { Width::W16 } else { Width::W32 },
            endian: config.endian,
            compressed: thumb,
            allow_short: false,
        }
    }

    fn table(&self, request: &DecodeRequest) -> &'static Table {
        if request.compressed { &THUMB_TABLE } else { &ARM_TABLE }
    }

    fn render(&self, directive: ArmDirective, arg: Arg, cx: &mut Renderer<'_>) {
        use ArmDirective::*;
        let w = cx.word();
        match (directive, arg) {
            (Cond, Arg::None) => condition(cx, w >> 28),
            (Operand2, Arg::None) => {
                operand2(cx, w);
                data_writes_pc(cx, w);
            }
            (Address, Arg::None) => {
                address(cx, w);
                load_writes_pc(cx, w);
            }
            (HalfAddress, Arg::None) => half_address(cx, w),
            (Branch, Arg::None) => {
                if w & P_BIT != 0 {
                    cx.mark(Flow::CALL);
                }
                let delta = i64::from(bits::sign_extend(w & 0x00ff_ffff, 24)) << 2;
                let target = cx.offset(cx.pc(), delta);
                cx.branch_to(target);
            }
            (BranchExchange, Arg::None) => {
                let mut delta = i64::from(bits::sign_extend(w & 0x00ff_ffff, 24)) << 2;
                if w & P_BIT != 0 {
                    delta += 2;
                }
                cx.mark(Flow::CALL | Flow::EXCHANGE);
                let target = cx.offset(cx.pc(), delta);
                cx.branch_to(target);
            }
            (CoprocAddress, Arg::None) => coproc_address(cx, w),
            (RegMask, Arg::None) => {
                let mask = w & 0xffff;
                cx.reg_list(mask.view_bits::<Lsb0>().iter_ones().map(|r| r as u32));
                if w & 0x0010_8000 == 0x0010_8000 {
                    cx.mark(Flow::RETURN);
                }
            }
            (PsrFields, Arg::None) => {
                cx.push('_');
                for (bit, c) in [(19, 'f'), (18, 's'), (17, 'x'), (16, 'c')] {
                    if w & (1 << bit) != 0 {
                        cx.push(c);
                    }
                }
            }
            (FpaCount, Arg::None) => cx.push_str(match w & 0x0040_8000 {
                0 => "4",
                0x8000 => "1",
                0x0040_0000 => "2",
                _ => "3",
            }),
            (FpaPrecision, Arg::None) => cx.push_str(match w & 0x0008_0080 {
                0 => "s",
                0x80 => "d",
                0x0008_0000 => "e",
                _ => "<illegal precision>",
            }),
            (FpaLoadPrecision, Arg::None) => cx.push_str(match w & 0x0040_8000 {
                0 => "s",
                0x8000 => "d",
                0x0040_0000 => "e",
                _ => "p",
            }),
            (FpaRounding, Arg::None) => cx.push_str(match w & 0x60 {
                0 => "",
                0x20 => "p",
                0x40 => "m",
                _ => "z",
            }),
            (PcSuffix, Arg::None) => {
                if w & 0xf000 == 0xf000 {
                    cx.push('p');
                }
            }
            (TranslateSuffix, Arg::None) => {
                if w & 0x0120_0000 == 0x0020_0000 {
                    cx.push('t');
                }
            }
            (CirrusShift, Arg::None) => {
                let imm = bits::sign_extend((w & 0xf) | ((w & 0xe0) >> 1), 7);
                let _ = write!(cx, "{imm}");
            }
            (HighSource, Arg::None) => cx.reg(((w >> 3) & 7) | ((w >> 3) & 8)),
            (HighDest, Arg::None) => cx.reg((w & 7) | ((w >> 4) & 8)),
            (LowRegs, Arg::None) => low_regs(cx, w, None),
            (LowRegsLr, Arg::None) => low_regs(cx, w, Some(14)),
            (LowRegsPc, Arg::None) => {
                if w & 0x100 != 0 {
                    cx.mark(Flow::RETURN);
                }
                low_regs(cx, w, Some(15));
            }
            (SwiNumber, Arg::Field(range)) => {
                let v = cx.field(range);
                cx.hex(v);
                match w & 0x0fff_ffff {
                    0x0ff0_0000 => cx.push_str("\t; IMB"),
                    0x0ff0_0001 => cx.push_str("\t; IMBRange"),
                    _ => {}
                }
            }
            (FpRegOrConst, Arg::Field(range)) => {
                let r = cx.field(range);
                if r > 7 {
                    let _ = write!(cx, "#{}", FP_CONSTANTS[(r & 7) as usize]);
                } else {
                    let _ = write!(cx, "f{r}");
                }
            }
            (LiteralPool, Arg::Field(range)) => {
                let target = (cx.pc() & !3).wrapping_add(u64::from(cx.field(range)) << 2);
                cx.address_ref(target);
            }
            (VfpSingle, Arg::Number(n)) => vfp_register(cx, w, n, true),
            (VfpDouble, Arg::Number(n)) => vfp_register(cx, w, n, false),
            (d, arg) => cx.corrupt(format_args!("{d:?} used with {arg:?}")),
        }
    }

    /// `bl`/`blx` as a pair: 11 high displacement bits in the first half,
    /// 11 low bits in the second. Bit 12 of the second half clear means `blx`.
    fn join_pair(&self, first: u16, second: u16, address: u64) -> Pair {
        let (disp, width) = stitch::concat(&[(first, BitRange::new(0, 10)), (second, BitRange::new(0, 10))]);
        let delta = i64::from(bits::sign_extend(disp, width)) * 2;
        let target = address.wrapping_add(4).wrapping_add_signed(delta);
        if second & 0x1000 == 0 {
            Pair { mnemonic: "blx", target: target & !3, exchange: true }
        } else {
            Pair { mnemonic: "bl", target, exchange: false }
        }
    }
}

static SCHEMES: &[RegisterScheme] = &[
    RegisterScheme {
        id: "raw",
        description: "Raw register numbers",
        names: &["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13", "r14", "r15"],
    },
    RegisterScheme {
        id: "gcc",
        description: "Names used by GCC",
        names: &["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "sl", "fp", "ip", "sp", "lr", "pc"],
    },
    RegisterScheme {
        id: "std",
        description: "Names used in the ARM architecture reference",
        names: &["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "sp", "lr", "pc"],
    },
    RegisterScheme {
        id: "apcs",
        description: "Names used by the APCS",
        names: &["a1", "a2", "a3", "a4", "v1", "v2", "v3", "v4", "v5", "v6", "sl", "fp", "ip", "sp", "lr", "pc"],
    },
    RegisterScheme {
        id: "atpcs",
        description: "Names used by the ATPCS",
        names: &["a1", "a2", "a3", "a4", "v1", "v2", "v3", "v4", "v5", "v6", "v7", "v8", "IP", "SP", "LR", "PC"],
    },
    RegisterScheme {
        id: "special-atpcs",
        description: "Special-purpose names used by the ATPCS",
        names: &["a1", "a2", "a3", "a4", "v1", "v2", "v3", "WR", "v5", "SB", "SL", "FP", "IP", "SP", "LR", "PC"],
    },
];

pub static ARM_TABLE: Table = Table {
    name: "arm",
    pc: PcOffset { half: 8, word: 8 },
    entries: &[
    // multiply, swap, long multiply
    OpcodeEntry::word(0xe1a00000, 0xffffffff, "nop\t\t\t(mov r0,r0)"),
    OpcodeEntry::word(0x012fff10, 0x0ffffff0, "bx%c\t%0-3r").flow(Flow::BRANCH),
    OpcodeEntry::word(0x00000090, 0x0fe000f0, "mul%c%20's\t%16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x00200090, 0x0fe000f0, "mla%c%20's\t%16-19r, %0-3r, %8-11r, %12-15r"),
    OpcodeEntry::word(0x01000090, 0x0fb00ff0, "swp%c%22'b\t%12-15r, %0-3r, [%16-19r]"),
    OpcodeEntry::word(0x00800090, 0x0fa000f0, "%22?sumull%c%20's\t%12-15r, %16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x00a00090, 0x0fa000f0, "%22?sumlal%c%20's\t%12-15r, %16-19r, %0-3r, %8-11r"),
    // v5j
    OpcodeEntry::word(0x012fff20, 0x0ffffff0, "bxj%c\t%0-3r").flow(Flow::BRANCH),
    // xscale dsp
    OpcodeEntry::word(0x0e200010, 0x0fff0ff0, "mia%c\tacc0, %0-3r, %12-15r"),
    OpcodeEntry::word(0x0e280010, 0x0fff0ff0, "miaph%c\tacc0, %0-3r, %12-15r"),
    OpcodeEntry::word(0x0e2c0010, 0x0ffc0ff0, "mia%17'T%17`B%16'T%16`B%c\tacc0, %0-3r, %12-15r"),
    OpcodeEntry::word(0x0c400000, 0x0ff00fff, "mar%c\tacc0, %12-15r, %16-19r"),
    OpcodeEntry::word(0x0c500000, 0x0ff00fff, "mra%c\t%12-15r, %16-19r, acc0"),
    OpcodeEntry::word(0xf450f000, 0xfc70f000, "pld\t%a"),
    // v5
    OpcodeEntry::word(0xe1200070, 0xfff000f0, "bkpt\t0x%16-19X%12-15X%8-11X%0-3X"),
    OpcodeEntry::word(0xfa000000, 0xfe000000, "blx\t%B"),
    OpcodeEntry::word(0x012fff30, 0x0ffffff0, "blx%c\t%0-3r").flow(Flow::CALL),
    OpcodeEntry::word(0x016f0f10, 0x0fff0ff0, "clz%c\t%12-15r, %0-3r"),
    OpcodeEntry::word(0xfc100000, 0xfe100000, "ldc2%22'l\t%8-11d, cr%12-15d, %A"),
    OpcodeEntry::word(0xfc000000, 0xfe100000, "stc2%22'l\t%8-11d, cr%12-15d, %A"),
    OpcodeEntry::word(0xfe000000, 0xff000010, "cdp2\t%8-11d, %20-23d, cr%12-15d, cr%16-19d, cr%0-3d, {%5-7d}"),
    OpcodeEntry::word(0xfe000010, 0xff100010, "mcr2\t%8-11d, %21-23d, %12-15r, cr%16-19d, cr%0-3d, {%5-7d}"),
    OpcodeEntry::word(0xfe100010, 0xff100010, "mrc2\t%8-11d, %21-23d, %12-15r, cr%16-19d, cr%0-3d, {%5-7d}"),
    // v5e
    OpcodeEntry::word(0x000000d0, 0x0e1000f0, "ldr%cd\t%12-15r, %s"),
    OpcodeEntry::word(0x000000f0, 0x0e1000f0, "str%cd\t%12-15r, %s"),
    OpcodeEntry::word(0x01000080, 0x0ff000f0, "smlabb%c\t%16-19r, %0-3r, %8-11r, %12-15r"),
    OpcodeEntry::word(0x010000a0, 0x0ff000f0, "smlatb%c\t%16-19r, %0-3r, %8-11r, %12-15r"),
    OpcodeEntry::word(0x010000c0, 0x0ff000f0, "smlabt%c\t%16-19r, %0-3r, %8-11r, %12-15r"),
    OpcodeEntry::word(0x010000e0, 0x0ff000f0, "smlatt%c\t%16-19r, %0-3r, %8-11r, %12-15r"),
    OpcodeEntry::word(0x01200080, 0x0ff000f0, "smlawb%c\t%16-19r, %0-3r, %8-11r, %12-15r"),
    OpcodeEntry::word(0x012000c0, 0x0ff000f0, "smlawt%c\t%16-19r, %0-3r, %8-11r, %12-15r"),
    OpcodeEntry::word(0x01400080, 0x0ff000f0, "smlalbb%c\t%12-15r, %16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x014000a0, 0x0ff000f0, "smlaltb%c\t%12-15r, %16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x014000c0, 0x0ff000f0, "smlalbt%c\t%12-15r, %16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x014000e0, 0x0ff000f0, "smlaltt%c\t%12-15r, %16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x01600080, 0x0ff0f0f0, "smulbb%c\t%16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x016000a0, 0x0ff0f0f0, "smultb%c\t%16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x016000c0, 0x0ff0f0f0, "smulbt%c\t%16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x016000e0, 0x0ff0f0f0, "smultt%c\t%16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x012000a0, 0x0ff0f0f0, "smulwb%c\t%16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x012000e0, 0x0ff0f0f0, "smulwt%c\t%16-19r, %0-3r, %8-11r"),
    OpcodeEntry::word(0x01000050, 0x0ff00ff0, "qadd%c\t%12-15r, %0-3r, %16-19r"),
    OpcodeEntry::word(0x01400050, 0x0ff00ff0, "qdadd%c\t%12-15r, %0-3r, %16-19r"),
    OpcodeEntry::word(0x01200050, 0x0ff00ff0, "qsub%c\t%12-15r, %0-3r, %16-19r"),
    OpcodeEntry::word(0x01600050, 0x0ff00ff0, "qdsub%c\t%12-15r, %0-3r, %16-19r"),
    OpcodeEntry::word(0x0c400000, 0x0ff00000, "mcrr%c\t%8-11d, %4-7d, %12-15r, %16-19r, cr%0-3d"),
    OpcodeEntry::word(0x0c500000, 0x0ff00000, "mrrc%c\t%8-11d, %4-7d, %12-15r, %16-19r, cr%0-3d"),
    // data processing, load/store, block transfer, branch, swi
    OpcodeEntry::word(0x00000090, 0x0e100090, "str%c%6's%5?hb\t%12-15r, %s"),
    OpcodeEntry::word(0x00100090, 0x0e100090, "ldr%c%6's%5?hb\t%12-15r, %s"),
    OpcodeEntry::word(0x00000000, 0x0de00000, "and%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x00200000, 0x0de00000, "eor%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x00400000, 0x0de00000, "sub%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x00600000, 0x0de00000, "rsb%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x00800000, 0x0de00000, "add%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x00a00000, 0x0de00000, "adc%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x00c00000, 0x0de00000, "sbc%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x00e00000, 0x0de00000, "rsc%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x0120f000, 0x0db0f000, "msr%c\t%22?SCPSR%C, %o"),
    OpcodeEntry::word(0x010f0000, 0x0fbf0fff, "mrs%c\t%12-15r, %22?SCPSR"),
    OpcodeEntry::word(0x01000000, 0x0de00000, "tst%c%p\t%16-19r, %o"),
    OpcodeEntry::word(0x01200000, 0x0de00000, "teq%c%p\t%16-19r, %o"),
    OpcodeEntry::word(0x01400000, 0x0de00000, "cmp%c%p\t%16-19r, %o"),
    OpcodeEntry::word(0x01600000, 0x0de00000, "cmn%c%p\t%16-19r, %o"),
    OpcodeEntry::word(0x01800000, 0x0de00000, "orr%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x01a00000, 0x0de00000, "mov%c%20's\t%12-15r, %o"),
    OpcodeEntry::word(0x01c00000, 0x0de00000, "bic%c%20's\t%12-15r, %16-19r, %o"),
    OpcodeEntry::word(0x01e00000, 0x0de00000, "mvn%c%20's\t%12-15r, %o"),
    OpcodeEntry::word(0x04000000, 0x0e100000, "str%c%22'b%t\t%12-15r, %a"),
    OpcodeEntry::word(0x06000000, 0x0e100ff0, "str%c%22'b%t\t%12-15r, %a"),
    OpcodeEntry::word(0x04000000, 0x0c100010, "str%c%22'b%t\t%12-15r, %a"),
    OpcodeEntry::word(0x06000010, 0x0e000010, "undefined"),
    OpcodeEntry::word(0x04100000, 0x0c100000, "ldr%c%22'b%t\t%12-15r, %a"),
    OpcodeEntry::word(0x08000000, 0x0e100000, "stm%c%23?id%24?ba\t%16-19r%21'!, %m%22'^"),
    OpcodeEntry::word(0x08100000, 0x0e100000, "ldm%c%23?id%24?ba\t%16-19r%21'!, %m%22'^"),
    OpcodeEntry::word(0x0a000000, 0x0e000000, "b%24'l%c\t%b"),
    OpcodeEntry::word(0x0f000000, 0x0f000000, "swi%c\t%0-23x"),
    // fpa
    OpcodeEntry::word(0x0e000100, 0x0ff08f10, "adf%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e100100, 0x0ff08f10, "muf%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e200100, 0x0ff08f10, "suf%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e300100, 0x0ff08f10, "rsf%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e400100, 0x0ff08f10, "dvf%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e500100, 0x0ff08f10, "rdf%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e600100, 0x0ff08f10, "pow%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e700100, 0x0ff08f10, "rpw%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e800100, 0x0ff08f10, "rmf%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e900100, 0x0ff08f10, "fml%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0ea00100, 0x0ff08f10, "fdv%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0eb00100, 0x0ff08f10, "frd%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0ec00100, 0x0ff08f10, "pol%c%P%R\t%12-14f, %16-18f, %0-3f"),
    OpcodeEntry::word(0x0e008100, 0x0ff08f10, "mvf%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e108100, 0x0ff08f10, "mnf%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e208100, 0x0ff08f10, "abs%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e308100, 0x0ff08f10, "rnd%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e408100, 0x0ff08f10, "sqt%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e508100, 0x0ff08f10, "log%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e608100, 0x0ff08f10, "lgn%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e708100, 0x0ff08f10, "exp%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e808100, 0x0ff08f10, "sin%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e908100, 0x0ff08f10, "cos%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0ea08100, 0x0ff08f10, "tan%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0eb08100, 0x0ff08f10, "asn%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0ec08100, 0x0ff08f10, "acs%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0ed08100, 0x0ff08f10, "atn%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0ee08100, 0x0ff08f10, "urd%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0ef08100, 0x0ff08f10, "nrm%c%P%R\t%12-14f, %0-3f"),
    OpcodeEntry::word(0x0e000110, 0x0ff00f1f, "flt%c%P%R\t%16-18f, %12-15r"),
    OpcodeEntry::word(0x0e100110, 0x0fff0f98, "fix%c%R\t%12-15r, %0-2f"),
    OpcodeEntry::word(0x0e200110, 0x0fff0fff, "wfs%c\t%12-15r"),
    OpcodeEntry::word(0x0e300110, 0x0fff0fff, "rfs%c\t%12-15r"),
    OpcodeEntry::word(0x0e400110, 0x0fff0fff, "wfc%c\t%12-15r"),
    OpcodeEntry::word(0x0e500110, 0x0fff0fff, "rfc%c\t%12-15r"),
    OpcodeEntry::word(0x0e90f110, 0x0ff8fff0, "cmf%c\t%16-18f, %0-3f"),
    OpcodeEntry::word(0x0eb0f110, 0x0ff8fff0, "cnf%c\t%16-18f, %0-3f"),
    OpcodeEntry::word(0x0ed0f110, 0x0ff8fff0, "cmfe%c\t%16-18f, %0-3f"),
    OpcodeEntry::word(0x0ef0f110, 0x0ff8fff0, "cnfe%c\t%16-18f, %0-3f"),
    OpcodeEntry::word(0x0c000100, 0x0e100f00, "stf%c%Q\t%12-14f, %A"),
    OpcodeEntry::word(0x0c100100, 0x0e100f00, "ldf%c%Q\t%12-14f, %A"),
    OpcodeEntry::word(0x0c000200, 0x0e100f00, "sfm%c\t%12-14f, %F, %A"),
    OpcodeEntry::word(0x0c100200, 0x0e100f00, "lfm%c\t%12-14f, %F, %A"),
    // vfp
    OpcodeEntry::word(0x0eb00bc0, 0x0fff0ff0, "fabsd%c\t%1z, %0z"),
    OpcodeEntry::word(0x0eb00ac0, 0x0fbf0fd0, "fabss%c\t%1y, %0y"),
    OpcodeEntry::word(0x0e300b00, 0x0ff00ff0, "faddd%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e300a00, 0x0fb00f50, "fadds%c\t%1y, %2y, %1y"),
    OpcodeEntry::word(0x0eb40b40, 0x0fff0f70, "fcmp%7'ed%c\t%1z, %0z"),
    OpcodeEntry::word(0x0eb40a40, 0x0fbf0f50, "fcmp%7'es%c\t%1y, %0y"),
    OpcodeEntry::word(0x0eb50b40, 0x0fff0f70, "fcmp%7'ezd%c\t%1z"),
    OpcodeEntry::word(0x0eb50a40, 0x0fbf0f70, "fcmp%7'ezs%c\t%1y"),
    OpcodeEntry::word(0x0eb00b40, 0x0fff0ff0, "fcpyd%c\t%1z, %0z"),
    OpcodeEntry::word(0x0eb00a40, 0x0fbf0fd0, "fcpys%c\t%1y, %0y"),
    OpcodeEntry::word(0x0eb70ac0, 0x0fff0fd0, "fcvtds%c\t%1z, %0y"),
    OpcodeEntry::word(0x0eb70bc0, 0x0fbf0ff0, "fcvtsd%c\t%1y, %0z"),
    OpcodeEntry::word(0x0e800b00, 0x0ff00ff0, "fdivd%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e800a00, 0x0fb00f50, "fdivs%c\t%1y, %2y, %0y"),
    OpcodeEntry::word(0x0d100b00, 0x0f700f00, "fldd%c\t%1z, %A"),
    OpcodeEntry::word(0x0c900b00, 0x0fd00f00, "fldmia%0?xd%c\t%16-19r%21'!, %3z"),
    OpcodeEntry::word(0x0d300b00, 0x0ff00f00, "fldmdb%0?xd%c\t%16-19r!, %3z"),
    OpcodeEntry::word(0x0d100a00, 0x0f300f00, "flds%c\t%1y, %A"),
    OpcodeEntry::word(0x0c900a00, 0x0f900f00, "fldmias%c\t%16-19r%21'!, %3y"),
    OpcodeEntry::word(0x0d300a00, 0x0fb00f00, "fldmdbs%c\t%16-19r!, %3y"),
    OpcodeEntry::word(0x0e000b00, 0x0ff00ff0, "fmacd%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e000a00, 0x0fb00f50, "fmacs%c\t%1y, %2y, %0y"),
    OpcodeEntry::word(0x0e200b10, 0x0ff00fff, "fmdhr%c\t%2z, %12-15r"),
    OpcodeEntry::word(0x0e000b10, 0x0ff00fff, "fmdlr%c\t%2z, %12-15r"),
    OpcodeEntry::word(0x0c400b10, 0x0ff00ff0, "fmdrr%c\t%0z, %12-15r, %16-19r"),
    OpcodeEntry::word(0x0e300b10, 0x0ff00fff, "fmrdh%c\t%12-15r, %2z"),
    OpcodeEntry::word(0x0e100b10, 0x0ff00fff, "fmrdl%c\t%12-15r, %2z"),
    OpcodeEntry::word(0x0c500b10, 0x0ff00ff0, "fmrrd%c\t%12-15r, %16-19r, %0z"),
    OpcodeEntry::word(0x0c500a10, 0x0ff00fd0, "fmrrs%c\t%12-15r, %16-19r, %4y"),
    OpcodeEntry::word(0x0e100a10, 0x0ff00f7f, "fmrs%c\t%12-15r, %2y"),
    OpcodeEntry::word(0x0ef1fa10, 0x0fffffff, "fmstat%c"),
    OpcodeEntry::word(0x0ef00a10, 0x0fff0fff, "fmrx%c\t%12-15r, fpsid"),
    OpcodeEntry::word(0x0ef10a10, 0x0fff0fff, "fmrx%c\t%12-15r, fpscr"),
    OpcodeEntry::word(0x0ef80a10, 0x0fff0fff, "fmrx%c\t%12-15r, fpexc"),
    OpcodeEntry::word(0x0ef90a10, 0x0fff0fff, "fmrx%c\t%12-15r, fpinst\t@ Impl def"),
    OpcodeEntry::word(0x0efa0a10, 0x0fff0fff, "fmrx%c\t%12-15r, fpinst2\t@ Impl def"),
    OpcodeEntry::word(0x0ef00a10, 0x0ff00fff, "fmrx%c\t%12-15r, <impl def 0x%16-19x>"),
    OpcodeEntry::word(0x0e100b00, 0x0ff00ff0, "fmscd%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e100a00, 0x0fb00f50, "fmscs%c\t%1y, %2y, %0y"),
    OpcodeEntry::word(0x0e000a10, 0x0ff00f7f, "fmsr%c\t%2y, %12-15r"),
    OpcodeEntry::word(0x0c400a10, 0x0ff00fd0, "fmsrr%c\t%12-15r, %16-19r, %4y"),
    OpcodeEntry::word(0x0e200b00, 0x0ff00ff0, "fmuld%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e200a00, 0x0fb00f50, "fmuls%c\t%1y, %2y, %0y"),
    OpcodeEntry::word(0x0ee00a10, 0x0fff0fff, "fmxr%c\tfpsid, %12-15r"),
    OpcodeEntry::word(0x0ee10a10, 0x0fff0fff, "fmxr%c\tfpscr, %12-15r"),
    OpcodeEntry::word(0x0ee80a10, 0x0fff0fff, "fmxr%c\tfpexc, %12-15r"),
    OpcodeEntry::word(0x0ee90a10, 0x0fff0fff, "fmxr%c\tfpinst, %12-15r\t@ Impl def"),
    OpcodeEntry::word(0x0eea0a10, 0x0fff0fff, "fmxr%c\tfpinst2, %12-15r\t@ Impl def"),
    OpcodeEntry::word(0x0ee00a10, 0x0ff00fff, "fmxr%c\t<impl def 0x%16-19x>, %12-15r"),
    OpcodeEntry::word(0x0eb10b40, 0x0fff0ff0, "fnegd%c\t%1z, %0z"),
    OpcodeEntry::word(0x0eb10a40, 0x0fbf0fd0, "fnegs%c\t%1y, %0y"),
    OpcodeEntry::word(0x0e000b40, 0x0ff00ff0, "fnmacd%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e000a40, 0x0fb00f50, "fnmacs%c\t%1y, %2y, %0y"),
    OpcodeEntry::word(0x0e100b40, 0x0ff00ff0, "fnmscd%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e100a40, 0x0fb00f50, "fnmscs%c\t%1y, %2y, %0y"),
    OpcodeEntry::word(0x0e200b40, 0x0ff00ff0, "fnmuld%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e200a40, 0x0fb00f50, "fnmuls%c\t%1y, %2y, %0y"),
    OpcodeEntry::word(0x0eb80bc0, 0x0fff0fd0, "fsitod%c\t%1z, %0y"),
    OpcodeEntry::word(0x0eb80ac0, 0x0fbf0fd0, "fsitos%c\t%1y, %0y"),
    OpcodeEntry::word(0x0eb10bc0, 0x0fff0ff0, "fsqrtd%c\t%1z, %0z"),
    OpcodeEntry::word(0x0eb10ac0, 0x0fbf0fd0, "fsqrts%c\t%1y, %0y"),
    OpcodeEntry::word(0x0d000b00, 0x0f700f00, "fstd%c\t%1z, %A"),
    OpcodeEntry::word(0x0c800b00, 0x0fd00f00, "fstmia%0?xd%c\t%16-19r%21'!, %3z"),
    OpcodeEntry::word(0x0d200b00, 0x0ff00f00, "fstmdb%0?xd%c\t%16-19r!, %3z"),
    OpcodeEntry::word(0x0d000a00, 0x0f300f00, "fsts%c\t%1y, %A"),
    OpcodeEntry::word(0x0c800a00, 0x0f900f00, "fstmias%c\t%16-19r%21'!, %3y"),
    OpcodeEntry::word(0x0d200a00, 0x0fb00f00, "fstmdbs%c\t%16-19r!, %3y"),
    OpcodeEntry::word(0x0e300b40, 0x0ff00ff0, "fsubd%c\t%1z, %2z, %0z"),
    OpcodeEntry::word(0x0e300a40, 0x0fb00f50, "fsubs%c\t%1y, %2y, %0y"),
    OpcodeEntry::word(0x0ebc0b40, 0x0fbe0f70, "fto%16?sui%7'zd%c\t%1y, %0z"),
    OpcodeEntry::word(0x0ebc0a40, 0x0fbe0f50, "fto%16?sui%7'zs%c\t%1y, %0y"),
    OpcodeEntry::word(0x0eb80b40, 0x0fff0fd0, "fuitod%c\t%1z, %0y"),
    OpcodeEntry::word(0x0eb80a40, 0x0fbf0fd0, "fuitos%c\t%1y, %0y"),
    // cirrus maverick
    OpcodeEntry::word(0x0d100400, 0x0f500f00, "cfldrs%c\tmvf%12-15d, %A"),
    OpcodeEntry::word(0x0c100400, 0x0f500f00, "cfldrs%c\tmvf%12-15d, %A"),
    OpcodeEntry::word(0x0d500400, 0x0f500f00, "cfldrd%c\tmvd%12-15d, %A"),
    OpcodeEntry::word(0x0c500400, 0x0f500f00, "cfldrd%c\tmvd%12-15d, %A"),
    OpcodeEntry::word(0x0d100500, 0x0f500f00, "cfldr32%c\tmvfx%12-15d, %A"),
    OpcodeEntry::word(0x0c100500, 0x0f500f00, "cfldr32%c\tmvfx%12-15d, %A"),
    OpcodeEntry::word(0x0d500500, 0x0f500f00, "cfldr64%c\tmvdx%12-15d, %A"),
    OpcodeEntry::word(0x0c500500, 0x0f500f00, "cfldr64%c\tmvdx%12-15d, %A"),
    OpcodeEntry::word(0x0d000400, 0x0f500f00, "cfstrs%c\tmvf%12-15d, %A"),
    OpcodeEntry::word(0x0c000400, 0x0f500f00, "cfstrs%c\tmvf%12-15d, %A"),
    OpcodeEntry::word(0x0d400400, 0x0f500f00, "cfstrd%c\tmvd%12-15d, %A"),
    OpcodeEntry::word(0x0c400400, 0x0f500f00, "cfstrd%c\tmvd%12-15d, %A"),
    OpcodeEntry::word(0x0d000500, 0x0f500f00, "cfstr32%c\tmvfx%12-15d, %A"),
    OpcodeEntry::word(0x0c000500, 0x0f500f00, "cfstr32%c\tmvfx%12-15d, %A"),
    OpcodeEntry::word(0x0d400500, 0x0f500f00, "cfstr64%c\tmvdx%12-15d, %A"),
    OpcodeEntry::word(0x0c400500, 0x0f500f00, "cfstr64%c\tmvdx%12-15d, %A"),
    OpcodeEntry::word(0x0e000450, 0x0ff00ff0, "cfmvsr%c\tmvf%16-19d, %12-15r"),
    OpcodeEntry::word(0x0e100450, 0x0ff00ff0, "cfmvrs%c\t%12-15r, mvf%16-19d"),
    OpcodeEntry::word(0x0e000410, 0x0ff00ff0, "cfmvdlr%c\tmvd%16-19d, %12-15r"),
    OpcodeEntry::word(0x0e100410, 0x0ff00ff0, "cfmvrdl%c\t%12-15r, mvd%16-19d"),
    OpcodeEntry::word(0x0e000430, 0x0ff00ff0, "cfmvdhr%c\tmvd%16-19d, %12-15r"),
    OpcodeEntry::word(0x0e100430, 0x0ff00fff, "cfmvrdh%c\t%12-15r, mvd%16-19d"),
    OpcodeEntry::word(0x0e000510, 0x0ff00fff, "cfmv64lr%c\tmvdx%16-19d, %12-15r"),
    OpcodeEntry::word(0x0e100510, 0x0ff00fff, "cfmvr64l%c\t%12-15r, mvdx%16-19d"),
    OpcodeEntry::word(0x0e000530, 0x0ff00fff, "cfmv64hr%c\tmvdx%16-19d, %12-15r"),
    OpcodeEntry::word(0x0e100530, 0x0ff00fff, "cfmvr64h%c\t%12-15r, mvdx%16-19d"),
    OpcodeEntry::word(0x0e100610, 0x0ff0fff0, "cfmval32%c\tmvax%0-3d, mvfx%16-19d"),
    OpcodeEntry::word(0x0e000610, 0x0ff0fff0, "cfmv32al%c\tmvfx%0-3d, mvax%16-19d"),
    OpcodeEntry::word(0x0e100630, 0x0ff0fff0, "cfmvam32%c\tmvax%0-3d, mvfx%16-19d"),
    OpcodeEntry::word(0x0e000630, 0x0ff0fff0, "cfmv32am%c\tmvfx%0-3d, mvax%16-19d"),
    OpcodeEntry::word(0x0e100650, 0x0ff0fff0, "cfmvah32%c\tmvax%0-3d, mvfx%16-19d"),
    OpcodeEntry::word(0x0e000650, 0x0ff0fff0, "cfmv32ah%c\tmvfx%0-3d, mvax%16-19d"),
    OpcodeEntry::word(0x0e000670, 0x0ff0fff0, "cfmv32a%c\tmvfx%0-3d, mvax%16-19d"),
    OpcodeEntry::word(0x0e100670, 0x0ff0fff0, "cfmva32%c\tmvax%0-3d, mvfx%16-19d"),
    OpcodeEntry::word(0x0e000690, 0x0ff0fff0, "cfmv64a%c\tmvdx%0-3d, mvax%16-19d"),
    OpcodeEntry::word(0x0e100690, 0x0ff0fff0, "cfmva64%c\tmvax%0-3d, mvdx%16-19d"),
    OpcodeEntry::word(0x0e1006b0, 0x0ff0fff0, "cfmvsc32%c\tdspsc, mvfx%16-19d"),
    OpcodeEntry::word(0x0e0006b0, 0x0ff0fff0, "cfmv32sc%c\tmvfx%0-3d, dspsc"),
    OpcodeEntry::word(0x0e000400, 0x0ff00fff, "cfcpys%c\tmvf%12-15d, mvf%16-19d"),
    OpcodeEntry::word(0x0e000420, 0x0ff00fff, "cfcpyd%c\tmvd%12-15d, mvd%16-19d"),
    OpcodeEntry::word(0x0e000460, 0x0ff00fff, "cfcvtsd%c\tmvd%12-15d, mvf%16-19d"),
    OpcodeEntry::word(0x0e000440, 0x0ff00fff, "cfcvtds%c\tmvf%12-15d, mvd%16-19d"),
    OpcodeEntry::word(0x0e000480, 0x0ff00fff, "cfcvt32s%c\tmvf%12-15d, mvfx%16-19d"),
    OpcodeEntry::word(0x0e0004a0, 0x0ff00fff, "cfcvt32d%c\tmvd%12-15d, mvfx%16-19d"),
    OpcodeEntry::word(0x0e0004c0, 0x0ff00fff, "cfcvt64s%c\tmvf%12-15d, mvdx%16-19d"),
    OpcodeEntry::word(0x0e0004e0, 0x0ff00fff, "cfcvt64d%c\tmvd%12-15d, mvdx%16-19d"),
    OpcodeEntry::word(0x0e100580, 0x0ff00fff, "cfcvts32%c\tmvfx%12-15d, mvf%16-19d"),
    OpcodeEntry::word(0x0e1005a0, 0x0ff00fff, "cfcvtd32%c\tmvfx%12-15d, mvd%16-19d"),
    OpcodeEntry::word(0x0e1005c0, 0x0ff00fff, "cftruncs32%c\tmvfx%12-15d, mvf%16-19d"),
    OpcodeEntry::word(0x0e1005e0, 0x0ff00fff, "cftruncd32%c\tmvfx%12-15d, mvd%16-19d"),
    OpcodeEntry::word(0x0e000550, 0x0ff00ff0, "cfrshl32%c\tmvfx%16-19d, mvfx%0-3d, %12-15r"),
    OpcodeEntry::word(0x0e000570, 0x0ff00ff0, "cfrshl64%c\tmvdx%16-19d, mvdx%0-3d, %12-15r"),
    OpcodeEntry::word(0x0e000500, 0x0ff00f00, "cfsh32%c\tmvfx%12-15d, mvfx%16-19d, #%I"),
    OpcodeEntry::word(0x0e200500, 0x0ff00f00, "cfsh64%c\tmvdx%12-15d, mvdx%16-19d, #%I"),
    OpcodeEntry::word(0x0e100490, 0x0ff00ff0, "cfcmps%c\t%12-15r, mvf%16-19d, mvf%0-3d"),
    OpcodeEntry::word(0x0e1004b0, 0x0ff00ff0, "cfcmpd%c\t%12-15r, mvd%16-19d, mvd%0-3d"),
    OpcodeEntry::word(0x0e100590, 0x0ff00ff0, "cfcmp32%c\t%12-15r, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e1005b0, 0x0ff00ff0, "cfcmp64%c\t%12-15r, mvdx%16-19d, mvdx%0-3d"),
    OpcodeEntry::word(0x0e300400, 0x0ff00fff, "cfabss%c\tmvf%12-15d, mvf%16-19d"),
    OpcodeEntry::word(0x0e300420, 0x0ff00fff, "cfabsd%c\tmvd%12-15d, mvd%16-19d"),
    OpcodeEntry::word(0x0e300440, 0x0ff00fff, "cfnegs%c\tmvf%12-15d, mvf%16-19d"),
    OpcodeEntry::word(0x0e300460, 0x0ff00fff, "cfnegd%c\tmvd%12-15d, mvd%16-19d"),
    OpcodeEntry::word(0x0e300480, 0x0ff00ff0, "cfadds%c\tmvf%12-15d, mvf%16-19d, mvf%0-3d"),
    OpcodeEntry::word(0x0e3004a0, 0x0ff00ff0, "cfaddd%c\tmvd%12-15d, mvd%16-19d, mvd%0-3d"),
    OpcodeEntry::word(0x0e3004c0, 0x0ff00ff0, "cfsubs%c\tmvf%12-15d, mvf%16-19d, mvf%0-3d"),
    OpcodeEntry::word(0x0e3004e0, 0x0ff00ff0, "cfsubd%c\tmvd%12-15d, mvd%16-19d, mvd%0-3d"),
    OpcodeEntry::word(0x0e100400, 0x0ff00ff0, "cfmuls%c\tmvf%12-15d, mvf%16-19d, mvf%0-3d"),
    OpcodeEntry::word(0x0e100420, 0x0ff00ff0, "cfmuld%c\tmvd%12-15d, mvd%16-19d, mvd%0-3d"),
    OpcodeEntry::word(0x0e300500, 0x0ff00fff, "cfabs32%c\tmvfx%12-15d, mvfx%16-19d"),
    OpcodeEntry::word(0x0e300520, 0x0ff00fff, "cfabs64%c\tmvdx%12-15d, mvdx%16-19d"),
    OpcodeEntry::word(0x0e300540, 0x0ff00fff, "cfneg32%c\tmvfx%12-15d, mvfx%16-19d"),
    OpcodeEntry::word(0x0e300560, 0x0ff00fff, "cfneg64%c\tmvdx%12-15d, mvdx%16-19d"),
    OpcodeEntry::word(0x0e300580, 0x0ff00ff0, "cfadd32%c\tmvfx%12-15d, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e3005a0, 0x0ff00ff0, "cfadd64%c\tmvdx%12-15d, mvdx%16-19d, mvdx%0-3d"),
    OpcodeEntry::word(0x0e3005c0, 0x0ff00ff0, "cfsub32%c\tmvfx%12-15d, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e3005e0, 0x0ff00ff0, "cfsub64%c\tmvdx%12-15d, mvdx%16-19d, mvdx%0-3d"),
    OpcodeEntry::word(0x0e100500, 0x0ff00ff0, "cfmul32%c\tmvfx%12-15d, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e100520, 0x0ff00ff0, "cfmul64%c\tmvdx%12-15d, mvdx%16-19d, mvdx%0-3d"),
    OpcodeEntry::word(0x0e100540, 0x0ff00ff0, "cfmac32%c\tmvfx%12-15d, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e100560, 0x0ff00ff0, "cfmsc32%c\tmvfx%12-15d, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e000600, 0x0ff00f00, "cfmadd32%c\tmvax%5-7d, mvfx%12-15d, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e100600, 0x0ff00f00, "cfmsub32%c\tmvax%5-7d, mvfx%12-15d, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e200600, 0x0ff00f00, "cfmadda32%c\tmvax%5-7d, mvax%12-15d, mvfx%16-19d, mvfx%0-3d"),
    OpcodeEntry::word(0x0e300600, 0x0ff00f00, "cfmsuba32%c\tmvax%5-7d, mvax%12-15d, mvfx%16-19d, mvfx%0-3d"),
    // generic coprocessor
    OpcodeEntry::word(0x0e000000, 0x0f000010, "cdp%c\t%8-11d, %20-23d, cr%12-15d, cr%16-19d, cr%0-3d, {%5-7d}"),
    OpcodeEntry::word(0x0e100010, 0x0f100010, "mrc%c\t%8-11d, %21-23d, %12-15r, cr%16-19d, cr%0-3d, {%5-7d}"),
    OpcodeEntry::word(0x0e000010, 0x0f100010, "mcr%c\t%8-11d, %21-23d, %12-15r, cr%16-19d, cr%0-3d, {%5-7d}"),
    OpcodeEntry::word(0x0c000000, 0x0e100000, "stc%c%22'l\t%8-11d, cr%12-15d, %A"),
    OpcodeEntry::word(0x0c100000, 0x0e100000, "ldc%c%22'l\t%8-11d, cr%12-15d, %A"),
    OpcodeEntry::word(0x00000000, 0x00000000, "undefined instruction %0-31x"),
    ],
};

pub static THUMB_TABLE: Table = Table {
    name: "thumb",
    pc: PcOffset { half: 4, word: 4 },
    entries: &[
    // v5
    OpcodeEntry::half(0xbe00, 0xff00, "bkpt\t%0-7x"),
    OpcodeEntry::half(0x4780, 0xff87, "blx\t%3-6r").flow(Flow::CALL),
    OpcodeEntry::half(0x46c0, 0xffff, "nop\t\t\t(mov r8, r8)"),
    // format 5 without flag update
    OpcodeEntry::half(0x1c00, 0xffc0, "mov\t%0-2r, %3-5r\t\t(add %0-2r, %3-5r, #%6-8d)"),
    // format 4
    OpcodeEntry::half(0x4000, 0xffc0, "and\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4040, 0xffc0, "eor\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4080, 0xffc0, "lsl\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x40c0, 0xffc0, "lsr\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4100, 0xffc0, "asr\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4140, 0xffc0, "adc\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4180, 0xffc0, "sbc\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x41c0, 0xffc0, "ror\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4200, 0xffc0, "tst\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4240, 0xffc0, "neg\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4280, 0xffc0, "cmp\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x42c0, 0xffc0, "cmn\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4300, 0xffc0, "orr\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4340, 0xffc0, "mul\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x4380, 0xffc0, "bic\t%0-2r, %3-5r"),
    OpcodeEntry::half(0x43c0, 0xffc0, "mvn\t%0-2r, %3-5r"),
    // format 13
    OpcodeEntry::half(0xb000, 0xff80, "add\tsp, #%0-6W"),
    OpcodeEntry::half(0xb080, 0xff80, "sub\tsp, #%0-6W"),
    // format 5
    OpcodeEntry::half(0x4700, 0xff80, "bx\t%S").flow(Flow::BRANCH),
    OpcodeEntry::half(0x4400, 0xff00, "add\t%D, %S"),
    OpcodeEntry::half(0x4500, 0xff00, "cmp\t%D, %S"),
    OpcodeEntry::half(0x4600, 0xff00, "mov\t%D, %S"),
    // format 14
    OpcodeEntry::half(0xb400, 0xfe00, "push\t%N"),
    OpcodeEntry::half(0xbc00, 0xfe00, "pop\t%O"),
    // format 2
    OpcodeEntry::half(0x1800, 0xfe00, "add\t%0-2r, %3-5r, %6-8r"),
    OpcodeEntry::half(0x1a00, 0xfe00, "sub\t%0-2r, %3-5r, %6-8r"),
    OpcodeEntry::half(0x1c00, 0xfe00, "add\t%0-2r, %3-5r, #%6-8d"),
    OpcodeEntry::half(0x1e00, 0xfe00, "sub\t%0-2r, %3-5r, #%6-8d"),
    // format 8
    OpcodeEntry::half(0x5200, 0xfe00, "strh\t%0-2r, [%3-5r, %6-8r]"),
    OpcodeEntry::half(0x5a00, 0xfe00, "ldrh\t%0-2r, [%3-5r, %6-8r]"),
    OpcodeEntry::half(0x5600, 0xf600, "ldrs%11?hb\t%0-2r, [%3-5r, %6-8r]"),
    // format 7
    OpcodeEntry::half(0x5000, 0xfa00, "str%10'b\t%0-2r, [%3-5r, %6-8r]"),
    OpcodeEntry::half(0x5800, 0xfa00, "ldr%10'b\t%0-2r, [%3-5r, %6-8r]"),
    // format 1
    OpcodeEntry::half(0x0000, 0xf800, "lsl\t%0-2r, %3-5r, #%6-10d"),
    OpcodeEntry::half(0x0800, 0xf800, "lsr\t%0-2r, %3-5r, #%6-10d"),
    OpcodeEntry::half(0x1000, 0xf800, "asr\t%0-2r, %3-5r, #%6-10d"),
    // format 3
    OpcodeEntry::half(0x2000, 0xf800, "mov\t%8-10r, #%0-7d"),
    OpcodeEntry::half(0x2800, 0xf800, "cmp\t%8-10r, #%0-7d"),
    OpcodeEntry::half(0x3000, 0xf800, "add\t%8-10r, #%0-7d"),
    OpcodeEntry::half(0x3800, 0xf800, "sub\t%8-10r, #%0-7d"),
    // format 6
    OpcodeEntry::half(0x4800, 0xf800, "ldr\t%8-10r, [pc, #%0-7W]\t(%0-7a)"),
    // format 9
    OpcodeEntry::half(0x6000, 0xf800, "str\t%0-2r, [%3-5r, #%6-10W]"),
    OpcodeEntry::half(0x6800, 0xf800, "ldr\t%0-2r, [%3-5r, #%6-10W]"),
    OpcodeEntry::half(0x7000, 0xf800, "strb\t%0-2r, [%3-5r, #%6-10d]"),
    OpcodeEntry::half(0x7800, 0xf800, "ldrb\t%0-2r, [%3-5r, #%6-10d]"),
    // format 10
    OpcodeEntry::half(0x8000, 0xf800, "strh\t%0-2r, [%3-5r, #%6-10H]"),
    OpcodeEntry::half(0x8800, 0xf800, "ldrh\t%0-2r, [%3-5r, #%6-10H]"),
    // format 11
    OpcodeEntry::half(0x9000, 0xf800, "str\t%8-10r, [sp, #%0-7W]"),
    OpcodeEntry::half(0x9800, 0xf800, "ldr\t%8-10r, [sp, #%0-7W]"),
    // format 12
    OpcodeEntry::half(0xa000, 0xf800, "add\t%8-10r, pc, #%0-7W\t(adr %8-10r,%0-7a)"),
    OpcodeEntry::half(0xa800, 0xf800, "add\t%8-10r, sp, #%0-7W"),
    // format 15
    OpcodeEntry::half(0xc000, 0xf800, "stmia\t%8-10r!,%M"),
    OpcodeEntry::half(0xc800, 0xf800, "ldmia\t%8-10r!,%M"),
    // format 18
    OpcodeEntry::half(0xe000, 0xf800, "b\t%0-10B"),
    OpcodeEntry::half(0xe800, 0xf800, "undefined"),
    // format 19
    OpcodeEntry::half(0xf000, 0xf800, ""),
    OpcodeEntry::half(0xf800, 0xf800, "second half of BL instruction %0-15x"),
    // format 16
    OpcodeEntry::half(0xd000, 0xff00, "beq\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd100, 0xff00, "bne\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd200, 0xff00, "bcs\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd300, 0xff00, "bcc\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd400, 0xff00, "bmi\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd500, 0xff00, "bpl\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd600, 0xff00, "bvs\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd700, 0xff00, "bvc\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd800, 0xff00, "bhi\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xd900, 0xff00, "bls\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xda00, 0xff00, "bge\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xdb00, 0xff00, "blt\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xdc00, 0xff00, "bgt\t%0-7B").flow(COND_BRANCH),
    OpcodeEntry::half(0xdd00, 0xff00, "ble\t%0-7B").flow(COND_BRANCH),
    // format 17
    OpcodeEntry::half(0xde00, 0xff00, "bal\t%0-7B"),
    OpcodeEntry::half(0xdf00, 0xff00, "swi\t%0-7d"),
    OpcodeEntry::half(0x0000, 0x0000, "undefined instruction %0-15x"),
    ],
};
