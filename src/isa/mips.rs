//! MIPS32 with the MIPS16 compressed instruction set.

use std::fmt::Write as _;

use crate::bits;
use crate::config::Config;
use crate::decoder::{DecodeRequest, Isa, Width};
use crate::disasm::{Arg, Renderer};
use crate::format::{BitRange, FieldOp, Syntax};
use crate::regs::RegisterScheme;
use crate::stitch::{self, Pair};
use crate::table::{Flow, OpcodeEntry, PcOffset, Table, COND_BRANCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MipsDirective {
    /// `%z` register 0.
    Zero,
    /// `%S` stack pointer.
    StackPointer,
    /// `%R` return address register.
    ReturnAddress,
    /// `%L-Mx` unpadded hex.
    PlainHex,
    /// `%L-Mj` jump index placed in the 256 MiB region of the PC.
    JumpRegion,
    /// `%L-MR` MIPS16 3-bit register.
    Mips16Reg,
    /// `%L-MY` MIPS16 `move` destination: field bits 4-2 are r32[2:0] and
    /// bits 1-0 are r32[4:3].
    Move32Reg,
    /// `%L-MK` MIPS16 `addiu sp` adjustment, signed and scaled by 8.
    StackAdjust,
    /// `%L-Ms` MIPS16 shift amount, where 0 encodes 8.
    ShiftAmount,
}

impl Syntax for MipsDirective {
    fn bare(c: char) -> Option<Self> {
        match c {
            'z' => Some(MipsDirective::Zero),
            'S' => Some(MipsDirective::StackPointer),
            'R' => Some(MipsDirective::ReturnAddress),
            _ => None,
        }
    }

    fn field(c: char) -> Option<FieldOp<Self>> {
        Some(match c {
            'r' => FieldOp::Register,
            'd' => FieldOp::Decimal,
            'I' => FieldOp::Signed,
            'H' => FieldOp::Scaled(1),
            'W' => FieldOp::Scaled(2),
            'b' => FieldOp::PcRelative(2),
            'h' => FieldOp::PcRelative(1),
            'x' => FieldOp::Arch(MipsDirective::PlainHex),
            'j' => FieldOp::Arch(MipsDirective::JumpRegion),
            'R' => FieldOp::Arch(MipsDirective::Mips16Reg),
            'Y' => FieldOp::Arch(MipsDirective::Move32Reg),
            'K' => FieldOp::Arch(MipsDirective::StackAdjust),
            's' => FieldOp::Arch(MipsDirective::ShiftAmount),
            _ => return None,
        })
    }
}

/// MIPS16 3-bit register fields name $16, $17 and $2-$7.
const MIPS16_REGS: [u32; 8] = [16, 17, 2, 3, 4, 5, 6, 7];

const SP: u32 = 29;
const RA: u32 = 31;

#[derive(Debug, Clone, Copy, Default)]
pub struct Mips;

static TABLES: [&Table; 2] = [&MIPS32_TABLE, &MIPS16_TABLE];

impl Isa for Mips {
    type Directive = MipsDirective;

    fn name(&self) -> &'static str {
        "mips"
    }

    fn tables(&self) -> &'static [&'static Table] {
        &TABLES
    }

    fn schemes(&self) -> &'static [RegisterScheme] {
        SCHEMES
    }

    fn default_scheme(&self) -> &'static str {
        "32"
    }

    fn compressed_mode(&self) -> Option<&'static str> {
        Some("mips16")
    }

    fn request(&self, address: u64, config: &Config) -> DecodeRequest {
        let mips16 = config.force_compressed || address & 1 != 0;
        DecodeRequest {
            address: address & !1,
            width: if mips16 { Width::W16 } else { Width::W32 },
            endian: config.endian,
            compressed: mips16,
            allow_short: false,
        }
    }

    fn table(&self, request: &DecodeRequest) -> &'static Table {
        if request.compressed { &MIPS16_TABLE } else { &MIPS32_TABLE }
    }

    fn render(&self, directive: MipsDirective, arg: Arg, cx: &mut Renderer<'_>) {
        use MipsDirective::*;
        match (directive, arg) {
            (Zero, Arg::None) => cx.reg(0),
            (StackPointer, Arg::None) => cx.reg(SP),
            (ReturnAddress, Arg::None) => cx.reg(RA),
            (PlainHex, Arg::Field(range)) => {
                let v = cx.field(range);
                let _ = write!(cx, "{v:#x}");
            }
            (JumpRegion, Arg::Field(range)) => {
                let index = u64::from(cx.field(range));
                let target = (cx.pc() & !0x0fff_ffff) | (index << 2);
                cx.branch_to(target);
            }
            (Mips16Reg, Arg::Field(range)) => {
                let r = MIPS16_REGS[(cx.field(range) & 7) as usize];
                cx.reg(r);
            }
            (Move32Reg, Arg::Field(range)) => {
                let v = cx.field(range);
                cx.reg((v >> 2) | ((v & 3) << 3));
            }
            (StackAdjust, Arg::Field(range)) => {
                let v = cx.signed(range) << 3;
                let _ = write!(cx, "{v}");
            }
            (ShiftAmount, Arg::Field(range)) => {
                let v = match cx.field(range) {
                    0 => 8,
                    v => v,
                };
                let _ = write!(cx, "{v}");
            }
            (d, arg) => cx.corrupt(format_args!("{d:?} used with {arg:?}")),
        }
    }

    /// MIPS16 `jal`/`jalx`: a 26-bit word index split as index[20:16] and
    /// index[25:21] in the first halfword and index[15:0] in the second.
    fn join_pair(&self, first: u16, second: u16, address: u64) -> Pair {
        let (index, _) = stitch::concat(&[
            (first, BitRange::new(0, 4)),
            (first, BitRange::new(5, 9)),
            (second, BitRange::new(0, 15)),
        ]);
        let region = address.wrapping_add(4) & !0x0fff_ffff;
        let target = (region | u64::from(index) << 2) & 0xffff_ffff;
        let exchange = bits::extract(first, 10, 10) != 0;
        let mnemonic = if exchange { "jalx" } else { "jal" };
        Pair { mnemonic, target, exchange }
    }
}

static SCHEMES: &[RegisterScheme] = &[
    RegisterScheme {
        id: "numeric",
        description: "Numeric register names",
        names: &[
            "$0", "$1", "$2", "$3", "$4", "$5", "$6", "$7", "$8", "$9", "$10", "$11", "$12", "$13", "$14", "$15",
            "$16", "$17", "$18", "$19", "$20", "$21", "$22", "$23", "$24", "$25", "$26", "$27", "$28", "$29",
            "$30", "$31",
        ],
    },
    RegisterScheme {
        id: "32",
        description: "Names from the o32 ABI",
        names: &[
            "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7",
            "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "s8", "ra",
        ],
    },
    RegisterScheme {
        id: "n32",
        description: "Names from the n32 ABI",
        names: &[
            "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "t0", "t1", "t2", "t3",
            "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "s8", "ra",
        ],
    },
    RegisterScheme {
        id: "64",
        description: "Names from the n64 ABI",
        names: &[
            "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "t0", "t1", "t2", "t3",
            "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "s8", "ra",
        ],
    },
];

const RET: Flow = Flow::RETURN;
const CALL: Flow = Flow::CALL;
const JUMP: Flow = Flow::BRANCH;
const COND_CALL: Flow = Flow::CALL.union(Flow::CONDITIONAL);
const CALL_X: Flow = Flow::CALL.union(Flow::EXCHANGE);

pub static MIPS32_TABLE: Table = Table {
    name: "mips32",
    pc: PcOffset { half: 4, word: 4 },
    entries: &[
        // aliases
        OpcodeEntry::word(0x0000_0000, 0xffff_ffff, "nop"),
        OpcodeEntry::word(0x0000_0040, 0xffff_ffff, "ssnop"),
        OpcodeEntry::word(0x0000_00c0, 0xffff_ffff, "ehb"),
        OpcodeEntry::word(0x0000_0021, 0xfc1f_07ff, "move\t%11-15r,%21-25r"),
        OpcodeEntry::word(0x0000_0025, 0xfc1f_07ff, "move\t%11-15r,%21-25r"),
        OpcodeEntry::word(0x1000_0000, 0xffff_0000, "b\t%0-15b").flow(JUMP),
        OpcodeEntry::word(0x0401_0000, 0xffff_0000, "b\t%0-15b").flow(JUMP),
        OpcodeEntry::word(0x0411_0000, 0xffff_0000, "bal\t%0-15b").flow(CALL),
        OpcodeEntry::word(0x03e0_0008, 0xffff_ffff, "jr\t%R").flow(RET),
        OpcodeEntry::word(0x2400_0000, 0xffe0_0000, "li\t%16-20r,%0-15I"),
        OpcodeEntry::word(0x3400_0000, 0xffe0_0000, "li\t%16-20r,%0-15x"),
        // special
        OpcodeEntry::word(0x0000_0000, 0xffe0_003f, "sll\t%11-15r,%16-20r,%6-10d"),
        OpcodeEntry::word(0x0000_0002, 0xffe0_003f, "srl\t%11-15r,%16-20r,%6-10d"),
        OpcodeEntry::word(0x0000_0003, 0xffe0_003f, "sra\t%11-15r,%16-20r,%6-10d"),
        OpcodeEntry::word(0x0000_0004, 0xfc00_07ff, "sllv\t%11-15r,%16-20r,%21-25r"),
        OpcodeEntry::word(0x0000_0006, 0xfc00_07ff, "srlv\t%11-15r,%16-20r,%21-25r"),
        OpcodeEntry::word(0x0000_0007, 0xfc00_07ff, "srav\t%11-15r,%16-20r,%21-25r"),
        OpcodeEntry::word(0x0000_0008, 0xfc1f_ffff, "jr\t%21-25r").flow(JUMP),
        OpcodeEntry::word(0x0000_f809, 0xfc1f_ffff, "jalr\t%21-25r").flow(CALL),
        OpcodeEntry::word(0x0000_0009, 0xfc1f_07ff, "jalr\t%11-15r,%21-25r").flow(CALL),
        OpcodeEntry::word(0x0000_000a, 0xfc00_07ff, "movz\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_000b, 0xfc00_07ff, "movn\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_000c, 0xffff_ffff, "syscall"),
        OpcodeEntry::word(0x0000_000c, 0xfc00_003f, "syscall\t%6-25x"),
        OpcodeEntry::word(0x0000_000d, 0xffff_ffff, "break"),
        OpcodeEntry::word(0x0000_000d, 0xfc00_003f, "break\t%16-25x"),
        OpcodeEntry::word(0x0000_000f, 0xffff_f83f, "sync"),
        OpcodeEntry::word(0x0000_0010, 0xffff_07ff, "mfhi\t%11-15r"),
        OpcodeEntry::word(0x0000_0011, 0xfc1f_ffff, "mthi\t%21-25r"),
        OpcodeEntry::word(0x0000_0012, 0xffff_07ff, "mflo\t%11-15r"),
        OpcodeEntry::word(0x0000_0013, 0xfc1f_ffff, "mtlo\t%21-25r"),
        OpcodeEntry::word(0x0000_0018, 0xfc00_ffff, "mult\t%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0019, 0xfc00_ffff, "multu\t%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_001a, 0xfc00_ffff, "div\t%z,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_001b, 0xfc00_ffff, "divu\t%z,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0020, 0xfc00_07ff, "add\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0021, 0xfc00_07ff, "addu\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0022, 0xfc00_07ff, "sub\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0023, 0xfc00_07ff, "subu\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0024, 0xfc00_07ff, "and\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0025, 0xfc00_07ff, "or\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0026, 0xfc00_07ff, "xor\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0027, 0xfc00_07ff, "nor\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_002a, 0xfc00_07ff, "slt\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_002b, 0xfc00_07ff, "sltu\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x0000_0034, 0xfc00_ffff, "teq\t%21-25r,%16-20r"),
        // regimm
        OpcodeEntry::word(0x0400_0000, 0xfc1f_0000, "bltz\t%21-25r,%0-15b").flow(COND_BRANCH),
        OpcodeEntry::word(0x0401_0000, 0xfc1f_0000, "bgez\t%21-25r,%0-15b").flow(COND_BRANCH),
        OpcodeEntry::word(0x0410_0000, 0xfc1f_0000, "bltzal\t%21-25r,%0-15b").flow(COND_CALL),
        OpcodeEntry::word(0x0411_0000, 0xfc1f_0000, "bgezal\t%21-25r,%0-15b").flow(COND_CALL),
        // jumps and branches
        OpcodeEntry::word(0x0800_0000, 0xfc00_0000, "j\t%0-25j").flow(JUMP),
        OpcodeEntry::word(0x0c00_0000, 0xfc00_0000, "jal\t%0-25j").flow(CALL),
        OpcodeEntry::word(0x1000_0000, 0xfc1f_0000, "beqz\t%21-25r,%0-15b").flow(COND_BRANCH),
        OpcodeEntry::word(0x1000_0000, 0xfc00_0000, "beq\t%21-25r,%16-20r,%0-15b").flow(COND_BRANCH),
        OpcodeEntry::word(0x1400_0000, 0xfc1f_0000, "bnez\t%21-25r,%0-15b").flow(COND_BRANCH),
        OpcodeEntry::word(0x1400_0000, 0xfc00_0000, "bne\t%21-25r,%16-20r,%0-15b").flow(COND_BRANCH),
        OpcodeEntry::word(0x1800_0000, 0xfc1f_0000, "blez\t%21-25r,%0-15b").flow(COND_BRANCH),
        OpcodeEntry::word(0x1c00_0000, 0xfc1f_0000, "bgtz\t%21-25r,%0-15b").flow(COND_BRANCH),
        // immediates
        OpcodeEntry::word(0x2000_0000, 0xfc00_0000, "addi\t%16-20r,%21-25r,%0-15I"),
        OpcodeEntry::word(0x2400_0000, 0xfc00_0000, "addiu\t%16-20r,%21-25r,%0-15I"),
        OpcodeEntry::word(0x2800_0000, 0xfc00_0000, "slti\t%16-20r,%21-25r,%0-15I"),
        OpcodeEntry::word(0x2c00_0000, 0xfc00_0000, "sltiu\t%16-20r,%21-25r,%0-15I"),
        OpcodeEntry::word(0x3000_0000, 0xfc00_0000, "andi\t%16-20r,%21-25r,%0-15x"),
        OpcodeEntry::word(0x3400_0000, 0xfc00_0000, "ori\t%16-20r,%21-25r,%0-15x"),
        OpcodeEntry::word(0x3800_0000, 0xfc00_0000, "xori\t%16-20r,%21-25r,%0-15x"),
        OpcodeEntry::word(0x3c00_0000, 0xffe0_0000, "lui\t%16-20r,%0-15x"),
        // cop0
        OpcodeEntry::word(0x4000_0000, 0xffe0_07ff, "mfc0\t%16-20r,$%11-15d"),
        OpcodeEntry::word(0x4080_0000, 0xffe0_07ff, "mtc0\t%16-20r,$%11-15d"),
        OpcodeEntry::word(0x4200_0001, 0xffff_ffff, "tlbr"),
        OpcodeEntry::word(0x4200_0002, 0xffff_ffff, "tlbwi"),
        OpcodeEntry::word(0x4200_0006, 0xffff_ffff, "tlbwr"),
        OpcodeEntry::word(0x4200_0008, 0xffff_ffff, "tlbp"),
        OpcodeEntry::word(0x4200_0018, 0xffff_ffff, "eret").flow(RET),
        OpcodeEntry::word(0x4200_001f, 0xffff_ffff, "deret").flow(RET),
        OpcodeEntry::word(0x4200_0020, 0xfe00_003f, "wait"),
        // special2
        OpcodeEntry::word(0x7000_0000, 0xfc00_ffff, "madd\t%21-25r,%16-20r"),
        OpcodeEntry::word(0x7000_0001, 0xfc00_ffff, "maddu\t%21-25r,%16-20r"),
        OpcodeEntry::word(0x7000_0002, 0xfc00_07ff, "mul\t%11-15r,%21-25r,%16-20r"),
        OpcodeEntry::word(0x7000_0004, 0xfc00_ffff, "msub\t%21-25r,%16-20r"),
        OpcodeEntry::word(0x7000_0005, 0xfc00_ffff, "msubu\t%21-25r,%16-20r"),
        OpcodeEntry::word(0x7000_0020, 0xfc00_07ff, "clz\t%11-15r,%21-25r"),
        OpcodeEntry::word(0x7000_0021, 0xfc00_07ff, "clo\t%11-15r,%21-25r"),
        OpcodeEntry::word(0x7400_0000, 0xfc00_0000, "jalx\t%0-25j").flow(CALL_X),
        // loads and stores
        OpcodeEntry::word(0x8000_0000, 0xfc00_0000, "lb\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0x8400_0000, 0xfc00_0000, "lh\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0x8800_0000, 0xfc00_0000, "lwl\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0x8c00_0000, 0xfc00_0000, "lw\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0x9000_0000, 0xfc00_0000, "lbu\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0x9400_0000, 0xfc00_0000, "lhu\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0x9800_0000, 0xfc00_0000, "lwr\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xa000_0000, 0xfc00_0000, "sb\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xa400_0000, 0xfc00_0000, "sh\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xa800_0000, 0xfc00_0000, "swl\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xac00_0000, 0xfc00_0000, "sw\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xb800_0000, 0xfc00_0000, "swr\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xbc00_0000, 0xfc00_0000, "cache\t%16-20x,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xc000_0000, 0xfc00_0000, "ll\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xc400_0000, 0xfc00_0000, "lwc1\t$f%16-20d,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xcc00_0000, 0xfc00_0000, "pref\t%16-20d,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xd400_0000, 0xfc00_0000, "ldc1\t$f%16-20d,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xe000_0000, 0xfc00_0000, "sc\t%16-20r,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xe400_0000, 0xfc00_0000, "swc1\t$f%16-20d,%0-15I(%21-25r)"),
        OpcodeEntry::word(0xf400_0000, 0xfc00_0000, "sdc1\t$f%16-20d,%0-15I(%21-25r)"),
        OpcodeEntry::word(0x0000_0000, 0x0000_0000, "undefined instruction %0-31x"),
    ],
};

pub static MIPS16_TABLE: Table = Table {
    name: "mips16",
    pc: PcOffset { half: 2, word: 4 },
    entries: &[
        OpcodeEntry::half(0x6500, 0xffff, "nop"),
        OpcodeEntry::half(0x0000, 0xf800, "addiu\t%8-10R,%S,%0-7W"),
        OpcodeEntry::half(0x0800, 0xf800, "addiu\t%8-10R,$pc,%0-7W"),
        OpcodeEntry::half(0x1000, 0xf800, "b\t%0-10h").flow(JUMP),
        OpcodeEntry::half(0x1800, 0xf800, ""),
        OpcodeEntry::half(0x2000, 0xf800, "beqz\t%8-10R,%0-7h").flow(COND_BRANCH),
        OpcodeEntry::half(0x2800, 0xf800, "bnez\t%8-10R,%0-7h").flow(COND_BRANCH),
        OpcodeEntry::half(0x3000, 0xf803, "sll\t%8-10R,%5-7R,%2-4s"),
        OpcodeEntry::half(0x3002, 0xf803, "srl\t%8-10R,%5-7R,%2-4s"),
        OpcodeEntry::half(0x3003, 0xf803, "sra\t%8-10R,%5-7R,%2-4s"),
        OpcodeEntry::half(0x4000, 0xf810, "addiu\t%5-7R,%8-10R,%0-3I"),
        OpcodeEntry::half(0x4800, 0xf800, "addiu\t%8-10R,%0-7I"),
        OpcodeEntry::half(0x5000, 0xf800, "slti\t%8-10R,%0-7d"),
        OpcodeEntry::half(0x5800, 0xf800, "sltiu\t%8-10R,%0-7d"),
        // i8
        OpcodeEntry::half(0x6000, 0xff00, "bteqz\t%0-7h").flow(COND_BRANCH),
        OpcodeEntry::half(0x6100, 0xff00, "btnez\t%0-7h").flow(COND_BRANCH),
        OpcodeEntry::half(0x6200, 0xff00, "sw\t%R,%0-7W(%S)"),
        OpcodeEntry::half(0x6300, 0xff00, "addiu\t%S,%0-7K"),
        OpcodeEntry::half(0x6500, 0xff00, "move\t%3-7Y,%0-2R"),
        OpcodeEntry::half(0x6700, 0xff00, "move\t%5-7R,%0-4r"),
        OpcodeEntry::half(0x6800, 0xf800, "li\t%8-10R,%0-7d"),
        OpcodeEntry::half(0x7000, 0xf800, "cmpi\t%8-10R,%0-7d"),
        // loads and stores
        OpcodeEntry::half(0x8000, 0xf800, "lb\t%5-7R,%0-4d(%8-10R)"),
        OpcodeEntry::half(0x8800, 0xf800, "lh\t%5-7R,%0-4H(%8-10R)"),
        OpcodeEntry::half(0x9000, 0xf800, "lw\t%8-10R,%0-7W(%S)"),
        OpcodeEntry::half(0x9800, 0xf800, "lw\t%5-7R,%0-4W(%8-10R)"),
        OpcodeEntry::half(0xa000, 0xf800, "lbu\t%5-7R,%0-4d(%8-10R)"),
        OpcodeEntry::half(0xa800, 0xf800, "lhu\t%5-7R,%0-4H(%8-10R)"),
        OpcodeEntry::half(0xb000, 0xf800, "lw\t%8-10R,%0-7W($pc)"),
        OpcodeEntry::half(0xc000, 0xf800, "sb\t%5-7R,%0-4d(%8-10R)"),
        OpcodeEntry::half(0xc800, 0xf800, "sh\t%5-7R,%0-4H(%8-10R)"),
        OpcodeEntry::half(0xd000, 0xf800, "sw\t%8-10R,%0-7W(%S)"),
        OpcodeEntry::half(0xd800, 0xf800, "sw\t%5-7R,%0-4W(%8-10R)"),
        // rrr
        OpcodeEntry::half(0xe001, 0xf803, "addu\t%2-4R,%8-10R,%5-7R"),
        OpcodeEntry::half(0xe003, 0xf803, "subu\t%2-4R,%8-10R,%5-7R"),
        // rr
        OpcodeEntry::half(0xe820, 0xffff, "jr\t%R").flow(RET),
        OpcodeEntry::half(0xe800, 0xf8ff, "jr\t%8-10R").flow(JUMP),
        OpcodeEntry::half(0xe840, 0xf8ff, "jalr\t%8-10R").flow(CALL),
        OpcodeEntry::half(0xe802, 0xf81f, "slt\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe803, 0xf81f, "sltu\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe804, 0xf81f, "sllv\t%5-7R,%8-10R"),
        OpcodeEntry::half(0xe805, 0xf81f, "break\t%5-10d"),
        OpcodeEntry::half(0xe806, 0xf81f, "srlv\t%5-7R,%8-10R"),
        OpcodeEntry::half(0xe807, 0xf81f, "srav\t%5-7R,%8-10R"),
        OpcodeEntry::half(0xe80a, 0xf81f, "cmp\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe80b, 0xf81f, "neg\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe80c, 0xf81f, "and\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe80d, 0xf81f, "or\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe80e, 0xf81f, "xor\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe80f, 0xf81f, "not\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe810, 0xf8ff, "mfhi\t%8-10R"),
        OpcodeEntry::half(0xe812, 0xf8ff, "mflo\t%8-10R"),
        OpcodeEntry::half(0xe818, 0xf81f, "mult\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe819, 0xf81f, "multu\t%8-10R,%5-7R"),
        OpcodeEntry::half(0xe81a, 0xf81f, "div\t%z,%8-10R,%5-7R"),
        OpcodeEntry::half(0xe81b, 0xf81f, "divu\t%z,%8-10R,%5-7R"),
        OpcodeEntry::half(0xf000, 0xf800, "extend\t%0-10x"),
        OpcodeEntry::half(0x0000, 0x0000, "undefined instruction %0-15x"),
    ],
};
