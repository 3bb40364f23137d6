//! Nios II, both instruction-set revisions.
//!
//! R1 is a fixed 32-bit encoding. R2 mixes 32-bit instructions with 16-bit
//! `.n` forms in one table; the opcode field in the low six bits decides
//! the width, so entries carry their own width and the fetch may come up
//! short at the end of memory.

use std::fmt::Write as _;

use crate::config::Config;
use crate::decoder::{DecodeRequest, Isa, Width};
use crate::disasm::{Arg, Renderer};
use crate::format::{FieldOp, Syntax};
use crate::regs::RegisterScheme;
use crate::table::{Flow, OpcodeEntry, PcOffset, Table, COND_BRANCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nios2Directive {
    /// `%W` the whole fetched word in hex.
    RawWord,
    /// `%S` the implicit stack pointer of `ldwsp.n`/`stwsp.n`.
    StackPointer,
    /// `%z` register 0.
    Zero,
    /// `%L-Mm` 26-bit word index in the 256 MiB region of the instruction.
    CallRegion,
    /// `%L-Mc` control register.
    ControlReg,
    /// `%L-MR` R2 3-bit register.
    Reg3,
    /// `%L-Me` `addi.n`/`subi.n` immediate code.
    AddImm,
    /// `%L-Mf` `slli.n`/`srli.n` shift code.
    ShiftImm,
    /// `%L-Mg` `andi.n` mask code.
    AndImm,
    /// `%L-Mh` `movi.n` immediate code.
    MovImm,
}

impl Syntax for Nios2Directive {
    fn bare(c: char) -> Option<Self> {
        match c {
            'W' => Some(Nios2Directive::RawWord),
            'S' => Some(Nios2Directive::StackPointer),
            'z' => Some(Nios2Directive::Zero),
            _ => None,
        }
    }

    fn field(c: char) -> Option<FieldOp<Self>> {
        use Nios2Directive::*;
        Some(match c {
            'r' => FieldOp::Register,
            'd' => FieldOp::Decimal,
            'I' => FieldOp::Signed,
            'H' => FieldOp::Scaled(1),
            'W' => FieldOp::Scaled(2),
            'o' => FieldOp::PcRelative(0),
            'O' => FieldOp::PcRelative(1),
            'm' => FieldOp::Arch(CallRegion),
            'c' => FieldOp::Arch(ControlReg),
            'R' => FieldOp::Arch(Reg3),
            'e' => FieldOp::Arch(AddImm),
            'f' => FieldOp::Arch(ShiftImm),
            'g' => FieldOp::Arch(AndImm),
            'h' => FieldOp::Arch(MovImm),
            _ => return None,
        })
    }
}

const REG3: [u32; 8] = [16, 17, 2, 3, 4, 5, 6, 7];
const ADD_IMM: [u32; 8] = [1, 2, 4, 8, 16, 32, 64, 128];
const SHIFT_IMM: [u32; 8] = [1, 2, 3, 8, 12, 16, 24, 31];
const AND_IMM: [u32; 16] =
    [1, 2, 3, 4, 8, 0xf, 0x10, 0x1f, 0x20, 0x3f, 0x7f, 0x80, 0xff, 0x7ff, 0xff00, 0xffff];

const SP: u32 = 27;

const CONTROL_REGS: [&str; 32] = [
    "status", "estatus", "bstatus", "ienable", "ipending", "cpuid", "ctl6", "exception", "pteaddr", "tlbacc",
    "tlbmisc", "eccinj", "badaddr", "config", "mpubase", "mpuacc", "ctl16", "ctl17", "ctl18", "ctl19", "ctl20",
    "ctl21", "ctl22", "ctl23", "ctl24", "ctl25", "ctl26", "ctl27", "ctl28", "ctl29", "ctl30", "ctl31",
];

/// `movi.n` immediates 125..=127 stand for 255, -2 and -1.
fn movi_n(code: u32) -> i32 {
    match code {
        125 => 0xff,
        126 => -2,
        127 => -1,
        v => v as i32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nios2 {
    R1,
    R2,
}

static R1_TABLES: [&Table; 1] = [&R1_TABLE];
static R2_TABLES: [&Table; 1] = [&R2_TABLE];

impl Isa for Nios2 {
    type Directive = Nios2Directive;

    fn name(&self) -> &'static str {
        match self {
            Nios2::R1 => "nios2",
            Nios2::R2 => "nios2r2",
        }
    }

    fn tables(&self) -> &'static [&'static Table] {
        match self {
            Nios2::R1 => &R1_TABLES,
            Nios2::R2 => &R2_TABLES,
        }
    }

    fn schemes(&self) -> &'static [RegisterScheme] {
        SCHEMES
    }

    fn default_scheme(&self) -> &'static str {
        "abi"
    }

    // TODO: big-endian R2 needs the 16-bit forms fetched as halfwords before
    // the opcode is known; until then only little-endian images are accepted.
    fn supports_big_endian(&self) -> bool {
        matches!(self, Nios2::R1)
    }

    fn request(&self, address: u64, config: &Config) -> DecodeRequest {
        DecodeRequest {
            address,
            width: Width::W32,
            endian: config.endian,
            compressed: false,
            allow_short: matches!(self, Nios2::R2),
        }
    }

    fn table(&self, _request: &DecodeRequest) -> &'static Table {
        match self {
            Nios2::R1 => &R1_TABLE,
            Nios2::R2 => &R2_TABLE,
        }
    }

    fn render(&self, directive: Nios2Directive, arg: Arg, cx: &mut Renderer<'_>) {
        use Nios2Directive::*;
        match (directive, arg) {
            (RawWord, Arg::None) => {
                let w = cx.word();
                cx.hex(w);
            }
            (StackPointer, Arg::None) => cx.reg(SP),
            (Zero, Arg::None) => cx.reg(0),
            (CallRegion, Arg::Field(range)) => {
                let target = (cx.address() & 0xf000_0000) | u64::from(cx.field(range)) << 2;
                cx.branch_to(target);
            }
            (ControlReg, Arg::Field(range)) => {
                let name = CONTROL_REGS[(cx.field(range) & 0x1f) as usize];
                cx.push_str(name);
            }
            (Reg3, Arg::Field(range)) => {
                let r = REG3[(cx.field(range) & 7) as usize];
                cx.reg(r);
            }
            (AddImm, Arg::Field(range)) => {
                let v = ADD_IMM[(cx.field(range) & 7) as usize];
                let _ = write!(cx, "{v}");
            }
            (ShiftImm, Arg::Field(range)) => {
                let v = SHIFT_IMM[(cx.field(range) & 7) as usize];
                let _ = write!(cx, "{v}");
            }
            (AndImm, Arg::Field(range)) => {
                let v = AND_IMM[(cx.field(range) & 0xf) as usize];
                let _ = write!(cx, "{v}");
            }
            (MovImm, Arg::Field(range)) => {
                let v = movi_n(cx.field(range));
                let _ = write!(cx, "{v}");
            }
            (d, arg) => cx.corrupt(format_args!("{d:?} used with {arg:?}")),
        }
    }
}

static SCHEMES: &[RegisterScheme] = &[
    RegisterScheme {
        id: "abi",
        description: "ABI register names",
        names: &[
            "zero", "at", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13", "r14", "r15",
            "r16", "r17", "r18", "r19", "r20", "r21", "r22", "r23", "et", "bt", "gp", "sp", "fp", "ea", "ba", "ra",
        ],
    },
    RegisterScheme {
        id: "numeric",
        description: "Numeric register names",
        names: &[
            "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8", "r9", "r10", "r11", "r12", "r13", "r14", "r15",
            "r16", "r17", "r18", "r19", "r20", "r21", "r22", "r23", "r24", "r25", "r26", "r27", "r28", "r29",
            "r30", "r31",
        ],
    },
];

const RET: Flow = Flow::RETURN;
const CALL: Flow = Flow::CALL;
const JUMP: Flow = Flow::BRANCH;

pub static R1_TABLE: Table = Table {
    name: "nios2",
    pc: PcOffset { half: 4, word: 4 },
    entries: &[
        // aliases
        OpcodeEntry::word(0x0001883a, 0xffffffff, "nop"),
        OpcodeEntry::word(0x0001883a, 0x07c1ffff, "mov\t%17-21r,%27-31r"),
        OpcodeEntry::word(0x00000004, 0xf800003f, "movi\t%22-26r,%6-21I"),
        OpcodeEntry::word(0x00000014, 0xf800003f, "movui\t%22-26r,%6-21d"),
        OpcodeEntry::word(0x00000034, 0xf800003f, "movhi\t%22-26r,%6-21d"),
        // control transfer
        OpcodeEntry::word(0xf800283a, 0xffffffff, "ret").flow(RET),
        OpcodeEntry::word(0xef80083a, 0xffffffff, "eret").flow(RET),
        OpcodeEntry::word(0xf000483a, 0xffffffff, "bret").flow(RET),
        OpcodeEntry::word(0x003ee83a, 0x07ffffff, "callr\t%27-31r").flow(CALL),
        OpcodeEntry::word(0x0000683a, 0x07ffffff, "jmp\t%27-31r").flow(JUMP),
        OpcodeEntry::word(0x00000000, 0x0000003f, "call\t%6-31m").flow(CALL),
        OpcodeEntry::word(0x00000001, 0x0000003f, "jmpi\t%6-31m").flow(JUMP),
        OpcodeEntry::word(0x00000006, 0x0000003f, "br\t%6-21o").flow(JUMP),
        OpcodeEntry::word(0x00000026, 0x0000003f, "beq\t%27-31r,%22-26r,%6-21o").flow(COND_BRANCH),
        OpcodeEntry::word(0x0000001e, 0x0000003f, "bne\t%27-31r,%22-26r,%6-21o").flow(COND_BRANCH),
        OpcodeEntry::word(0x0000000e, 0x0000003f, "bge\t%27-31r,%22-26r,%6-21o").flow(COND_BRANCH),
        OpcodeEntry::word(0x0000002e, 0x0000003f, "bgeu\t%27-31r,%22-26r,%6-21o").flow(COND_BRANCH),
        OpcodeEntry::word(0x00000016, 0x0000003f, "blt\t%27-31r,%22-26r,%6-21o").flow(COND_BRANCH),
        OpcodeEntry::word(0x00000036, 0x0000003f, "bltu\t%27-31r,%22-26r,%6-21o").flow(COND_BRANCH),
        // system
        OpcodeEntry::word(0x003da03a, 0xfffff83f, "break\t%6-10d"),
        OpcodeEntry::word(0x003b683a, 0xfffff83f, "trap\t%6-10d"),
        OpcodeEntry::word(0x0000e03a, 0xffc1ffff, "nextpc\t%17-21r"),
        OpcodeEntry::word(0x0001303a, 0xffc1f83f, "rdctl\t%17-21r,%6-10c"),
        OpcodeEntry::word(0x0001703a, 0x07fff83f, "wrctl\t%6-10c,%27-31r"),
        OpcodeEntry::word(0x0001b03a, 0xffffffff, "sync"),
        OpcodeEntry::word(0x0000203a, 0xffffffff, "flushp"),
        OpcodeEntry::word(0x0000603a, 0x07ffffff, "flushi\t%27-31r"),
        OpcodeEntry::word(0x0001483a, 0x07ffffff, "initi\t%27-31r"),
        OpcodeEntry::word(0x0000a03a, 0x07c1ffff, "wrprs\t%17-21r,%27-31r"),
        // register
        OpcodeEntry::word(0x0000103a, 0x07c1f83f, "roli\t%17-21r,%27-31r,%6-10d"),
        OpcodeEntry::word(0x0000903a, 0x07c1f83f, "slli\t%17-21r,%27-31r,%6-10d"),
        OpcodeEntry::word(0x0000d03a, 0x07c1f83f, "srli\t%17-21r,%27-31r,%6-10d"),
        OpcodeEntry::word(0x0001d03a, 0x07c1f83f, "srai\t%17-21r,%27-31r,%6-10d"),
        OpcodeEntry::word(0x0001883a, 0x0001ffff, "add\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0001c83a, 0x0001ffff, "sub\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0001383a, 0x0001ffff, "mul\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0001283a, 0x0001ffff, "div\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0001203a, 0x0001ffff, "divu\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000f83a, 0x0001ffff, "mulxss\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000b83a, 0x0001ffff, "mulxsu\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000383a, 0x0001ffff, "mulxuu\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000703a, 0x0001ffff, "and\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000b03a, 0x0001ffff, "or\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000f03a, 0x0001ffff, "xor\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000303a, 0x0001ffff, "nor\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000183a, 0x0001ffff, "rol\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000583a, 0x0001ffff, "ror\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000983a, 0x0001ffff, "sll\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000d83a, 0x0001ffff, "srl\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0001d83a, 0x0001ffff, "sra\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0001003a, 0x0001ffff, "cmpeq\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000c03a, 0x0001ffff, "cmpne\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000403a, 0x0001ffff, "cmpge\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0001403a, 0x0001ffff, "cmpgeu\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0000803a, 0x0001ffff, "cmplt\t%17-21r,%27-31r,%22-26r"),
        OpcodeEntry::word(0x0001803a, 0x0001ffff, "cmpltu\t%17-21r,%27-31r,%22-26r"),
        // immediate
        OpcodeEntry::word(0x00000004, 0x0000003f, "addi\t%22-26r,%27-31r,%6-21I"),
        OpcodeEntry::word(0x00000024, 0x0000003f, "muli\t%22-26r,%27-31r,%6-21I"),
        OpcodeEntry::word(0x0000000c, 0x0000003f, "andi\t%22-26r,%27-31r,%6-21d"),
        OpcodeEntry::word(0x00000014, 0x0000003f, "ori\t%22-26r,%27-31r,%6-21d"),
        OpcodeEntry::word(0x0000001c, 0x0000003f, "xori\t%22-26r,%27-31r,%6-21d"),
        OpcodeEntry::word(0x0000002c, 0x0000003f, "andhi\t%22-26r,%27-31r,%6-21d"),
        OpcodeEntry::word(0x00000034, 0x0000003f, "orhi\t%22-26r,%27-31r,%6-21d"),
        OpcodeEntry::word(0x0000003c, 0x0000003f, "xorhi\t%22-26r,%27-31r,%6-21d"),
        OpcodeEntry::word(0x00000020, 0x0000003f, "cmpeqi\t%22-26r,%27-31r,%6-21I"),
        OpcodeEntry::word(0x00000018, 0x0000003f, "cmpnei\t%22-26r,%27-31r,%6-21I"),
        OpcodeEntry::word(0x00000008, 0x0000003f, "cmpgei\t%22-26r,%27-31r,%6-21I"),
        OpcodeEntry::word(0x00000010, 0x0000003f, "cmplti\t%22-26r,%27-31r,%6-21I"),
        OpcodeEntry::word(0x00000028, 0x0000003f, "cmpgeui\t%22-26r,%27-31r,%6-21d"),
        OpcodeEntry::word(0x00000030, 0x0000003f, "cmpltui\t%22-26r,%27-31r,%6-21d"),
        // memory
        OpcodeEntry::word(0x00000007, 0x0000003f, "ldb\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000003, 0x0000003f, "ldbu\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x0000000f, 0x0000003f, "ldh\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x0000000b, 0x0000003f, "ldhu\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000017, 0x0000003f, "ldw\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000027, 0x0000003f, "ldbio\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000023, 0x0000003f, "ldbuio\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x0000002f, 0x0000003f, "ldhio\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x0000002b, 0x0000003f, "ldhuio\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000037, 0x0000003f, "ldwio\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000005, 0x0000003f, "stb\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x0000000d, 0x0000003f, "sth\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000015, 0x0000003f, "stw\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000025, 0x0000003f, "stbio\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x0000002d, 0x0000003f, "sthio\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000035, 0x0000003f, "stwio\t%22-26r,%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000033, 0x0000003f, "initd\t%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000013, 0x0000003f, "initda\t%6-21I(%27-31r)"),
        OpcodeEntry::word(0x0000003b, 0x0000003f, "flushd\t%6-21I(%27-31r)"),
        OpcodeEntry::word(0x0000001b, 0x0000003f, "flushda\t%6-21I(%27-31r)"),
        OpcodeEntry::word(0x00000038, 0x0000003f, "rdprs\t%22-26r,%27-31r,%6-21I"),
        OpcodeEntry::word(0x00000000, 0x00000000, "undefined instruction %W"),
    ],
};

pub static R2_TABLE: Table = Table {
    name: "nios2r2",
    pc: PcOffset { half: 2, word: 4 },
    entries: &[
        // aliases
        OpcodeEntry::word(0xc4000020, 0xffffffff, "nop"),
        OpcodeEntry::word(0xc4000020, 0xffe0f83f, "mov\t%16-20r,%6-10r"),
        OpcodeEntry::word(0x00000004, 0x000007ff, "movi\t%11-15r,%16-31I"),
        OpcodeEntry::word(0x00000014, 0x000007ff, "movui\t%11-15r,%16-31d"),
        OpcodeEntry::word(0x00000034, 0x000007ff, "movhi\t%11-15r,%16-31d"),
        // control transfer
        OpcodeEntry::word(0x140007e0, 0xffffffff, "ret").flow(RET),
        OpcodeEntry::word(0x0400f760, 0xffffffff, "eret").flow(RET),
        OpcodeEntry::word(0x240007a0, 0xffffffff, "bret").flow(RET),
        OpcodeEntry::word(0x741f0020, 0xfffff83f, "callr\t%6-10r").flow(CALL),
        OpcodeEntry::word(0x34000020, 0xfffff83f, "jmp\t%6-10r").flow(JUMP),
        OpcodeEntry::word(0x00000000, 0x0000003f, "call\t%6-31m").flow(CALL),
        OpcodeEntry::word(0x00000008, 0x0000003f, "jmpi\t%6-31m").flow(JUMP),
        OpcodeEntry::word(0x00000002, 0x0000003f, "br\t%16-31o").flow(JUMP),
        OpcodeEntry::word(0x0000002a, 0x0000003f, "beq\t%6-10r,%11-15r,%16-31o").flow(COND_BRANCH),
        OpcodeEntry::word(0x00000022, 0x0000003f, "bne\t%6-10r,%11-15r,%16-31o").flow(COND_BRANCH),
        OpcodeEntry::word(0x00000012, 0x0000003f, "bge\t%6-10r,%11-15r,%16-31o").flow(COND_BRANCH),
        OpcodeEntry::word(0x00000032, 0x0000003f, "bgeu\t%6-10r,%11-15r,%16-31o").flow(COND_BRANCH),
        OpcodeEntry::word(0x0000001a, 0x0000003f, "blt\t%6-10r,%11-15r,%16-31o").flow(COND_BRANCH),
        OpcodeEntry::word(0x0000003a, 0x0000003f, "bltu\t%6-10r,%11-15r,%16-31o").flow(COND_BRANCH),
        // system
        OpcodeEntry::word(0xd01e0020, 0xfc1fffff, "break\t%21-25d"),
        OpcodeEntry::word(0xb41d0020, 0xfc1fffff, "trap\t%21-25d"),
        OpcodeEntry::word(0x70000020, 0xffe0ffff, "nextpc\t%16-20r"),
        OpcodeEntry::word(0x98000020, 0xfc00ffff, "rdctl\t%16-20r,%21-25c"),
        OpcodeEntry::word(0xb8000020, 0xfc1ff83f, "wrctl\t%21-25c,%6-10r"),
        OpcodeEntry::word(0xd8000020, 0xffffffff, "sync"),
        OpcodeEntry::word(0x10000020, 0xffffffff, "flushp"),
        OpcodeEntry::word(0x30000020, 0xfffff83f, "flushi\t%6-10r"),
        OpcodeEntry::word(0xa4000020, 0xfffff83f, "initi\t%6-10r"),
        OpcodeEntry::word(0x20000020, 0xfc1fffff, "eni\t%21-25d"),
        OpcodeEntry::word(0x50000020, 0xffe0f83f, "wrprs\t%16-20r,%6-10r"),
        // register
        OpcodeEntry::word(0x08000020, 0xfc00f83f, "roli\t%16-20r,%6-10r,%21-25d"),
        OpcodeEntry::word(0x48000020, 0xfc00f83f, "slli\t%16-20r,%6-10r,%21-25d"),
        OpcodeEntry::word(0x68000020, 0xfc00f83f, "srli\t%16-20r,%6-10r,%21-25d"),
        OpcodeEntry::word(0xe8000020, 0xfc00f83f, "srai\t%16-20r,%6-10r,%21-25d"),
        OpcodeEntry::word(0xc4000020, 0xffe0003f, "add\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0xe4000020, 0xffe0003f, "sub\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x9c000020, 0xffe0003f, "mul\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x94000020, 0xffe0003f, "div\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x90000020, 0xffe0003f, "divu\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x7c000020, 0xffe0003f, "mulxss\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x5c000020, 0xffe0003f, "mulxsu\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x1c000020, 0xffe0003f, "mulxuu\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x38000020, 0xffe0003f, "and\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x58000020, 0xffe0003f, "or\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x78000020, 0xffe0003f, "xor\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x18000020, 0xffe0003f, "nor\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x0c000020, 0xffe0003f, "rol\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x2c000020, 0xffe0003f, "ror\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x4c000020, 0xffe0003f, "sll\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x6c000020, 0xffe0003f, "srl\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0xec000020, 0xffe0003f, "sra\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0xa0000020, 0xffe0003f, "cmpeq\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x80000020, 0xffe0003f, "cmpne\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x40000020, 0xffe0003f, "cmpge\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0xc0000020, 0xffe0003f, "cmpgeu\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0x60000020, 0xffe0003f, "cmplt\t%16-20r,%6-10r,%11-15r"),
        OpcodeEntry::word(0xe0000020, 0xffe0003f, "cmpltu\t%16-20r,%6-10r,%11-15r"),
        // immediate
        OpcodeEntry::word(0x00000004, 0x0000003f, "addi\t%11-15r,%6-10r,%16-31I"),
        OpcodeEntry::word(0x00000024, 0x0000003f, "muli\t%11-15r,%6-10r,%16-31I"),
        OpcodeEntry::word(0x0000000c, 0x0000003f, "andi\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x00000014, 0x0000003f, "ori\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x0000001c, 0x0000003f, "xori\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x0000002c, 0x0000003f, "andhi\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x00000034, 0x0000003f, "orhi\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x0000003c, 0x0000003f, "xorhi\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x0000001f, 0x0000003f, "andci\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x0000003f, 0x0000003f, "andchi\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x0000002e, 0x0000003f, "cmpeqi\t%11-15r,%6-10r,%16-31I"),
        OpcodeEntry::word(0x00000026, 0x0000003f, "cmpnei\t%11-15r,%6-10r,%16-31I"),
        OpcodeEntry::word(0x00000016, 0x0000003f, "cmpgei\t%11-15r,%6-10r,%16-31I"),
        OpcodeEntry::word(0x0000001e, 0x0000003f, "cmplti\t%11-15r,%6-10r,%16-31I"),
        OpcodeEntry::word(0x00000036, 0x0000003f, "cmpgeui\t%11-15r,%6-10r,%16-31d"),
        OpcodeEntry::word(0x0000003e, 0x0000003f, "cmpltui\t%11-15r,%6-10r,%16-31d"),
        // memory
        OpcodeEntry::word(0x00000007, 0x0000003f, "ldb\t%11-15r,%16-31I(%6-10r)"),
        OpcodeEntry::word(0x00000006, 0x0000003f, "ldbu\t%11-15r,%16-31I(%6-10r)"),
        OpcodeEntry::word(0x0000000f, 0x0000003f, "ldh\t%11-15r,%16-31I(%6-10r)"),
        OpcodeEntry::word(0x0000000e, 0x0000003f, "ldhu\t%11-15r,%16-31I(%6-10r)"),
        OpcodeEntry::word(0x00000017, 0x0000003f, "ldw\t%11-15r,%16-31I(%6-10r)"),
        OpcodeEntry::word(0x00000027, 0x0000003f, "stb\t%11-15r,%16-31I(%6-10r)"),
        OpcodeEntry::word(0x0000002f, 0x0000003f, "sth\t%11-15r,%16-31I(%6-10r)"),
        OpcodeEntry::word(0x00000037, 0x0000003f, "stw\t%11-15r,%16-31I(%6-10r)"),
        // 12-bit offset group, sub-opcode in bits 28-31; cache ops select on bits 11-15
        OpcodeEntry::word(0x00000028, 0xf000003f, "ldbio\t%11-15r,%16-27I(%6-10r)"),
        OpcodeEntry::word(0x10000028, 0xf000003f, "stbio\t%11-15r,%16-27I(%6-10r)"),
        OpcodeEntry::word(0x20000028, 0xf000003f, "ldbuio\t%11-15r,%16-27I(%6-10r)"),
        OpcodeEntry::word(0x30000028, 0xf000f83f, "initd\t%16-27I(%6-10r)"),
        OpcodeEntry::word(0x30000828, 0xf000f83f, "initda\t%16-27I(%6-10r)"),
        OpcodeEntry::word(0x30001028, 0xf000f83f, "flushd\t%16-27I(%6-10r)"),
        OpcodeEntry::word(0x30001828, 0xf000f83f, "flushda\t%16-27I(%6-10r)"),
        OpcodeEntry::word(0x40000028, 0xf000003f, "ldhio\t%11-15r,%16-27I(%6-10r)"),
        OpcodeEntry::word(0x50000028, 0xf000003f, "sthio\t%11-15r,%16-27I(%6-10r)"),
        OpcodeEntry::word(0x60000028, 0xf000003f, "ldhuio\t%11-15r,%16-27I(%6-10r)"),
        OpcodeEntry::word(0x70000028, 0xf000003f, "rdprs\t%11-15r,%6-10r,%16-27I"),
        OpcodeEntry::word(0x80000028, 0xf000003f, "ldwio\t%11-15r,%16-27I(%6-10r)"),
        OpcodeEntry::word(0x90000028, 0xf000003f, "stwio\t%11-15r,%16-27I(%6-10r)"),
        // 16-bit
        OpcodeEntry::half(0x003b, 0xffff, "nop.n"),
        OpcodeEntry::half(0x003b, 0x003f, "mov.n\t%11-15r,%6-10r"),
        OpcodeEntry::half(0xe009, 0xf7ff, "ret.n").flow(RET),
        OpcodeEntry::half(0x8009, 0xf03f, "callr.n\t%6-10r").flow(CALL),
        OpcodeEntry::half(0xa009, 0xf03f, "jmpr.n\t%6-10r").flow(JUMP),
        OpcodeEntry::half(0xc009, 0xf03f, "break.n\t%6-10d"),
        OpcodeEntry::half(0xd009, 0xf03f, "trap.n\t%6-10d"),
        OpcodeEntry::half(0x0009, 0xf03f, "and.n\t%6-8R,%6-8R,%9-11R"),
        OpcodeEntry::half(0x2009, 0xf03f, "or.n\t%6-8R,%6-8R,%9-11R"),
        OpcodeEntry::half(0x3009, 0xf03f, "xor.n\t%6-8R,%6-8R,%9-11R"),
        OpcodeEntry::half(0x4009, 0xf03f, "sll.n\t%6-8R,%6-8R,%9-11R"),
        OpcodeEntry::half(0x5009, 0xf03f, "srl.n\t%6-8R,%6-8R,%9-11R"),
        OpcodeEntry::half(0x6009, 0xf03f, "not.n\t%9-11R,%6-8R"),
        OpcodeEntry::half(0x7009, 0xf03f, "neg.n\t%6-8R,%9-11R"),
        OpcodeEntry::half(0x0003, 0x003f, "br.n\t%6-15O").flow(JUMP),
        OpcodeEntry::half(0x002b, 0x003f, "beqz.n\t%6-8R,%9-15O").flow(COND_BRANCH),
        OpcodeEntry::half(0x0023, 0x003f, "bnez.n\t%6-8R,%9-15O").flow(COND_BRANCH),
        OpcodeEntry::half(0x0001, 0x803f, "add.n\t%12-14R,%6-8R,%9-11R"),
        OpcodeEntry::half(0x8001, 0x803f, "sub.n\t%12-14R,%6-8R,%9-11R"),
        OpcodeEntry::half(0x0011, 0x803f, "addi.n\t%9-11R,%6-8R,%12-14e"),
        OpcodeEntry::half(0x8011, 0x803f, "subi.n\t%9-11R,%6-8R,%12-14e"),
        OpcodeEntry::half(0x0019, 0x803f, "slli.n\t%9-11R,%6-8R,%12-14f"),
        OpcodeEntry::half(0x8019, 0x803f, "srli.n\t%9-11R,%6-8R,%12-14f"),
        OpcodeEntry::half(0x000b, 0x003f, "andi.n\t%9-11R,%6-8R,%12-15g"),
        OpcodeEntry::half(0x001b, 0x003f, "movi.n\t%6-8R,%9-15h"),
        OpcodeEntry::half(0x003d, 0x003f, "spaddi.n\t%6-8R,%9-15W"),
        OpcodeEntry::half(0x0029, 0x803f, "spinci.n\t%6-12W"),
        OpcodeEntry::half(0x8029, 0x803f, "spdeci.n\t%6-12W"),
        OpcodeEntry::half(0x0005, 0x003f, "ldbu.n\t%9-11R,%12-15d(%6-8R)"),
        OpcodeEntry::half(0x000d, 0x003f, "ldhu.n\t%9-11R,%12-15H(%6-8R)"),
        OpcodeEntry::half(0x0015, 0x003f, "ldw.n\t%9-11R,%12-15W(%6-8R)"),
        OpcodeEntry::half(0x0025, 0x003f, "stb.n\t%9-11R,%12-15d(%6-8R)"),
        OpcodeEntry::half(0x002d, 0x003f, "sth.n\t%9-11R,%12-15H(%6-8R)"),
        OpcodeEntry::half(0x0035, 0x003f, "stw.n\t%9-11R,%12-15W(%6-8R)"),
        OpcodeEntry::half(0x0013, 0x003f, "ldwsp.n\t%11-15r,%6-10W(%S)"),
        OpcodeEntry::half(0x0033, 0x003f, "stwsp.n\t%11-15r,%6-10W(%S)"),
        OpcodeEntry::half(0x001d, 0x803f, "stwz.n\t%z,%9-14W(%6-8R)"),
        OpcodeEntry::half(0x801d, 0x803f, "stbz.n\t%z,%9-14d(%6-8R)"),
        // unassigned opcodes keep their encoding width
        OpcodeEntry::word(0x00000007, 0x00000007, "undefined instruction %W"),
        OpcodeEntry::half(0x0001, 0x0001, "undefined instruction %W"),
        OpcodeEntry::word(0x00000000, 0x00000000, "undefined instruction %W"),
    ],
};
