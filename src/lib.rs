pub mod bits;
pub mod config;
pub mod decoder;
pub mod disasm;
pub mod format;
pub mod memory;
pub mod regs;
pub mod stitch;
pub mod symbols;
pub mod table;

pub mod isa {
    pub mod arm; // ARM with Thumb
    pub mod mips; // MIPS32 with MIPS16
    pub mod nios2; // Nios II R1 and R2
}

pub use config::{Config, ConfigError, Options};
pub use decoder::{Arch, DecodeError, Decoder, Disassembler, Isa, RenderedInstruction, Width};
pub use memory::{ByteSource, Endian, LinearMemory, MemoryError};
pub use symbols::{AddressResolver, DisplayHint, NoSymbols, SymbolMap};
pub use table::{Flow, OpcodeEntry, Table, TableDefect};
