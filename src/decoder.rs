use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{Config, ConfigError, Options};
use crate::disasm::{self, Arg, Renderer};
use crate::format::Syntax;
use crate::isa::{arm::Arm, mips::Mips, nios2::Nios2};
use crate::memory::{ByteSource, Endian, MemoryError};
use crate::regs::RegisterScheme;
use crate::stitch::{self, Pair};
use crate::symbols::AddressResolver;
use crate::table::{Flow, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Width {
    W16 = 2,
    W32 = 4,
}

/// What to fetch for one decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeRequest {
    /// Fetch address, with any mode bit already stripped.
    pub address: u64,
    pub width: Width,
    pub endian: Endian,
    pub compressed: bool,
    /// Fall back to a halfword when a full word cannot be read.
    pub allow_short: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawWord {
    pub bits: u32,
    pub width: Width,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedInstruction {
    pub address: u64,
    pub byte_length: u8,
    /// Raw instruction bits; both halves for a stitched pair, first half low.
    pub word: u32,
    pub text: String,
    pub is_branch: bool,
    pub is_call: bool,
    pub target_address: Option<u64>,
    pub flow: Flow,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

impl DecodeError {
    pub fn address(&self) -> u64 {
        match self {
            DecodeError::Memory(e) => e.address(),
        }
    }
}

/// One architecture: its tables, register schemes, directive letters and
/// the rule that picks a table for an address.
pub trait Isa: Send + Sync {
    type Directive: Syntax;

    fn name(&self) -> &'static str;

    fn tables(&self) -> &'static [&'static Table];

    fn schemes(&self) -> &'static [RegisterScheme];

    fn default_scheme(&self) -> &'static str;

    /// Name of the compressed instruction set, if there is one.
    fn compressed_mode(&self) -> Option<&'static str> {
        None
    }

    fn supports_big_endian(&self) -> bool {
        true
    }

    fn address_bits(&self) -> u32 {
        32
    }

    fn request(&self, address: u64, config: &Config) -> DecodeRequest;

    fn table(&self, request: &DecodeRequest) -> &'static Table;

    fn render(&self, directive: Self::Directive, arg: Arg, cx: &mut Renderer<'_>);

    /// Joins the halves of a two-halfword call. Only reached for tables that
    /// carry an empty-format continuation entry.
    fn join_pair(&self, first: u16, second: u16, address: u64) -> Pair {
        let _ = (second, address);
        panic!("internal decoder error: {} has no two-halfword form for {first:#06x}", self.name())
    }
}

pub trait Decoder: Send + Sync {
    fn name(&self) -> &'static str;

    fn decode(
        &self,
        address: u64,
        bytes: &mut dyn ByteSource,
        resolver: &dyn AddressResolver,
    ) -> Result<RenderedInstruction, DecodeError>;
}

/// The table-driven decoder for one architecture and one configuration.
pub struct Disassembler<I: Isa> {
    isa: I,
    config: Config,
}

impl<I: Isa> Disassembler<I> {
    pub fn new(isa: I, options: &Options) -> Result<Self, ConfigError> {
        let config = Config::resolve(&isa, options)?;
        debug!(arch = isa.name(), scheme = config.scheme.id, "disassembler configured");
        Ok(Self { isa, config })
    }

    pub fn isa(&self) -> &I {
        &self.isa
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

fn fetch_half(bytes: &mut dyn ByteSource, req: &DecodeRequest) -> Result<RawWord, MemoryError> {
    let h = bytes.read_u16(req.address, req.endian)?;
    Ok(RawWord { bits: u32::from(h), width: Width::W16 })
}

fn fetch(bytes: &mut dyn ByteSource, req: &DecodeRequest) -> Result<RawWord, MemoryError> {
    match req.width {
        Width::W16 => fetch_half(bytes, req),
        Width::W32 => match bytes.read_u32(req.address, req.endian) {
            Ok(bits) => Ok(RawWord { bits, width: Width::W32 }),
            Err(_) if req.allow_short => fetch_half(bytes, req),
            Err(e) => Err(e),
        },
    }
}

impl<I: Isa> Decoder for Disassembler<I> {
    fn name(&self) -> &'static str {
        self.isa.name()
    }

    fn decode(
        &self,
        address: u64,
        bytes: &mut dyn ByteSource,
        resolver: &dyn AddressResolver,
    ) -> Result<RenderedInstruction, DecodeError> {
        let req = self.isa.request(address, &self.config);
        let table = self.isa.table(&req);
        let raw = fetch(bytes, &req)?;
        let (index, entry) = table.lookup(raw);
        trace!(table = table.name, index, word = format_args!("{:#x}", raw.bits), "matched");

        if entry.is_continuation() {
            return stitch::stitch(&self.isa, &self.config, req.address, raw, bytes, resolver);
        }

        let raw = RawWord { bits: raw.bits, width: entry.width.min(raw.width) };
        let mut cx = Renderer::new(
            entry.spec,
            raw,
            req.address,
            table.pc_offset(raw.width),
            &self.config,
            resolver,
        );
        disasm::render(&self.isa, entry.spec, &mut cx);
        Ok(cx.finish(entry.flow))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Arm,
    Mips,
    Nios2,
    Nios2r2,
}

impl Arch {
    pub const ALL: [Arch; 4] = [Arch::Arm, Arch::Mips, Arch::Nios2, Arch::Nios2r2];

    pub fn decoder(self, options: &Options) -> Result<Box<dyn Decoder>, ConfigError> {
        Ok(match self {
            Arch::Arm => Box::new(Disassembler::new(Arm, options)?),
            Arch::Mips => Box::new(Disassembler::new(Mips, options)?),
            Arch::Nios2 => Box::new(Disassembler::new(Nios2::R1, options)?),
            Arch::Nios2r2 => Box::new(Disassembler::new(Nios2::R2, options)?),
        })
    }

    pub fn describe_options(self) -> String {
        match self {
            Arch::Arm => crate::config::describe_options(&Arm),
            Arch::Mips => crate::config::describe_options(&Mips),
            Arch::Nios2 => crate::config::describe_options(&Nios2::R1),
            Arch::Nios2r2 => crate::config::describe_options(&Nios2::R2),
        }
    }
}
