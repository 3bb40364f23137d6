use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decoder::Isa;
use crate::memory::Endian;
use crate::regs::{find_scheme, RegisterScheme};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unrecognised register name set {scheme:?} for {arch} (expected one of: {available})")]
    UnknownScheme { arch: &'static str, scheme: String, available: String },
    #[error("unrecognised disassembler option: {0}")]
    UnknownOption(String),
    #[error("{arch} does not support {option}")]
    Unsupported { arch: &'static str, option: &'static str },
}

/// Caller-facing disassembler options, as read from the command line or a
/// config file. Turned into a [`Config`] by [`Config::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    /// Register naming scheme id; the architecture default when `None`.
    pub reg_names: Option<String>,
    /// Decode everything with the compressed instruction set.
    pub force_compressed: bool,
    pub endian: Endian,
}

impl Options {
    /// Parses a comma or whitespace separated option list such as
    /// `"reg-names-raw,force-thumb"`.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut opts = Self::default();
        opts.apply_all(text)?;
        Ok(opts)
    }

    pub fn apply_all(&mut self, text: &str) -> Result<(), ConfigError> {
        text.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .try_for_each(|w| self.apply(w))
    }

    pub fn apply(&mut self, option: &str) -> Result<(), ConfigError> {
        if let Some(id) = option.strip_prefix("reg-names-").or_else(|| option.strip_prefix("gpr-names=")) {
            self.reg_names = Some(id.to_string());
            return Ok(());
        }
        match option {
            "force-thumb" | "force-mips16" | "force-compressed" => self.force_compressed = true,
            "no-force-thumb" | "no-force-mips16" | "no-force-compressed" => self.force_compressed = false,
            "big-endian" => self.endian = Endian::Big,
            "little-endian" => self.endian = Endian::Little,
            _ => return Err(ConfigError::UnknownOption(option.to_string())),
        }
        Ok(())
    }
}

/// Validated configuration, fixed for the lifetime of a disassembler.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub scheme: &'static RegisterScheme,
    pub force_compressed: bool,
    pub endian: Endian,
    pub address_mask: u64,
}

impl Config {
    pub fn resolve<I: Isa + ?Sized>(isa: &I, options: &Options) -> Result<Self, ConfigError> {
        let id = options.reg_names.as_deref().unwrap_or(isa.default_scheme());
        let scheme = find_scheme(isa.schemes(), id).ok_or_else(|| ConfigError::UnknownScheme {
            arch: isa.name(),
            scheme: id.to_string(),
            available: isa.schemes().iter().map(|s| s.id).collect::<Vec<_>>().join(", "),
        })?;
        if options.endian == Endian::Big && !isa.supports_big_endian() {
            return Err(ConfigError::Unsupported { arch: isa.name(), option: "big-endian" });
        }
        if options.force_compressed && isa.compressed_mode().is_none() {
            return Err(ConfigError::Unsupported { arch: isa.name(), option: "force-compressed" });
        }
        let address_mask = match isa.address_bits() {
            64 => u64::MAX,
            bits => (1u64 << bits) - 1,
        };
        Ok(Self { scheme, force_compressed: options.force_compressed, endian: options.endian, address_mask })
    }
}

/// Help text listing the option words understood for `isa`.
pub fn describe_options<I: Isa + ?Sized>(isa: &I) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "The following {} specific disassembler options are supported for use with -M:", isa.name());
    let _ = writeln!(out);
    for s in isa.schemes() {
        let default = if s.id == isa.default_scheme() { " (default)" } else { "" };
        let _ = writeln!(out, "  reg-names-{:<16} {}{}", s.id, s.description, default);
    }
    if let Some(mode) = isa.compressed_mode() {
        let force = format!("force-{mode}");
        let no_force = format!("no-force-{mode}");
        let _ = writeln!(out, "  {force:<26} Assume all instructions are {mode}");
        let _ = writeln!(out, "  {no_force:<26} Examine the address to choose the instruction set");
    }
    if isa.supports_big_endian() {
        let _ = writeln!(out, "  {:<26} Fetch instructions most significant byte first", "big-endian");
    }
    let _ = writeln!(out, "  {:<26} Fetch instructions least significant byte first", "little-endian");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_lists() {
        let o = Options::parse("reg-names-raw, force-thumb big-endian").unwrap();
        assert_eq!(o.reg_names.as_deref(), Some("raw"));
        assert!(o.force_compressed);
        assert_eq!(o.endian, Endian::Big);

        let o = Options::parse("force-mips16,no-force-compressed,gpr-names=numeric").unwrap();
        assert!(!o.force_compressed);
        assert_eq!(o.reg_names.as_deref(), Some("numeric"));
    }

    #[test]
    fn unknown_option_is_reported() {
        assert_eq!(Options::parse("reg-names-raw,bogus"), Err(ConfigError::UnknownOption("bogus".into())));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let o: Options = serde_json::from_str(r#"{"reg-names":"gcc"}"#).unwrap();
        assert_eq!(o, Options { reg_names: Some("gcc".into()), ..Options::default() });
    }
}
