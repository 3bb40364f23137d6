use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decoder::{RawWord, Width};

bitflags! {
    /// Control-flow facts about an instruction, for callers building graphs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Flow: u8 {
        const BRANCH = 1 << 0;
        const CALL = 1 << 1;
        const CONDITIONAL = 1 << 2;
        const RETURN = 1 << 3;
        /// The destination runs in the other instruction set.
        const EXCHANGE = 1 << 4;
    }
}

pub const COND_BRANCH: Flow = Flow::BRANCH.union(Flow::CONDITIONAL);

/// One `(value, mask, format)` row of an opcode table.
///
/// An empty `spec` marks the first half of a stitched two-halfword pair.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeEntry {
    pub value: u32,
    pub mask: u32,
    pub spec: &'static str,
    pub width: Width,
    pub flow: Flow,
}

impl OpcodeEntry {
    pub const fn word(value: u32, mask: u32, spec: &'static str) -> Self {
        Self { value, mask, spec, width: Width::W32, flow: Flow::empty() }
    }

    pub const fn half(value: u32, mask: u32, spec: &'static str) -> Self {
        Self { value, mask, spec, width: Width::W16, flow: Flow::empty() }
    }

    pub const fn flow(self, flow: Flow) -> Self {
        Self { flow, ..self }
    }

    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.value
    }

    pub fn is_catch_all(&self) -> bool {
        self.mask == 0
    }

    pub fn is_continuation(&self) -> bool {
        self.spec.is_empty()
    }
}

/// Offset added to an instruction's address to get the PC value its
/// relative fields are measured from, per encoding width.
#[derive(Debug, Clone, Copy)]
pub struct PcOffset {
    pub half: u64,
    pub word: u64,
}

#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub pc: PcOffset,
    pub entries: &'static [OpcodeEntry],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableDefect {
    #[error("{table}[{index}]: value {value:#x} sets bits outside mask {mask:#x}")]
    ValueOutsideMask { table: &'static str, index: usize, value: u32, mask: u32 },
    #[error("{table}[{index}]: catch-all entry is not last")]
    CatchAllNotLast { table: &'static str, index: usize },
    #[error("{table}: no trailing catch-all entry")]
    MissingCatchAll { table: &'static str },
}

/// First entry of `entries`, in declared order, with `word & mask == value`.
///
/// No reordering and no specificity inference: the table author decides
/// precedence by placing narrower masks first. `None` only happens for a
/// slice with no catch-all; decoding goes through [`Table::lookup`], whose
/// verified tables always end in one.
pub fn find_match(word: u32, entries: &[OpcodeEntry]) -> Option<(usize, &OpcodeEntry)> {
    entries.iter().enumerate().find(|(_, e)| e.matches(word))
}

impl Table {
    pub fn pc_offset(&self, width: Width) -> u64 {
        match width {
            Width::W16 => self.pc.half,
            Width::W32 => self.pc.word,
        }
    }

    /// Matches `raw` against the table. Entries wider than the bytes that
    /// were actually fetched are skipped; the catch-all is always eligible.
    pub fn lookup(&self, raw: RawWord) -> (usize, &'static OpcodeEntry) {
        let entries: &'static [OpcodeEntry] = self.entries;
        entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_catch_all() || e.width <= raw.width)
            .find(|(_, e)| e.matches(raw.bits))
            .unwrap_or_else(|| {
                panic!("internal decoder error: table {} has no catch-all entry", self.name)
            })
    }

    pub fn verify(&self) -> Result<(), TableDefect> {
        let last = self.entries.len().checked_sub(1);
        for (index, e) in self.entries.iter().enumerate() {
            if e.value & !e.mask != 0 {
                return Err(TableDefect::ValueOutsideMask {
                    table: self.name,
                    index,
                    value: e.value,
                    mask: e.mask,
                });
            }
            if e.is_catch_all() && Some(index) != last {
                return Err(TableDefect::CatchAllNotLast { table: self.name, index });
            }
        }
        match self.entries.last() {
            Some(e) if e.is_catch_all() => Ok(()),
            _ => Err(TableDefect::MissingCatchAll { table: self.name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAP: &[OpcodeEntry] = &[
        OpcodeEntry::word(0x0000_0010, 0x0000_00f0, "wide"),
        OpcodeEntry::word(0x0000_0012, 0x0000_00ff, "narrow"),
        OpcodeEntry::word(0, 0, "undefined instruction %0-31x"),
    ];

    #[test]
    fn first_listed_entry_wins_over_more_specific_one() {
        let (index, e) = find_match(0x12, OVERLAP).unwrap();
        assert_eq!(index, 0);
        assert_eq!(e.spec, "wide");
    }

    #[test]
    fn falls_through_to_catch_all() {
        let (index, e) = find_match(0xdead_be00, OVERLAP).unwrap();
        assert_eq!(index, 2);
        assert!(e.is_catch_all());
    }

    #[test]
    fn bare_slice_without_catch_all_can_miss() {
        assert!(find_match(0xdead_be00, &OVERLAP[..2]).is_none());
    }

    #[test]
    fn verify_reports_defects() {
        static BAD_VALUE: Table = Table {
            name: "bad",
            pc: PcOffset { half: 2, word: 4 },
            entries: &[OpcodeEntry::word(0x11, 0x10, "x"), OpcodeEntry::word(0, 0, "u")],
        };
        assert!(matches!(BAD_VALUE.verify(), Err(TableDefect::ValueOutsideMask { index: 0, .. })));

        static NO_CATCH_ALL: Table = Table {
            name: "open",
            pc: PcOffset { half: 2, word: 4 },
            entries: &[OpcodeEntry::word(0x10, 0x10, "x")],
        };
        assert_eq!(NO_CATCH_ALL.verify(), Err(TableDefect::MissingCatchAll { table: "open" }));

        static EARLY: Table = Table {
            name: "early",
            pc: PcOffset { half: 2, word: 4 },
            entries: &[OpcodeEntry::word(0, 0, "u"), OpcodeEntry::word(0x10, 0x10, "x")],
        };
        assert_eq!(EARLY.verify(), Err(TableDefect::CatchAllNotLast { table: "early", index: 0 }));
    }

    #[test]
    fn lookup_skips_entries_wider_than_fetched_word() {
        static MIXED: Table = Table {
            name: "mixed",
            pc: PcOffset { half: 2, word: 4 },
            entries: &[
                OpcodeEntry::word(0x0000_0004, 0x0000_003f, "wide"),
                OpcodeEntry::half(0x0004, 0x000f, "narrow"),
                OpcodeEntry::word(0, 0, "u"),
            ],
        };
        let (_, e) = MIXED.lookup(RawWord { bits: 0x0004, width: Width::W32 });
        assert_eq!(e.spec, "wide");
        let (_, e) = MIXED.lookup(RawWord { bits: 0x0004, width: Width::W16 });
        assert_eq!(e.spec, "narrow");
    }
}
