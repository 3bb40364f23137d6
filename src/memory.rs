use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endian {
    #[default]
    Little,
    Big,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("address {address:#010x} is not mapped")]
    Unmapped { address: u64 },
    #[error("read of {wanted} bytes at {address:#010x} runs off the end of memory ({available} available)")]
    Truncated { address: u64, wanted: usize, available: usize },
}

impl MemoryError {
    pub fn address(&self) -> u64 {
        match self {
            MemoryError::Unmapped { address } | MemoryError::Truncated { address, .. } => *address,
        }
    }
}

/// Where instruction bytes come from: an image on disk, a debuggee, a test buffer.
pub trait ByteSource {
    /// Fill `buf` with the bytes at `address`, or fail without partial output.
    fn read(&mut self, address: u64, buf: &mut [u8]) -> Result<(), MemoryError>;

    fn read_u16(&mut self, address: u64, endian: Endian) -> Result<u16, MemoryError> {
        let mut b = [0u8; 2];
        self.read(address, &mut b)?;
        Ok(match endian {
            Endian::Little => u16::from_le_bytes(b),
            Endian::Big => u16::from_be_bytes(b),
        })
    }

    fn read_u32(&mut self, address: u64, endian: Endian) -> Result<u32, MemoryError> {
        let mut b = [0u8; 4];
        self.read(address, &mut b)?;
        Ok(match endian {
            Endian::Little => u32::from_le_bytes(b),
            Endian::Big => u32::from_be_bytes(b),
        })
    }
}

/// A flat byte buffer mapped at `base`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearMemory {
    pub mem: Vec<u8>,
    pub base: u64,
}

impl LinearMemory {
    pub fn new(base: u64, mem: impl Into<Vec<u8>>) -> Self {
        Self { mem: mem.into(), base }
    }

    /// Halfwords laid out in `endian` order starting at `base`.
    pub fn from_halfwords(base: u64, halfwords: &[u16], endian: Endian) -> Self {
        let mem = halfwords
            .iter()
            .flat_map(|h| match endian {
                Endian::Little => h.to_le_bytes(),
                Endian::Big => h.to_be_bytes(),
            })
            .collect::<Vec<u8>>();
        Self { mem, base }
    }

    pub fn from_words(base: u64, words: &[u32], endian: Endian) -> Self {
        let mem = words
            .iter()
            .flat_map(|w| match endian {
                Endian::Little => w.to_le_bytes(),
                Endian::Big => w.to_be_bytes(),
            })
            .collect::<Vec<u8>>();
        Self { mem, base }
    }

    pub fn end(&self) -> u64 {
        self.base + self.mem.len() as u64
    }
}

impl ByteSource for LinearMemory {
    fn read(&mut self, address: u64, buf: &mut [u8]) -> Result<(), MemoryError> {
        if address < self.base || address >= self.end() {
            return Err(MemoryError::Unmapped { address });
        }
        let off = (address - self.base) as usize;
        let available = self.mem.len() - off;
        if available < buf.len() {
            return Err(MemoryError::Truncated { address, wanted: buf.len(), available });
        }
        buf.copy_from_slice(&self.mem[off..off + buf.len()]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_in_either_byte_order() {
        let mut m = LinearMemory::new(0x100, [0x00u8, 0x47, 0x12, 0x34]);
        assert_eq!(m.read_u16(0x100, Endian::Little), Ok(0x4700));
        assert_eq!(m.read_u16(0x100, Endian::Big), Ok(0x0047));
        assert_eq!(m.read_u32(0x100, Endian::Big), Ok(0x0047_1234));
    }

    #[test]
    fn reports_unmapped_and_truncated() {
        let mut m = LinearMemory::from_halfwords(0x8000, &[0xf000], Endian::Little);
        assert_eq!(m.read_u16(0x7ffe, Endian::Little), Err(MemoryError::Unmapped { address: 0x7ffe }));
        assert_eq!(m.read_u16(0x8002, Endian::Little), Err(MemoryError::Unmapped { address: 0x8002 }));
        let err = m.read_u32(0x8000, Endian::Little).unwrap_err();
        assert_eq!(err, MemoryError::Truncated { address: 0x8000, wanted: 4, available: 2 });
        assert_eq!(err.address(), 0x8000);
    }
}
