use anyhow::Result;
use std::path::Path;

use tabledis::{ByteSource, MemoryError};

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u64,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

impl Segment {
    pub fn end(&self) -> u64 {
        self.base + self.bytes.len() as u64
    }

    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.base && addr < self.end()
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

pub fn load_raw_bin(path: &Path, base: u64, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    let seg = Segment { name: "segment0".into(), base, bytes: payload.to_vec(), perms: "r-x", kind: "raw" };
    Ok(Image { segments: vec![seg] })
}

impl Image {
    pub fn segment(&self, addr: u64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(addr))
    }

    /// Mode bits (Thumb, MIPS16) are not part of the byte address.
    pub fn is_mapped(&self, addr: u64) -> bool {
        self.segment(addr & !1).is_some()
    }

    pub fn bytes(&self, addr: u64, len: usize) -> Option<&[u8]> {
        let s = self.segment(addr)?;
        let off = (addr - s.base) as usize;
        s.bytes.get(off..off + len)
    }
}

impl ByteSource for Image {
    fn read(&mut self, address: u64, buf: &mut [u8]) -> Result<(), MemoryError> {
        let s = self.segment(address).ok_or(MemoryError::Unmapped { address })?;
        let off = (address - s.base) as usize;
        let available = s.bytes.len() - off;
        if available < buf.len() {
            return Err(MemoryError::Truncated { address, wanted: buf.len(), available });
        }
        buf.copy_from_slice(&s.bytes[off..off + buf.len()]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabledis::Endian;

    #[test]
    fn loader_maps_skip_and_len() {
        let path = std::env::temp_dir().join(format!("tabledis_loader_{}.bin", std::process::id()));
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5]).unwrap();
        let mut img = load_raw_bin(&path, 0x1000_0000, 2, Some(3)).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(img.segments.len(), 1);
        let s = &img.segments[0];
        assert_eq!(s.base, 0x1000_0000);
        assert_eq!(s.bytes, vec![2, 3, 4]);
        assert_eq!(img.read_u16(0x1000_0000, Endian::Little), Ok(0x0302));
        assert_eq!(
            img.read_u32(0x1000_0000, Endian::Little),
            Err(MemoryError::Truncated { address: 0x1000_0000, wanted: 4, available: 3 })
        );
        assert_eq!(img.read_u16(0x1000_0003, Endian::Little), Err(MemoryError::Unmapped { address: 0x1000_0003 }));
    }

    #[test]
    fn mode_bit_does_not_affect_mapping() {
        let img = Image {
            segments: vec![Segment { name: "s".into(), base: 0x100, bytes: vec![0; 4], perms: "r-x", kind: "raw" }],
        };
        assert!(img.is_mapped(0x101));
        assert!(img.is_mapped(0x103));
        assert!(!img.is_mapped(0x104));
        assert_eq!(img.bytes(0x102, 2), Some(&[0u8, 0][..]));
        assert_eq!(img.bytes(0x103, 2), None);
    }
}
