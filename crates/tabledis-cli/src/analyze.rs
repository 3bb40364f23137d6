use std::collections::{HashMap, HashSet, VecDeque};
use serde::Serialize;
use tracing::debug;

use tabledis::{Decoder, Flow, NoSymbols, RenderedInstruction};

use crate::model::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind { Fallthrough, Branch, CondBranch, Call }

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Fallthrough => "ft",
            EdgeKind::Branch => "br",
            EdgeKind::CondBranch => "cbr",
            EdgeKind::Call => "call",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge { pub from: u64, pub to: u64, pub kind: EdgeKind }

/// Everything reached from the entry points.
///
/// Addresses keep their low mode bit (Thumb, MIPS16). Successors inherit
/// the mode of the instruction that reaches them, except that `blx`/`jalx`
/// destinations take the other mode.
#[derive(Debug, Default)]
pub struct Analysis {
    pub visited: HashSet<u64>,
    pub widths: HashMap<u64, u8>,
    pub edges: Vec<Edge>,
    pub rets: HashSet<u64>,
}

impl Analysis {
    fn link(&mut self, img: &Image, queue: &mut VecDeque<u64>, from: u64, to: u64, kind: EdgeKind) {
        self.edges.push(Edge { from, to, kind });
        if img.is_mapped(to) && !self.visited.contains(&to) {
            queue.push_back(to);
        }
    }
}

fn is_undefined(d: &RenderedInstruction) -> bool {
    d.text.starts_with("undefined")
}

pub fn analyze_entries(dec: &dyn Decoder, img: &mut Image, entries: &[u64], max_instr: usize) -> Analysis {
    let mut queue: VecDeque<u64> = entries.iter().copied().filter(|&e| img.is_mapped(e)).collect();
    let mut a = Analysis::default();
    let mut steps = 0usize;
    while let Some(pc) = queue.pop_front() {
        if steps >= max_instr { break; }
        if a.visited.contains(&pc) { continue; }
        let d = match dec.decode(pc, img, &NoSymbols) {
            Ok(d) => d,
            Err(e) => {
                debug!(pc = format_args!("{pc:#x}"), error = %e, "path ends at unreadable memory");
                continue;
            }
        };
        if is_undefined(&d) {
            debug!(pc = format_args!("{pc:#x}"), "path ends at undefined instruction");
            continue;
        }
        steps += 1;
        a.visited.insert(pc);
        a.widths.insert(pc, d.byte_length);

        let mode = pc & 1;
        let ft = pc.wrapping_add(u64::from(d.byte_length));
        let target_mode = if d.flow.contains(Flow::EXCHANGE) { mode ^ 1 } else { mode };
        let target = d.target_address.map(|t| (t & !1) | target_mode);
        let conditional = d.flow.contains(Flow::CONDITIONAL);
        if d.flow.contains(Flow::CALL) {
            if let Some(tgt) = target {
                a.link(img, &mut queue, pc, tgt, EdgeKind::Call);
            }
            a.link(img, &mut queue, pc, ft, EdgeKind::Fallthrough);
        } else if d.flow.contains(Flow::RETURN) {
            a.rets.insert(pc);
            if conditional {
                a.link(img, &mut queue, pc, ft, EdgeKind::Fallthrough);
            }
        } else if d.flow.contains(Flow::BRANCH) {
            // Indirect jumps have no target; the path ends there.
            if let Some(tgt) = target {
                let kind = if conditional { EdgeKind::CondBranch } else { EdgeKind::Branch };
                a.link(img, &mut queue, pc, tgt, kind);
            }
            if conditional {
                a.link(img, &mut queue, pc, ft, EdgeKind::Fallthrough);
            }
        } else {
            a.link(img, &mut queue, pc, ft, EdgeKind::Fallthrough);
        }
    }
    a
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block { pub start: u64, pub end: u64 }

#[derive(Debug, Clone, Serialize)]
pub struct EdgeOut { pub from: u64, pub to: u64, pub kind: String }

#[derive(Debug, Clone, Serialize)]
pub struct FunctionOut { pub entry: u64, pub blocks: Vec<u64> }

/// Splits the visited instructions into basic blocks. Blocks start at the
/// entries, at branch and call destinations and after any instruction that
/// can transfer control. They end after a path-ending instruction or just
/// before the next block start or a gap.
pub fn build_blocks(a: &Analysis, seeds: &[u64]) -> (Vec<Block>, HashMap<u64, u64>) {
    let branching: HashSet<u64> = a.edges.iter().filter(|e| e.kind != EdgeKind::Fallthrough).map(|e| e.from).collect();
    let mut block_starts: HashSet<u64> = seeds.iter().copied().collect();
    for e in &a.edges {
        if e.kind != EdgeKind::Fallthrough || branching.contains(&e.from) {
            block_starts.insert(e.to);
        }
    }
    let mut starts: Vec<u64> = block_starts.into_iter().collect();
    starts.sort_unstable();

    let mut blocks: Vec<Block> = Vec::new();
    let mut addr_to_block: HashMap<u64, u64> = HashMap::new(); // pc -> block start
    for &start in &starts {
        if !a.visited.contains(&start) { continue; }
        if addr_to_block.contains_key(&start) { continue; }
        let mut cur = start;
        while let Some(&w) = a.widths.get(&cur) {
            let next = cur.wrapping_add(u64::from(w));
            let is_uncond = a.edges.iter().any(|e| e.from == cur && e.kind == EdgeKind::Branch);
            let is_end = !a.edges.iter().any(|e| e.from == cur && e.kind == EdgeKind::Fallthrough);
            let should_end = is_uncond || is_end
                || a.rets.contains(&cur)
                || !a.visited.contains(&next)
                || starts.binary_search(&next).is_ok();
            if should_end {
                blocks.push(Block { start, end: next });
                let mut pc = start;
                while pc < next {
                    addr_to_block.insert(pc, start);
                    match a.widths.get(&pc) {
                        Some(&ww) => pc = pc.wrapping_add(u64::from(ww)),
                        None => break,
                    }
                }
                break;
            }
            cur = next;
        }
    }
    (blocks, addr_to_block)
}

/// Edges lifted from instruction addresses to the blocks containing them.
pub fn block_edges(a: &Analysis, addr_to_block: &HashMap<u64, u64>) -> Vec<EdgeOut> {
    a.edges
        .iter()
        .map(|e| EdgeOut {
            from: *addr_to_block.get(&e.from).unwrap_or(&e.from),
            to: e.to,
            kind: e.kind.as_str().to_string(),
        })
        .collect()
}

/// Each seed is a function root; its blocks are everything reachable from it.
pub fn functions(seeds: &[u64], edges: &[EdgeOut]) -> Vec<FunctionOut> {
    let mut adj: HashMap<u64, Vec<u64>> = HashMap::new();
    for e in edges { adj.entry(e.from).or_default().push(e.to); }
    seeds
        .iter()
        .map(|&entry| {
            let mut seen: HashSet<u64> = HashSet::new();
            let mut q = VecDeque::from([entry]);
            while let Some(b) = q.pop_front() {
                if !seen.insert(b) { continue; }
                if let Some(nexts) = adj.get(&b) {
                    q.extend(nexts.iter().copied());
                }
            }
            let mut blocks: Vec<u64> = seen.into_iter().collect();
            blocks.sort_unstable();
            FunctionOut { entry, blocks }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;
    use tabledis::{Arch, Options};

    fn image(base: u64, bytes: Vec<u8>) -> Image {
        Image { segments: vec![Segment { name: "s".into(), base, bytes, perms: "r-x", kind: "raw" }] }
    }

    fn words(ws: &[u32]) -> Vec<u8> {
        ws.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn uncond_branch_skips_fallthrough() {
        // 0x0: b 0x8 ; 0x4: undefined ; 0x8: mov r0, r0 ; 0xc: bx lr
        let mut img = image(0, words(&[0xea00_0000, 0xe7f0_00f0, 0xe1a0_0000, 0xe12f_ff1e]));
        let dec = Arch::Arm.decoder(&Options::default()).unwrap();
        let a = analyze_entries(dec.as_ref(), &mut img, &[0], 100);
        assert!(a.edges.contains(&Edge { from: 0, to: 8, kind: EdgeKind::Branch }));
        assert!(!a.visited.contains(&4));
        assert!(a.visited.contains(&8));
        assert!(a.visited.contains(&0xc));

        let (blocks, map) = build_blocks(&a, &[0]);
        assert_eq!(blocks, vec![Block { start: 0, end: 4 }, Block { start: 8, end: 0x10 }]);
        assert_eq!(map.get(&0xc), Some(&8));
    }

    #[test]
    fn call_links_target_and_fallthrough() {
        // 0x0: bl 0x8 ; 0x4: b 0x4 ; 0x8: bx lr
        let mut img = image(0, words(&[0xeb00_0000, 0xeaff_fffe, 0xe12f_ff1e]));
        let dec = Arch::Arm.decoder(&Options::default()).unwrap();
        let a = analyze_entries(dec.as_ref(), &mut img, &[0], 100);
        assert!(a.edges.contains(&Edge { from: 0, to: 8, kind: EdgeKind::Call }));
        assert!(a.edges.contains(&Edge { from: 0, to: 4, kind: EdgeKind::Fallthrough }));
        assert!(a.edges.contains(&Edge { from: 4, to: 4, kind: EdgeKind::Branch }));

        let (blocks, map) = build_blocks(&a, &[0]);
        let edges = block_edges(&a, &map);
        let funcs = functions(&[0], &edges);
        assert_eq!(blocks.len(), 3);
        assert_eq!(funcs[0].blocks, vec![0, 4, 8]);
    }

    #[test]
    fn thumb_successors_keep_mode_bit() {
        // 0x0: beq 0x6 ; 0x2: nop (mov r8, r8) ; 0x4: bx lr ; 0x6: bx lr
        let bytes = [0xd001u16, 0x46c0, 0x4770, 0x4770].iter().flat_map(|h| h.to_le_bytes()).collect();
        let mut img = image(0, bytes);
        let dec = Arch::Arm.decoder(&Options::default()).unwrap();
        let a = analyze_entries(dec.as_ref(), &mut img, &[1], 100);
        assert!(a.edges.contains(&Edge { from: 1, to: 7, kind: EdgeKind::CondBranch }));
        assert!(a.edges.contains(&Edge { from: 1, to: 3, kind: EdgeKind::Fallthrough }));
        assert!(a.visited.contains(&5));
        assert!(a.visited.contains(&7));
    }

    #[test]
    fn blx_target_is_walked_as_thumb() {
        // 0x0: blx 0x8 ; 0x4: bx lr ; 0x8: (thumb) bx lr
        let mut bytes = words(&[0xfa00_0000, 0xe12f_ff1e]);
        bytes.extend(0x4770u16.to_le_bytes());
        let mut img = image(0, bytes);
        let dec = Arch::Arm.decoder(&Options::default()).unwrap();
        let a = analyze_entries(dec.as_ref(), &mut img, &[0], 100);
        assert!(a.edges.contains(&Edge { from: 0, to: 9, kind: EdgeKind::Call }));
        assert!(a.visited.contains(&9));
        assert_eq!(a.widths.get(&9), Some(&2));
    }

    #[test]
    fn thumb_blx_pair_returns_to_arm() {
        // 0x0: (thumb) blx 0x8 ; 0x4: (thumb) bx lr ; 0x8: bx lr
        let mut bytes: Vec<u8> = [0xf000u16, 0xe802, 0x4770, 0x46c0].iter().flat_map(|h| h.to_le_bytes()).collect();
        bytes.extend(words(&[0xe12f_ff1e]));
        let mut img = image(0, bytes);
        let dec = Arch::Arm.decoder(&Options::default()).unwrap();
        let a = analyze_entries(dec.as_ref(), &mut img, &[1], 100);
        assert!(a.edges.contains(&Edge { from: 1, to: 8, kind: EdgeKind::Call }));
        assert!(a.edges.contains(&Edge { from: 1, to: 5, kind: EdgeKind::Fallthrough }));
        assert_eq!(a.widths.get(&8), Some(&4));
    }

    #[test]
    fn max_instr_bounds_the_walk() {
        let mut img = image(0, words(&[0xe1a0_0000; 8]));
        let dec = Arch::Arm.decoder(&Options::default()).unwrap();
        let a = analyze_entries(dec.as_ref(), &mut img, &[0], 3);
        assert_eq!(a.visited.len(), 3);
    }
}
