use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::path::Path;

use tabledis::{Arch, Decoder, Options, RenderedInstruction, SymbolMap};
use tabledis_cli::{
    analyze_entries, block_edges, build_blocks, functions, load_raw_bin, Block, EdgeOut, FunctionOut, Image,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Table-driven disassembler for ARM/Thumb, MIPS/MIPS16 and Nios II", long_about=None)]
struct Cli {
    /// Instruction set of the input
    #[arg(long, value_enum, default_value_t = ArchArg::Arm)]
    arch: ArchArg,
    /// Disassembler options, comma separated (e.g. reg-names-raw,force-thumb). May repeat.
    #[arg(short = 'M', long = "disassembler-options", value_name = "OPTIONS")]
    options: Vec<String>,
    /// Load address for the binary in target address space
    #[arg(long, default_value = "0")]
    base: String,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path (not needed for `options`)
    #[arg(value_name = "BINFILE")]
    input: Option<String>,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArchArg { Arm, Mips, Nios2, Nios2r2 }

impl From<ArchArg> for Arch {
    fn from(a: ArchArg) -> Self {
        match a {
            ArchArg::Arm => Arch::Arm,
            ArchArg::Mips => Arch::Mips,
            ArchArg::Nios2 => Arch::Nios2,
            ArchArg::Nios2r2 => Arch::Nios2r2,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes. Set bit 0 of start for Thumb or MIPS16.
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Analyze code graph from entry points
    Analyze {
        /// Entry addresses (hex or dec). Repeat flag to add multiple entries.
        #[arg(long = "entry", value_name = "ADDR", num_args = 1.., required = false)]
        entries: Vec<String>,
        /// Maximum instructions to decode before stopping
        #[arg(long, default_value_t = 100_000usize)]
        max_instr: usize,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Emit a linear disassembly listing of analyzed code (text format only)
        #[arg(long)]
        listing: bool,
        /// Show instruction bytes in listing
        #[arg(long)]
        show_bytes: bool,
        /// Import labels from JSON (Vec<{ addr, name }>)
        #[arg(long, value_name = "FILE")]
        labels_in: Option<String>,
        /// Export labels to JSON (Vec<{ addr, name }>)
        #[arg(long, value_name = "FILE")]
        labels_out: Option<String>,
        /// Write analysis output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Print the -M options understood by --arch
    Options,
}

fn parse_u64(s: &str) -> Result<u64> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u64>()?)
    }
}

fn parse_options(words: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    for w in words {
        opts.apply_all(w)?;
    }
    Ok(opts)
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, Clone, serde::Serialize)]
struct BlockOut { start: u64, end: u64, insns: Vec<String> }

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LabelKV { addr: u64, name: String }

#[derive(Debug, Clone, serde::Serialize)]
struct ReportWithLabels {
    entries: Vec<u64>,
    blocks: Vec<BlockOut>,
    edges: Vec<EdgeOut>,
    functions: Vec<FunctionOut>,
    labels: Vec<LabelKV>,
}

fn render_line(img: &Image, d: &RenderedInstruction, show_bytes: bool) -> String {
    let mut s = format!("{:#010x}: ", d.address);
    if show_bytes {
        if let Some(bs) = img.bytes(d.address, usize::from(d.byte_length)) {
            for b in bs { let _ = write!(s, "{b:02x} "); }
        }
        s.push_str("  ");
    }
    s.push_str(&d.text);
    s
}

/// Linear sweep over `[start, end)`. Stops at the first unreadable address.
fn disassemble_range(
    dec: &dyn Decoder,
    img: &mut Image,
    labels: &SymbolMap,
    start: u64,
    end: u64,
) -> (Vec<RenderedInstruction>, Option<String>) {
    let mut pc = start;
    let mut out = Vec::new();
    while pc < end {
        match dec.decode(pc, img, labels) {
            Ok(d) => {
                pc = pc.wrapping_add(u64::from(d.byte_length));
                out.push(d);
            }
            Err(e) => {
                warn!(pc = format_args!("{pc:#x}"), error = %e, "range stopped");
                return (out, Some(format!("{pc:#010x}: <{e}>")));
            }
        }
    }
    (out, None)
}

fn write_out(out: Option<String>, text: String) -> Result<()> {
    match out {
        Some(path) => std::fs::write(&path, text).with_context(|| format!("writing {path}")),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn export_labels(path: &str, labels: &SymbolMap) -> Result<()> {
    let arr: Vec<LabelKV> = labels.iter().map(|(addr, name)| LabelKV { addr, name: name.to_string() }).collect();
    std::fs::write(path, serde_json::to_string_pretty(&arr)?).with_context(|| format!("writing {path}"))
}

fn import_labels(path: &str, labels: &mut SymbolMap) -> Result<()> {
    let txt = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let v: Vec<LabelKV> = serde_json::from_str(&txt).with_context(|| format!("parsing labels in {path}"))?;
    for kv in v { labels.insert(kv.addr, kv.name); }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let arch = Arch::from(cli.arch);

    if let Command::Options = cli.cmd {
        print!("{}", arch.describe_options());
        return Ok(());
    }

    let opts = parse_options(&cli.options)?;
    let dec = arch.decoder(&opts)?;
    let input = cli.input.context("missing input BINFILE")?;
    let base = parse_u64(&cli.base)?;
    let mut img = load_raw_bin(Path::new(&input), base, cli.skip, cli.len)?;
    info!(arch = dec.name(), input = %input, base = format_args!("{base:#x}"), "image loaded");

    match cli.cmd {
        Command::Options => {}
        Command::Sections => {
            println!("{:<10} {:<12} {:<12} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!("{:<10} {:#010x}   {:#010x}   {:<6} {:<6}", s.name, s.base, s.end(), s.perms, s.kind);
            }
        }
        Command::Range { start, end, show_bytes, format, out } => {
            let start = parse_u64(&start)?;
            let end = parse_u64(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");

            let (insns, stopped) = disassemble_range(dec.as_ref(), &mut img, &SymbolMap::new(), start, end);
            let text = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&insns)? + "\n",
                OutputFormat::Text => {
                    let mut buf = String::new();
                    for d in &insns { let _ = writeln!(buf, "{}", render_line(&img, d, show_bytes)); }
                    if let Some(stop) = stopped { let _ = writeln!(buf, "{stop}"); }
                    buf
                }
            };
            write_out(out, text)?;
        }
        Command::Analyze { entries, max_instr, format, listing, show_bytes, labels_in, labels_out, out } => {
            // default seed: start of first segment
            let mut seeds: Vec<u64> = if entries.is_empty() {
                img.segments.first().map(|s| s.base).into_iter().collect()
            } else {
                entries.iter().map(|e| parse_u64(e)).collect::<Result<_>>()?
            };
            seeds.sort_unstable();
            seeds.dedup();
            let analysis = analyze_entries(dec.as_ref(), &mut img, &seeds, max_instr);
            let (blocks, addr_to_block) = build_blocks(&analysis, &seeds);
            let edges_out = block_edges(&analysis, &addr_to_block);
            let funcs = functions(&seeds, &edges_out);
            debug!(insts = analysis.visited.len(), blocks = blocks.len(), "analysis done");

            // Prepare labels (imported or autogenerated)
            let mut labels = SymbolMap::new();
            if let Some(path) = &labels_in {
                import_labels(path, &mut labels)?;
            }
            for &e in &seeds { labels.insert_missing(e, || format!("sub_{e:08x}")); }
            for b in &blocks { labels.insert_missing(b.start, || format!("loc_{:08x}", b.start)); }
            if let Some(path) = &labels_out {
                export_labels(path, &labels)?;
            }

            match format {
                OutputFormat::Json => {
                    let report_blocks = enrich_blocks(dec.as_ref(), &mut img, &labels, &blocks, show_bytes);
                    let report = ReportWithLabels {
                        entries: seeds.clone(),
                        blocks: report_blocks,
                        edges: edges_out,
                        functions: funcs,
                        labels: labels.iter().map(|(addr, name)| LabelKV { addr, name: name.to_string() }).collect(),
                    };
                    write_out(out, serde_json::to_string_pretty(&report)? + "\n")?;
                }
                OutputFormat::Text => {
                    let mut buf = String::new();
                    let _ = writeln!(buf, "Analysis summary:");
                    let _ = writeln!(buf, "  entries   : {:?}", seeds.iter().map(|a| format!("{a:#010x}")).collect::<Vec<_>>());
                    let _ = writeln!(buf, "  insts     : {}", analysis.visited.len());
                    let _ = writeln!(buf, "  blocks    : {}", blocks.len());
                    let _ = writeln!(buf, "  edges     : {}", analysis.edges.len());
                    let _ = writeln!(buf, "  functions : {}", funcs.len());
                    let _ = writeln!(buf, "Edges:");
                    for e in &edges_out {
                        let _ = writeln!(buf, "  {:#010x} -> {:#010x} ({})", e.from, e.to, e.kind);
                    }
                    if listing {
                        let mut pcs: Vec<u64> = analysis.visited.iter().copied().collect();
                        pcs.sort_unstable();
                        let _ = writeln!(buf, "\nListing (analyzed PCs):");
                        for pc in pcs {
                            if let Some(lbl) = labels.get(pc) {
                                let _ = writeln!(buf, "{pc:#010x} <{lbl}>:");
                            }
                            match dec.decode(pc, &mut img, &labels) {
                                Ok(d) => { let _ = writeln!(buf, "  {}", render_line(&img, &d, show_bytes)); }
                                Err(e) => { let _ = writeln!(buf, "  {pc:#010x}: <{e}>"); }
                            }
                        }
                    }
                    write_out(out, buf)?;
                }
            }
        }
    }

    Ok(())
}

fn enrich_blocks(
    dec: &dyn Decoder,
    img: &mut Image,
    labels: &SymbolMap,
    blocks: &[Block],
    show_bytes: bool,
) -> Vec<BlockOut> {
    blocks
        .iter()
        .map(|b| {
            let (insns, _) = disassemble_range(dec, img, labels, b.start, b.end);
            let lines = insns.iter().map(|d| render_line(img, d, show_bytes)).collect();
            BlockOut { start: b.start, end: b.end, insns: lines }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabledis_cli::Segment;

    fn image(bytes: Vec<u8>) -> Image {
        Image { segments: vec![Segment { name: "s".into(), base: 0, bytes, perms: "r-x", kind: "raw" }] }
    }

    #[test]
    fn parse_u64_hex_and_dec() {
        assert_eq!(parse_u64("0x10").unwrap(), 0x10);
        assert_eq!(parse_u64("16").unwrap(), 16);
        assert!(parse_u64("zz").is_err());
    }

    #[test]
    fn repeated_m_flags_accumulate() {
        let o = parse_options(&["reg-names-raw".into(), "force-thumb".into()]).unwrap();
        assert_eq!(o.reg_names.as_deref(), Some("raw"));
        assert!(o.force_compressed);
        assert!(parse_options(&["frobnicate".into()]).is_err());
    }

    #[test]
    fn range_disasm_decodes_simple() {
        let mut img = image(0xe1a0_0000u32.to_le_bytes().to_vec());
        let dec = Arch::Arm.decoder(&Options::default()).unwrap();
        let (insns, stopped) = disassemble_range(dec.as_ref(), &mut img, &SymbolMap::new(), 0, 4);
        assert!(stopped.is_none());
        assert_eq!(render_line(&img, &insns[0], false), "0x00000000: nop\t\t\t(mov r0,r0)");
        assert_eq!(render_line(&img, &insns[0], true), "0x00000000: 00 00 a0 e1   nop\t\t\t(mov r0,r0)");
    }

    #[test]
    fn range_stops_at_end_of_image() {
        let mut img = image(vec![0, 0, 0xa0, 0xe1, 0x00, 0x00]);
        let dec = Arch::Arm.decoder(&Options::default()).unwrap();
        let (insns, stopped) = disassemble_range(dec.as_ref(), &mut img, &SymbolMap::new(), 0, 8);
        assert_eq!(insns.len(), 1);
        assert!(stopped.unwrap().starts_with("0x00000004: <"));
    }

    #[test]
    fn labels_round_trip_through_json() {
        let path = std::env::temp_dir().join(format!("tabledis_labels_{}.json", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        let mut labels = SymbolMap::new();
        labels.insert(0x100, "main");
        export_labels(&path, &labels).unwrap();
        let mut back = SymbolMap::new();
        import_labels(&path, &mut back).unwrap();
        assert_eq!(back.get(0x100), Some("main"));
        let _ = std::fs::remove_file(&path);
    }
}
