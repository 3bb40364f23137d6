use pretty_assertions::assert_eq;
use tabledis::format::{self, FormatToken, Syntax};
use tabledis::isa::{arm::Arm, mips::Mips, nios2::Nios2};
use tabledis::{
    Arch, ConfigError, DecodeError, Decoder, Disassembler, Endian, Isa, LinearMemory, MemoryError, NoSymbols,
    Options, Table,
};

fn all_tables() -> Vec<&'static Table> {
    let mut v: Vec<&'static Table> = Vec::new();
    v.extend(Arm.tables());
    v.extend(Mips.tables());
    v.extend(Nios2::R1.tables());
    v.extend(Nios2::R2.tables());
    v
}

#[test]
fn every_table_is_well_formed() {
    for t in all_tables() {
        assert_eq!(t.verify(), Ok(()), "table {}", t.name);
    }
}

fn lex_all<I: Isa>(isa: &I) -> usize {
    let mut n = 0;
    for t in isa.tables() {
        for e in t.entries {
            n += format::tokens::<I::Directive>(e.spec).count();
        }
    }
    n
}

#[test]
fn every_format_spec_lexes() {
    assert!(lex_all(&Arm) > 0);
    assert!(lex_all(&Mips) > 0);
    assert!(lex_all(&Nios2::R1) > 0);
    assert!(lex_all(&Nios2::R2) > 0);
}

#[test]
fn lexer_splits_directives() {
    use tabledis::isa::arm::ArmDirective;
    let toks: Vec<_> = format::tokens::<ArmDirective>("ldr%22'b\t%12-15r, %a").collect();
    assert_eq!(toks.len(), 6);
    assert!(matches!(toks[0], FormatToken::Text("ldr")));
    assert!(matches!(toks[1], FormatToken::IfSet { bit: 22, ch: 'b' }));
    assert!(matches!(toks[3], FormatToken::Field { .. }));
    assert!(matches!(toks[5], FormatToken::Directive(ArmDirective::Address)));
    assert!(ArmDirective::bare('?').is_none());
}

#[test]
#[should_panic(expected = "internal decoder error")]
fn unknown_directive_is_an_internal_error() {
    use tabledis::isa::mips::MipsDirective;
    let _ = format::tokens::<MipsDirective>("add\t%0-4Q").count();
}

#[test]
fn every_arch_builds_with_defaults() {
    for arch in Arch::ALL {
        let dec = arch.decoder(&Options::default()).unwrap();
        assert!(!dec.name().is_empty());
        assert!(arch.describe_options().contains("reg-names-"));
    }
}

#[test]
fn unknown_scheme_is_rejected() {
    let opts = Options { reg_names: Some("bogus".into()), ..Options::default() };
    match Arch::Mips.decoder(&opts) {
        Err(ConfigError::UnknownScheme { arch, scheme, available }) => {
            assert_eq!(arch, "mips");
            assert_eq!(scheme, "bogus");
            assert_eq!(available, "numeric, 32, n32, 64");
        }
        Err(other) => panic!("unexpected error {other}"),
        Ok(_) => panic!("bogus scheme accepted"),
    }
}

#[test]
fn force_compressed_needs_a_compressed_set() {
    let opts = Options::parse("force-compressed").unwrap();
    assert!(matches!(
        Disassembler::new(Nios2::R1, &opts),
        Err(ConfigError::Unsupported { option: "force-compressed", .. })
    ));
    assert!(Disassembler::new(Arm, &opts).is_ok());
}

#[test]
fn option_help_lists_defaults() {
    let help = Arch::Arm.describe_options();
    assert!(help.contains("reg-names-std"));
    assert!(help.contains("(default)"));
    assert!(help.contains("force-thumb"));
    assert!(!Arch::Nios2r2.describe_options().contains("big-endian"));
}

#[test]
fn unreadable_address_is_an_error_not_a_panic() {
    let dec = Arch::Arm.decoder(&Options::default()).unwrap();
    let mut mem = LinearMemory::from_words(0x1000, &[0xe1a0_0000], Endian::Little);
    let err = dec.decode(0x2000, &mut mem, &NoSymbols).unwrap_err();
    assert_eq!(err, DecodeError::Memory(MemoryError::Unmapped { address: 0x2000 }));
}

#[test]
fn rendered_instruction_serializes() {
    let dec = Arch::Arm.decoder(&Options::default()).unwrap();
    let mut mem = LinearMemory::from_words(0, &[0xea00_0000], Endian::Little);
    let d = dec.decode(0, &mut mem, &NoSymbols).unwrap();
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["text"], "b\t0x00000008");
    assert_eq!(json["target_address"], 8);
    assert_eq!(json["byte_length"], 4);
}

#[test]
fn decoders_are_shareable_across_threads() {
    let dec: std::sync::Arc<dyn Decoder> = std::sync::Arc::from(Arch::Mips.decoder(&Options::default()).unwrap());
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let dec = dec.clone();
            std::thread::spawn(move || {
                let mut mem = LinearMemory::from_words(0, &[0x27bd_ffe0], Endian::Little);
                (i, dec.decode(0, &mut mem, &NoSymbols).unwrap().text)
            })
        })
        .collect();
    for h in handles {
        let (_, text) = h.join().unwrap();
        assert_eq!(text, "addiu\tsp,sp,-32");
    }
}
