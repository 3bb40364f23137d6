use pretty_assertions::assert_eq;
use tabledis::{Arch, ConfigError, Decoder, Endian, Flow, LinearMemory, NoSymbols, Options, RenderedInstruction};

fn r1() -> Box<dyn Decoder> {
    Arch::Nios2.decoder(&Options::default()).unwrap()
}

fn r2() -> Box<dyn Decoder> {
    Arch::Nios2r2.decoder(&Options::default()).unwrap()
}

fn word_at(dec: &dyn Decoder, address: u64, word: u32) -> RenderedInstruction {
    let mut mem = LinearMemory::from_words(address, &[word], Endian::Little);
    dec.decode(address, &mut mem, &NoSymbols).unwrap()
}

fn halves_at(dec: &dyn Decoder, address: u64, hw: &[u16]) -> RenderedInstruction {
    let mut mem = LinearMemory::from_halfwords(address, hw, Endian::Little);
    dec.decode(address, &mut mem, &NoSymbols).unwrap()
}

#[test]
fn r1_aliases_and_returns() {
    let dec = r1();
    assert_eq!(word_at(dec.as_ref(), 0, 0x0001_883a).text, "nop");
    let d = word_at(dec.as_ref(), 0, 0xf800_283a);
    assert_eq!(d.text, "ret");
    assert!(d.flow.contains(Flow::RETURN));
}

#[test]
fn r1_call_uses_region_of_instruction() {
    let d = word_at(r1().as_ref(), 0x1000_0000, 0x0000_4000);
    assert_eq!(d.text, "call\t0x10000400");
    assert!(d.is_call);
    assert_eq!(d.target_address, Some(0x1000_0400));
}

#[test]
fn r1_branch_is_byte_offset_from_next() {
    let d = word_at(r1().as_ref(), 0x100, 0x0000_0206);
    assert_eq!(d.text, "br\t0x0000010c");
    assert_eq!(d.target_address, Some(0x10c));
}

#[test]
fn r1_operands() {
    let dec = r1();
    assert_eq!(word_at(dec.as_ref(), 0, 0x18bf_ffc4).text, "addi\tr2,r3,-1");
    assert_eq!(word_at(dec.as_ref(), 0, 0x0009_313a).text, "rdctl\tr4,ipending");
}

#[test]
fn r1_shadow_register_moves() {
    let dec = r1();
    assert_eq!(word_at(dec.as_ref(), 0, 0x1808_a03a).text, "wrprs\tr4,r3");
    assert_eq!(word_at(dec.as_ref(), 0, 0x18bf_ff38).text, "rdprs\tr2,r3,-4");
}

#[test]
fn r1_unassigned_opcode_shows_word() {
    let d = word_at(r1().as_ref(), 0, 0x0000_003f);
    assert_eq!(d.text, "undefined instruction 0x0000003f");
    assert_eq!(d.byte_length, 4);
}

#[test]
fn r2_mixes_widths() {
    let dec = r2();
    let d = word_at(dec.as_ref(), 0, 0xc400_0020);
    assert_eq!(d.text, "nop");
    assert_eq!(d.byte_length, 4);

    let d = halves_at(dec.as_ref(), 0, &[0x003b, 0x0000]);
    assert_eq!(d.text, "nop.n");
    assert_eq!(d.byte_length, 2);

    let d = halves_at(dec.as_ref(), 0, &[0xe009, 0x0000]);
    assert_eq!(d.text, "ret.n");
    assert!(d.flow.contains(Flow::RETURN));
}

#[test]
fn r2_short_fetch_at_end_of_memory() {
    let dec = r2();
    let d = halves_at(dec.as_ref(), 0, &[0x003b]);
    assert_eq!(d.text, "nop.n");
    assert_eq!(d.byte_length, 2);

    // A 32-bit opcode with only two bytes left is not decoded as one.
    let d = halves_at(dec.as_ref(), 0, &[0x0020]);
    assert_eq!(d.text, "undefined instruction 0x0020");
    assert_eq!(d.byte_length, 2);
}

#[test]
fn r2_compact_operands() {
    let dec = r2();
    let d = halves_at(dec.as_ref(), 0x100, &[0x0103, 0x0000]);
    assert_eq!(d.text, "br.n\t0x0000010a");
    let d = halves_at(dec.as_ref(), 0, &[0x87c9, 0x0000]);
    assert_eq!(d.text, "callr.n\tra");
    assert!(d.is_call);
    assert_eq!(halves_at(dec.as_ref(), 0, &[0xfe9b, 0x0000]).text, "movi.n\tr2,-1");
}

#[test]
fn r2_twelve_bit_offsets() {
    let dec = r2();
    assert_eq!(word_at(dec.as_ref(), 0, 0x0ffc_10e8).text, "ldbio\tr2,-4(r3)");
    assert_eq!(word_at(dec.as_ref(), 0, 0x7008_10e8).text, "rdprs\tr2,r3,8");
    assert_eq!(word_at(dec.as_ref(), 0, 0x3ffc_10e8).text, "flushd\t-4(r3)");
}

#[test]
fn r2_masks_and_interrupt_enable() {
    let dec = r2();
    assert_eq!(word_at(dec.as_ref(), 0, 0x00ff_10df).text, "andci\tr2,r3,255");
    assert_eq!(word_at(dec.as_ref(), 0, 0x00ff_10ff).text, "andchi\tr2,r3,255");
    assert_eq!(word_at(dec.as_ref(), 0, 0x2020_0020).text, "eni\t1");
}

#[test]
fn r2_unassigned_opcodes_keep_their_width() {
    let dec = r2();
    let d = halves_at(dec.as_ref(), 0, &[0x0039, 0x0000]);
    assert_eq!(d.text, "undefined instruction 0x0039");
    assert_eq!(d.byte_length, 2);
    let d = word_at(dec.as_ref(), 0, 0x0000_0010);
    assert_eq!(d.text, "undefined instruction 0x00000010");
    assert_eq!(d.byte_length, 4);
}

#[test]
fn r2_rejects_big_endian() {
    let err = Arch::Nios2r2.decoder(&Options::parse("big-endian").unwrap()).err();
    assert_eq!(err, Some(ConfigError::Unsupported { arch: "nios2r2", option: "big-endian" }));
    assert!(Arch::Nios2.decoder(&Options::parse("big-endian").unwrap()).is_ok());
}

#[test]
fn numeric_register_names() {
    let dec = Arch::Nios2.decoder(&Options::parse("reg-names-numeric").unwrap()).unwrap();
    assert_eq!(word_at(dec.as_ref(), 0, 0x18bf_ffc4).text, "addi\tr2,r3,-1");
    assert_eq!(word_at(dec.as_ref(), 0, 0xf83e_e83a).text, "callr\tr31");
}
