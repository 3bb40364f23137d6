use pretty_assertions::assert_eq;
use tabledis::{Arch, Decoder, Endian, Flow, LinearMemory, NoSymbols, Options, RenderedInstruction};

fn mips(options: &str) -> Box<dyn Decoder> {
    Arch::Mips.decoder(&Options::parse(options).unwrap()).unwrap()
}

fn word_at(dec: &dyn Decoder, address: u64, word: u32) -> RenderedInstruction {
    let mut mem = LinearMemory::from_words(address, &[word], Endian::Little);
    dec.decode(address, &mut mem, &NoSymbols).unwrap()
}

fn half_at(dec: &dyn Decoder, address: u64, hw: &[u16]) -> RenderedInstruction {
    let mut mem = LinearMemory::from_halfwords(address & !1, hw, Endian::Little);
    dec.decode(address, &mut mem, &NoSymbols).unwrap()
}

#[test]
fn zero_word_is_nop() {
    let d = word_at(mips("").as_ref(), 0, 0);
    assert_eq!(d.text, "nop");
    assert_eq!(d.byte_length, 4);
}

#[test]
fn immediates_are_signed() {
    let dec = mips("");
    assert_eq!(word_at(dec.as_ref(), 0, 0x27bd_ffe0).text, "addiu\tsp,sp,-32");
    assert_eq!(word_at(mips("gpr-names=numeric").as_ref(), 0, 0x27bd_ffe0).text, "addiu\t$29,$29,-32");
}

#[test]
fn jump_stays_in_pc_region() {
    let d = word_at(mips("").as_ref(), 0x8000_1000, 0x0800_0004);
    assert_eq!(d.text, "j\t0x80000010");
    assert_eq!(d.target_address, Some(0x8000_0010));
    assert!(d.is_branch);
}

#[test]
fn jal_is_a_call() {
    let d = word_at(mips("").as_ref(), 0x40_0000, 0x0c10_0000);
    assert_eq!(d.text, "jal\t0x00400000");
    assert!(d.is_call);
}

#[test]
fn conditional_branch_from_delay_slot() {
    let d = word_at(mips("").as_ref(), 0x100, 0x1085_0003);
    assert_eq!(d.text, "beq\ta0,a1,0x00000110");
    assert_eq!(d.target_address, Some(0x110));
    assert!(d.flow.contains(Flow::CONDITIONAL));
}

#[test]
fn jr_ra_returns() {
    let d = word_at(mips("").as_ref(), 0, 0x03e0_0008);
    assert_eq!(d.text, "jr\tra");
    assert!(d.flow.contains(Flow::RETURN));
    assert_eq!(d.target_address, None);
}

#[test]
fn unknown_word_hits_catch_all() {
    assert_eq!(word_at(mips("").as_ref(), 0, 0xfc00_0000).text, "undefined instruction 0xfc000000");
}

#[test]
fn big_endian_words() {
    let dec = mips("big-endian");
    let mut mem = LinearMemory::new(0, vec![0x27, 0xbd, 0xff, 0xe0]);
    assert_eq!(dec.decode(0, &mut mem, &NoSymbols).unwrap().text, "addiu\tsp,sp,-32");
}

#[test]
fn mips16_by_address_bit() {
    let dec = mips("");
    let d = half_at(dec.as_ref(), 0x401, &[0x6500]);
    assert_eq!(d.text, "nop");
    assert_eq!(d.byte_length, 2);
    assert_eq!(half_at(dec.as_ref(), 0x401, &[0xe820]).text, "jr\tra");
    assert_eq!(half_at(dec.as_ref(), 0x401, &[0x63fc]).text, "addiu\tsp,-32");
}

#[test]
fn force_mips16() {
    let d = half_at(mips("force-mips16").as_ref(), 0x400, &[0x6500]);
    assert_eq!(d.text, "nop");
}

#[test]
fn mips16_branch_is_halfword_scaled() {
    let d = half_at(mips("").as_ref(), 0x1001, &[0x1002]);
    assert_eq!(d.text, "b\t0x00001006");
}

#[test]
fn mips16_jal_pair() {
    let dec = mips("");
    let d = half_at(dec.as_ref(), 0x1001, &[0x1800, 0x0004]);
    assert_eq!(d.text, "jal\t0x00000010");
    assert_eq!(d.byte_length, 4);
    assert!(d.is_call);
    assert!(!d.flow.contains(Flow::EXCHANGE));

    let d = half_at(dec.as_ref(), 0x1001, &[0x1c00, 0x0004]);
    assert_eq!(d.text, "jalx\t0x00000010");
    assert!(d.flow.contains(Flow::CALL | Flow::EXCHANGE));
}

#[test]
fn jalx_switches_to_mips16() {
    let d = word_at(mips("").as_ref(), 0, 0x7400_0004);
    assert_eq!(d.text, "jalx\t0x00000010");
    assert!(d.flow.contains(Flow::CALL | Flow::EXCHANGE));
    assert!(!word_at(mips("").as_ref(), 0, 0x0c00_0004).flow.contains(Flow::EXCHANGE));
}

#[test]
fn mips16_move_to_32_bit_register() {
    let dec = mips("gpr-names=numeric");
    // r32 low bits come from instruction bits 7-5, high bits from 4-3.
    assert_eq!(half_at(dec.as_ref(), 0x401, &[0x6520]).text, "move\t$1,$16");
    assert_eq!(half_at(dec.as_ref(), 0x401, &[0x6508]).text, "move\t$8,$16");
    assert_eq!(half_at(dec.as_ref(), 0x401, &[0x65f9]).text, "move\t$31,$17");
    assert_eq!(half_at(mips("").as_ref(), 0x401, &[0x65f9]).text, "move\tra,s1");
}
