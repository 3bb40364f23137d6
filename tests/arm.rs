use pretty_assertions::assert_eq;
use tabledis::{Arch, Decoder, Endian, Flow, LinearMemory, NoSymbols, Options, RenderedInstruction, SymbolMap};

fn arm(options: &str) -> Box<dyn Decoder> {
    Arch::Arm.decoder(&Options::parse(options).unwrap()).unwrap()
}

fn decode_at(dec: &dyn Decoder, address: u64, word: u32) -> RenderedInstruction {
    let mut mem = LinearMemory::from_words(address, &[word], Endian::Little);
    dec.decode(address, &mut mem, &NoSymbols).unwrap()
}

#[test]
fn nop_alias_wins_over_mov() {
    let d = decode_at(arm("").as_ref(), 0, 0xe1a0_0000);
    assert_eq!(d.text, "nop\t\t\t(mov r0,r0)");
    assert_eq!(d.byte_length, 4);
    assert!(!d.is_branch);
    assert_eq!(d.target_address, None);
}

#[test]
fn data_processing_immediate_and_register() {
    let dec = arm("");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe3a0_0001).text, "mov\tr0, #1\t; 0x1");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe1a0_0001).text, "mov\tr0, r1");
}

#[test]
fn register_scheme_changes_names() {
    assert_eq!(decode_at(arm("reg-names-apcs").as_ref(), 0, 0xe1a0_0001).text, "mov\ta1, a2");
    assert_eq!(decode_at(arm("reg-names-raw").as_ref(), 0, 0xe12f_ff1e).text, "bx\tr14");
    assert_eq!(decode_at(arm("").as_ref(), 0, 0xe12f_ff1e).text, "bx\tlr");
}

#[test]
fn branch_target_is_pc_plus_eight() {
    let d = decode_at(arm("").as_ref(), 0x8000, 0xea00_0000);
    assert_eq!(d.text, "b\t0x00008008");
    assert!(d.is_branch);
    assert!(!d.is_call);
    assert_eq!(d.target_address, Some(0x8008));
    assert!(!d.flow.contains(Flow::CONDITIONAL));
}

#[test]
fn branch_with_link_is_a_call() {
    let d = decode_at(arm("").as_ref(), 0, 0xeb00_0010);
    assert_eq!(d.text, "bl\t0x00000048");
    assert!(d.is_call);
    assert_eq!(d.target_address, Some(0x48));
}

#[test]
fn conditional_branch_is_marked() {
    let d = decode_at(arm("").as_ref(), 0, 0x1a00_0000);
    assert_eq!(d.text, "bne\t0x00000008");
    assert!(d.flow.contains(Flow::BRANCH | Flow::CONDITIONAL));
}

#[test]
fn load_multiple_with_pc_returns() {
    let d = decode_at(arm("").as_ref(), 0, 0xe8bd_8010);
    assert_eq!(d.text, "ldmia\tsp!, {r4, pc}");
    assert!(d.flow.contains(Flow::RETURN));
}

#[test]
fn swi_number_is_hex() {
    assert_eq!(decode_at(arm("").as_ref(), 0, 0xef00_0010).text, "swi\t0x00000010");
}

#[test]
fn resolver_annotates_targets() {
    let dec = arm("");
    let mut mem = LinearMemory::from_words(0x8000, &[0xea00_0000], Endian::Little);
    let mut labels = SymbolMap::new();
    labels.insert(0x8000, "main");
    let d = dec.decode(0x8000, &mut mem, &labels).unwrap();
    assert_eq!(d.text, "b\t0x00008008 <main+0x8>");
}

#[test]
fn big_endian_fetch() {
    let dec = arm("big-endian");
    let mut mem = LinearMemory::from_words(0, &[0xe1a0_0000], Endian::Big);
    assert_eq!(dec.decode(0, &mut mem, &NoSymbols).unwrap().text, "nop\t\t\t(mov r0,r0)");
}

#[test]
fn decoding_is_deterministic() {
    let dec = arm("");
    let a = decode_at(dec.as_ref(), 0x100, 0xeb00_0010);
    let b = decode_at(dec.as_ref(), 0x100, 0xeb00_0010);
    assert_eq!(a, b);
}

#[test]
fn shifted_register_operands() {
    let dec = arm("");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe1a0_0101).text, "mov\tr0, r1, lsl #2");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe1a0_0311).text, "mov\tr0, r1, lsl r3");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe1a0_0061).text, "mov\tr0, r1, rrx");
    // A zero amount for lsr and asr encodes a shift by 32.
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe1a0_0021).text, "mov\tr0, r1, lsr #32");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe1a0_0041).text, "mov\tr0, r1, asr #32");
}

#[test]
fn pc_relative_load_notes_the_address() {
    let d = decode_at(arm("").as_ref(), 0, 0xe59f_0004);
    assert_eq!(d.text, "ldr\tr0, [pc, #4]\t; 0x0000000c");
    assert!(!d.is_branch);
    assert_eq!(d.target_address, None);
}

#[test]
fn load_store_indexing_forms() {
    let dec = arm("");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe5b1_0004).text, "ldr\tr0, [r1, #4]!");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe491_0004).text, "ldr\tr0, [r1], #4");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe511_0004).text, "ldr\tr0, [r1, -#4]");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe791_0102).text, "ldr\tr0, [r1, r2, lsl #2]");
}

#[test]
fn halfword_addressing() {
    let dec = arm("");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe1d1_00b2).text, "ldrh\tr0, [r1, #2]");
    assert_eq!(decode_at(dec.as_ref(), 0, 0xe191_00b2).text, "ldrh\tr0, [r1, r2]");
}

#[test]
fn writes_to_pc_transfer_control() {
    let dec = arm("");
    let d = decode_at(dec.as_ref(), 0, 0xe1a0_f00e);
    assert_eq!(d.text, "mov\tpc, lr");
    assert!(d.flow.contains(Flow::RETURN));

    let d = decode_at(dec.as_ref(), 0, 0xe08f_f100);
    assert_eq!(d.text, "add\tpc, pc, r0, lsl #2");
    assert!(d.flow.contains(Flow::BRANCH));
    assert_eq!(d.target_address, None);

    let d = decode_at(dec.as_ref(), 0, 0xe49d_f004);
    assert_eq!(d.text, "ldr\tpc, [sp], #4");
    assert!(d.flow.contains(Flow::RETURN));

    assert!(decode_at(dec.as_ref(), 0, 0xe590_f004).flow.contains(Flow::BRANCH));
    assert!(!decode_at(dec.as_ref(), 0, 0xe15f_f00e).is_branch);
    assert!(!decode_at(dec.as_ref(), 0, 0xe58f_f004).is_branch);
}

#[test]
fn blx_immediate_switches_to_thumb() {
    let d = decode_at(arm("").as_ref(), 0, 0xfb00_0000);
    assert_eq!(d.text, "blx\t0x0000000a");
    assert!(d.flow.contains(Flow::CALL | Flow::EXCHANGE));
    assert!(!decode_at(arm("").as_ref(), 0, 0xeb00_0010).flow.contains(Flow::EXCHANGE));
}
