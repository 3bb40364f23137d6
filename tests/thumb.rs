use pretty_assertions::assert_eq;
use tabledis::{Arch, DecodeError, Decoder, Endian, Flow, LinearMemory, MemoryError, NoSymbols, Options};

fn thumb(options: &str) -> Box<dyn Decoder> {
    Arch::Arm.decoder(&Options::parse(options).unwrap()).unwrap()
}

fn halves(base: u64, hw: &[u16]) -> LinearMemory {
    LinearMemory::from_halfwords(base, hw, Endian::Little)
}

#[test]
fn odd_address_selects_thumb() {
    let dec = thumb("reg-names-raw");
    let d = dec.decode(0x8001, &mut halves(0x8000, &[0x4700]), &NoSymbols).unwrap();
    assert_eq!(d.text, "bx\tr0");
    assert_eq!(d.address, 0x8000);
    assert_eq!(d.byte_length, 2);
    assert!(d.is_branch);
}

#[test]
fn force_thumb_ignores_address_bit() {
    let dec = thumb("force-thumb");
    let d = dec.decode(0x8000, &mut halves(0x8000, &[0x46c0]), &NoSymbols).unwrap();
    assert_eq!(d.text, "nop\t\t\t(mov r8, r8)");
    assert_eq!(d.byte_length, 2);
}

#[test]
fn high_register_bx() {
    let d = thumb("").decode(1, &mut halves(0, &[0x4770]), &NoSymbols).unwrap();
    assert_eq!(d.text, "bx\tlr");
}

#[test]
fn conditional_branch_target_is_pc_plus_four() {
    let d = thumb("").decode(0x101, &mut halves(0x100, &[0xd001]), &NoSymbols).unwrap();
    assert_eq!(d.text, "beq\t0x00000106");
    assert_eq!(d.target_address, Some(0x106));
    assert!(d.flow.contains(Flow::CONDITIONAL));
}

#[test]
fn push_and_pop_lists() {
    let dec = thumb("");
    let d = dec.decode(1, &mut halves(0, &[0xb510]), &NoSymbols).unwrap();
    assert_eq!(d.text, "push\t{r4, lr}");
    let d = dec.decode(1, &mut halves(0, &[0xbd10]), &NoSymbols).unwrap();
    assert_eq!(d.text, "pop\t{r4, pc}");
    assert!(d.flow.contains(Flow::RETURN));
}

#[test]
fn unmatched_halfword_hits_catch_all() {
    let d = thumb("").decode(1, &mut halves(0, &[0xb100]), &NoSymbols).unwrap();
    assert_eq!(d.text, "undefined instruction 0xb100");
    assert_eq!(d.byte_length, 2);
}

#[test]
fn bl_pair_is_one_call() {
    let dec = thumb("");
    let d = dec.decode(0x8001, &mut halves(0x8000, &[0xf000, 0xf802]), &NoSymbols).unwrap();
    assert_eq!(d.text, "bl\t0x00008008");
    assert_eq!(d.byte_length, 4);
    assert_eq!(d.word, 0xf802_f000);
    assert!(d.is_call);
    assert_eq!(d.target_address, Some(0x8008));
    assert!(!d.flow.contains(Flow::EXCHANGE));
}

#[test]
fn blx_pair_aligns_target() {
    let dec = thumb("");
    let d = dec.decode(0x8003, &mut halves(0x8002, &[0xf000, 0xe802]), &NoSymbols).unwrap();
    assert_eq!(d.text, "blx\t0x00008008");
    assert_eq!(d.target_address, Some(0x8008));
    assert!(d.flow.contains(Flow::CALL | Flow::EXCHANGE));
}

#[test]
fn bl_backwards() {
    // Displacement -2 halfwords from pc+4.
    let dec = thumb("");
    let d = dec.decode(0x8001, &mut halves(0x8000, &[0xf7ff, 0xfffe]), &NoSymbols).unwrap();
    assert_eq!(d.target_address, Some(0x8000));
}

#[test]
fn bl_prefix_without_second_half_is_a_memory_error() {
    let dec = thumb("");
    let err = dec.decode(0x8001, &mut halves(0x8000, &[0xf000]), &NoSymbols).unwrap_err();
    assert_eq!(err, DecodeError::Memory(MemoryError::Unmapped { address: 0x8002 }));
    assert_eq!(err.address(), 0x8002);
}

#[test]
fn literal_pool_load_uses_aligned_pc() {
    // pc reads as 0x6, aligned down to 0x4, plus 1 word.
    let d = thumb("").decode(0x3, &mut halves(0x2, &[0x4801]), &NoSymbols).unwrap();
    assert_eq!(d.text, "ldr\tr0, [pc, #4]\t(0x00000008)");
    assert!(!d.is_branch);
}
