//! Lexer for the per-entry format language.
//!
//! Text is copied through verbatim. `%` introduces a directive:
//!
//! * `%%` a literal percent sign
//! * `%L-M<op>` a bit field `[L..=M]` rendered by `op`
//! * `%B'c` / `` %B`c `` emit `c` when bit `B` is set / clear
//! * `%B?ab` emit `a` when bit `B` is set, otherwise `b`
//! * `%N<op>` an architecture directive parameterised by the number `N`
//! * `%<op>` a bare architecture directive
//!
//! Which letters mean what is decided by the architecture's [`Syntax`].

use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    pub lsb: u32,
    pub msb: u32,
}

impl BitRange {
    pub const fn new(lsb: u32, msb: u32) -> Self {
        Self { lsb, msb }
    }

    pub const fn bit(n: u32) -> Self {
        Self { lsb: n, msb: n }
    }

    pub const fn width(self) -> u32 {
        self.msb - self.lsb + 1
    }
}

/// How a bit field is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOp<D> {
    Decimal,
    /// `0x` and zero padded to the instruction width.
    Hex,
    /// Low nibble as a single hex digit.
    Nibble,
    Register,
    Signed,
    /// Unsigned value shifted left.
    Scaled(u32),
    /// Signed value shifted left, added to the PC, shown as an address.
    PcRelative(u32),
    Arch(D),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatToken<'s, D> {
    Text(&'s str),
    Field { range: BitRange, op: FieldOp<D> },
    IfSet { bit: u32, ch: char },
    IfClear { bit: u32, ch: char },
    Choose { bit: u32, set: char, clear: char },
    Numbered { n: u32, directive: D },
    Directive(D),
}

/// The directive letters of one architecture, as a closed enumeration.
pub trait Syntax: Copy + fmt::Debug + Sized {
    /// `%c`
    fn bare(c: char) -> Option<Self>;
    /// `%L-Mc`
    fn field(c: char) -> Option<FieldOp<Self>>;
    /// `%Nc`
    fn numbered(_c: char) -> Option<Self> {
        None
    }
}

#[cold]
#[track_caller]
pub(crate) fn corrupt(spec: &str, why: impl fmt::Display) -> ! {
    panic!("internal decoder error: {why} in format spec {spec:?}")
}

pub fn tokens<D: Syntax>(spec: &str) -> Tokens<'_, D> {
    Tokens { spec, pos: 0, _syntax: PhantomData }
}

pub struct Tokens<'s, D> {
    spec: &'s str,
    pos: usize,
    _syntax: PhantomData<D>,
}

impl<'s, D: Syntax> Tokens<'s, D> {
    fn peek(&self) -> Option<char> {
        self.spec[self.pos..].chars().next()
    }

    fn bump(&mut self) -> char {
        match self.peek() {
            Some(c) => {
                self.pos += c.len_utf8();
                c
            }
            None => corrupt(self.spec, "truncated directive"),
        }
    }

    fn number(&mut self) -> u32 {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        match self.spec[start..self.pos].parse() {
            Ok(n) => n,
            Err(_) => corrupt(self.spec, "missing bit number"),
        }
    }

    fn single_bit(&self, bit: u32) -> u32 {
        if bit >= 32 {
            corrupt(self.spec, format_args!("bit {bit}"));
        }
        bit
    }

    fn directive(&mut self) -> FormatToken<'s, D> {
        match self.peek() {
            Some('%') => {
                let start = self.pos;
                self.pos += 1;
                FormatToken::Text(&self.spec[start..self.pos])
            }
            Some(c) if c.is_ascii_digit() => {
                let n = self.number();
                match self.bump() {
                    '-' => {
                        let msb = self.number();
                        if msb < n || msb >= 32 {
                            corrupt(self.spec, format_args!("bit range {n}-{msb}"));
                        }
                        let op = self.bump();
                        match D::field(op) {
                            Some(op) => FormatToken::Field { range: BitRange::new(n, msb), op },
                            None => corrupt(self.spec, format_args!("unknown field op {op:?}")),
                        }
                    }
                    '\'' => FormatToken::IfSet { bit: self.single_bit(n), ch: self.bump() },
                    '`' => FormatToken::IfClear { bit: self.single_bit(n), ch: self.bump() },
                    '?' => {
                        let bit = self.single_bit(n);
                        let set = self.bump();
                        let clear = self.bump();
                        FormatToken::Choose { bit, set, clear }
                    }
                    op => match D::numbered(op) {
                        Some(directive) => FormatToken::Numbered { n, directive },
                        None => corrupt(self.spec, format_args!("unknown directive {n}{op:?}")),
                    },
                }
            }
            _ => {
                let op = self.bump();
                match D::bare(op) {
                    Some(d) => FormatToken::Directive(d),
                    None => corrupt(self.spec, format_args!("unknown directive {op:?}")),
                }
            }
        }
    }
}

impl<'s, D: Syntax> Iterator for Tokens<'s, D> {
    type Item = FormatToken<'s, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.spec[self.pos..];
        if rest.is_empty() {
            return None;
        }
        if let Some(after) = rest.strip_prefix('%') {
            self.pos += 1;
            if after.is_empty() {
                corrupt(self.spec, "trailing '%'");
            }
            return Some(self.directive());
        }
        let len = rest.find('%').unwrap_or(rest.len());
        self.pos += len;
        Some(FormatToken::Text(&rest[..len]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Toy {
        Cond,
        Label,
        Pair,
    }

    impl Syntax for Toy {
        fn bare(c: char) -> Option<Self> {
            (c == 'c').then_some(Toy::Cond)
        }
        fn field(c: char) -> Option<FieldOp<Self>> {
            match c {
                'r' => Some(FieldOp::Register),
                'd' => Some(FieldOp::Decimal),
                'l' => Some(FieldOp::Arch(Toy::Label)),
                _ => None,
            }
        }
        fn numbered(c: char) -> Option<Self> {
            (c == 'z').then_some(Toy::Pair)
        }
    }

    #[test]
    fn lexes_every_token_kind() {
        let toks: Vec<_> = tokens::<Toy>("ldr%c%22'b%7`x\t%12-15r, %%%3?ab%2z%0-3l").collect();
        assert_eq!(
            toks,
            vec![
                FormatToken::Text("ldr"),
                FormatToken::Directive(Toy::Cond),
                FormatToken::IfSet { bit: 22, ch: 'b' },
                FormatToken::IfClear { bit: 7, ch: 'x' },
                FormatToken::Text("\t"),
                FormatToken::Field { range: BitRange::new(12, 15), op: FieldOp::Register },
                FormatToken::Text(", "),
                FormatToken::Text("%"),
                FormatToken::Choose { bit: 3, set: 'a', clear: 'b' },
                FormatToken::Numbered { n: 2, directive: Toy::Pair },
                FormatToken::Field { range: BitRange::new(0, 3), op: FieldOp::Arch(Toy::Label) },
            ]
        );
    }

    #[test]
    fn plain_text_is_one_token() {
        let toks: Vec<_> = tokens::<Toy>("nop\t\t\t(mov r0,r0)").collect();
        assert_eq!(toks, vec![FormatToken::Text("nop\t\t\t(mov r0,r0)")]);
    }

    #[test]
    #[should_panic(expected = "internal decoder error")]
    fn unknown_directive_is_fatal() {
        tokens::<Toy>("add %q").for_each(drop);
    }

    #[test]
    #[should_panic(expected = "internal decoder error")]
    fn unknown_field_op_is_fatal() {
        tokens::<Toy>("%0-3w").for_each(drop);
    }

    #[test]
    #[should_panic(expected = "internal decoder error")]
    fn inverted_range_is_fatal() {
        tokens::<Toy>("%9-3d").for_each(drop);
    }

    #[test]
    #[should_panic(expected = "internal decoder error")]
    fn dangling_escape_is_fatal() {
        tokens::<Toy>("add %").for_each(drop);
    }
}
