use serde::Serialize;

/// A named mapping from register number to display name.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegisterScheme {
    pub id: &'static str,
    pub description: &'static str,
    pub names: &'static [&'static str],
}

impl RegisterScheme {
    pub fn name(&self, index: u32) -> &'static str {
        match self.names.get(index as usize) {
            Some(name) => name,
            None => panic!(
                "internal decoder error: register {index} outside scheme {} ({} names)",
                self.id,
                self.names.len()
            ),
        }
    }
}

pub fn find_scheme(schemes: &'static [RegisterScheme], id: &str) -> Option<&'static RegisterScheme> {
    schemes.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    static SCHEMES: &[RegisterScheme] = &[
        RegisterScheme { id: "raw", description: "numbers", names: &["r0", "r1"] },
        RegisterScheme { id: "abi", description: "calling convention", names: &["zero", "at"] },
    ];

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_scheme(SCHEMES, "abi").map(|s| s.name(1)), Some("at"));
        assert!(find_scheme(SCHEMES, "ABI").is_none());
    }

    #[test]
    #[should_panic(expected = "internal decoder error")]
    fn out_of_range_register_is_fatal() {
        SCHEMES[0].name(2);
    }
}
