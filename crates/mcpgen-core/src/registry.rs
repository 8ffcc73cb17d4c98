use std::collections::HashSet;

/// Per-run name deduplicator for one namespace.
///
/// Tool identifiers, prompt identifiers, and each operation's parameter
/// names are separate namespaces, so each gets its own registry. Callers
/// must reserve in declaration order; the suffix a name receives depends on
/// what was reserved before it.
#[derive(Debug, Default)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `candidate`, or the first free `candidate_1`, `candidate_2`,
    /// … if it is already taken. Returns the reserved name.
    pub fn reserve(&mut self, candidate: &str) -> String {
        if self.used.insert(candidate.to_string()) {
            return candidate.to_string();
        }
        let mut n = 1usize;
        loop {
            let next = format!("{candidate}_{n}");
            if self.used.insert(next.clone()) {
                return next;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_reservation_is_unchanged() {
        let mut reg = NameRegistry::new();
        assert_eq!(reg.reserve("id"), "id");
    }

    #[test]
    fn collisions_get_numeric_suffixes() {
        let mut reg = NameRegistry::new();
        assert_eq!(reg.reserve("id"), "id");
        assert_eq!(reg.reserve("id"), "id_1");
        assert_eq!(reg.reserve("id"), "id_2");
    }

    #[test]
    fn suffix_skips_names_already_reserved() {
        let mut reg = NameRegistry::new();
        assert_eq!(reg.reserve("id_1"), "id_1");
        assert_eq!(reg.reserve("id"), "id");
        // id_1 is taken, so the collision jumps to id_2.
        assert_eq!(reg.reserve("id"), "id_2");
    }

    #[test]
    fn namespaces_are_independent() {
        let mut tools = NameRegistry::new();
        let mut params = NameRegistry::new();
        assert_eq!(tools.reserve("id"), "id");
        assert_eq!(params.reserve("id"), "id");
    }
}
