use std::collections::HashMap;
use std::fmt;

use crate::error::VistaError;

/// A controlled-vocabulary anatomy term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UberonTerm {
    pub id: &'static str,
    pub label: &'static str,
}

impl fmt::Display for UberonTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.label, self.id)
    }
}

/// Curated mapping from canonical VISTA tissue tokens to vocabulary terms.
///
/// Built once at startup and passed by reference into the stages that need
/// it; read-only thereafter. The table is hand-maintained against the tissue
/// labels VISTA actually uses, so an unknown token is a hard error rather
/// than a silent fallback.
pub struct UberonMap {
    terms: HashMap<&'static str, UberonTerm>,
}

impl UberonMap {
    pub fn new() -> Self {
        let entries = [
            ("branchialarch", "UBERON:0002539", "pharyngeal arch"),
            ("tail", "UBERON:0002415", "tail"),
            // melanocytes are a cell type, so this one is a CL id
            ("melanocytes", "CL:0000148", "melanocyte"),
            ("neuraltube", "UBERON:0001049", "neural tube"),
            ("heart", "UBERON:0000948", "heart"),
            ("limb", "UBERON:0002101", "limb"),
            ("dorsalrootganglion", "UBERON:0000044", "dorsal root ganglion"),
            ("cranialnerve", "UBERON:0001785", "cranial nerve"),
            ("trigeminalV_ganglion,cranial", "UBERON:0001675", "trigeminal ganglion"),
            ("liver", "UBERON:0002107", "liver"),
            ("somite", "UBERON:0002329", "somite"),
            ("nose", "UBERON:0000004", "nose"),
            ("facialmesenchyme", "UBERON:0009891", "facial mesenchyme"),
            ("ear", "UBERON:0001690", "ear"),
            ("hindbrain_rhombencephalon", "UBERON:0007277", "presumptive hindbrain"),
            ("pancreas", "UBERON:0001264", "pancreas"),
            ("forebrain", "UBERON:0001890", "forebrain"),
            ("bloodvessels", "UBERON:0001981", "blood vessel"),
            ("eye", "UBERON:0000970", "eye"),
            ("genitaltubercle", "UBERON:0011757", "differentiated genital tubercle"),
            ("midbrain_mesencephalon", "UBERON:0009616", "presumptive midbrain"),
            // catch-all; coarse, but still marks a developmental structure
            ("other", "UBERON:0001062", "anatomical entity"),
        ];
        let terms = entries
            .into_iter()
            .map(|(token, id, label)| (token, UberonTerm { id, label }))
            .collect();
        UberonMap { terms }
    }

    /// Resolve a canonical tissue token. A miss means the curated table is
    /// stale relative to the VISTA data and must be extended.
    pub fn resolve(&self, token: &str) -> Result<UberonTerm, VistaError> {
        self.terms
            .get(token)
            .copied()
            .ok_or_else(|| VistaError::UnmappedTissue(token.to_string()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for UberonMap {
    fn default() -> Self {
        UberonMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_token() {
        let map = UberonMap::new();
        let term = map.resolve("forebrain").unwrap();
        assert_eq!(term.id, "UBERON:0001890");
        assert_eq!(term.to_string(), "forebrain[UBERON:0001890]");
    }

    #[test]
    fn resolves_flattened_qualifier_token() {
        let map = UberonMap::new();
        let term = map.resolve("hindbrain_rhombencephalon").unwrap();
        assert_eq!(term.id, "UBERON:0007277");
    }

    #[test]
    fn unknown_token_is_a_hard_error() {
        let map = UberonMap::new();
        let err = map.resolve("gills").unwrap_err();
        assert!(matches!(err, VistaError::UnmappedTissue(_)));
    }

    #[test]
    fn covers_the_curated_vista_tokens() {
        let map = UberonMap::new();
        assert_eq!(map.len(), 22);
        for token in ["heart", "limb", "neuraltube", "other"] {
            assert!(map.resolve(token).is_ok());
        }
    }
}
