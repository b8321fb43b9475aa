//! The validated table of the eight trigrams.

use std::sync::OnceLock;

use thiserror::Error;

use hexcast_types::{LineTriple, Trigram};

use crate::data;

/// Catalog validation failures. All of these are fatal at startup: a catalog
/// that is not a bijection over the eight line configurations must never
/// accept casts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("expected exactly 8 trigrams, found {0}")]
    WrongCount(usize),
    #[error("duplicate line configuration {0}")]
    DuplicateTriple(LineTriple),
    #[error("no trigram covers line configuration {0}")]
    MissingTriple(LineTriple),
}

/// Read-only table of the eight trigrams, direct-indexed by the 3-bit key of
/// each line configuration.
///
/// Construction validates the bijection invariant; a built catalog can
/// therefore resolve every possible [`LineTriple`].
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Trigram>,
    by_key: [usize; LineTriple::COUNT],
}

impl Catalog {
    /// Validate and index a set of trigram records.
    ///
    /// Entry order is preserved and exposed through [`Catalog::entries`] for
    /// display purposes; lookup goes through the key index.
    pub fn new(entries: Vec<Trigram>) -> Result<Self, CatalogError> {
        if entries.len() != LineTriple::COUNT {
            return Err(CatalogError::WrongCount(entries.len()));
        }

        let mut slots: [Option<usize>; LineTriple::COUNT] = [None; LineTriple::COUNT];
        for (index, trigram) in entries.iter().enumerate() {
            let key = trigram.lines.key();
            if slots[key].is_some() {
                return Err(CatalogError::DuplicateTriple(trigram.lines));
            }
            slots[key] = Some(index);
        }

        let mut by_key = [0usize; LineTriple::COUNT];
        for key in 0..LineTriple::COUNT {
            let Some(triple) = LineTriple::from_key(key) else {
                continue;
            };
            match slots[key] {
                Some(index) => by_key[key] = index,
                None => return Err(CatalogError::MissingTriple(triple)),
            }
        }

        Ok(Self { entries, by_key })
    }

    /// The built-in catalog, validated once per process.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        static BUILTIN: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
        match BUILTIN.get_or_init(|| Catalog::new(data::builtin_trigrams())) {
            Ok(catalog) => Ok(catalog),
            Err(e) => Err(e.clone()),
        }
    }

    /// Resolve a line configuration to its trigram.
    ///
    /// Total for a validated catalog; callers treat `None` as an internal
    /// consistency failure, not as a normal miss.
    #[must_use]
    pub fn lookup(&self, triple: LineTriple) -> Option<&Trigram> {
        self.entries.get(self.by_key[triple.key()])
    }

    /// All trigrams in catalog (display) order.
    #[must_use]
    pub fn entries(&self) -> &[Trigram] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};
    use crate::data;
    use hexcast_types::LineTriple;

    #[test]
    fn builtin_catalog_validates() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.entries().len(), LineTriple::COUNT);
    }

    #[test]
    fn lookup_round_trips_every_configuration() {
        let catalog = Catalog::builtin().unwrap();
        for key in 0..LineTriple::COUNT {
            let triple = LineTriple::from_key(key).unwrap();
            let trigram = catalog.lookup(triple).unwrap();
            assert_eq!(trigram.lines, triple);
        }
    }

    #[test]
    fn every_trigram_is_reachable_by_its_own_triple() {
        let catalog = Catalog::builtin().unwrap();
        for trigram in catalog.entries() {
            let resolved = catalog.lookup(trigram.lines).unwrap();
            assert_eq!(resolved.id, trigram.id);
        }
    }

    #[test]
    fn rejects_wrong_entry_count() {
        let mut entries = data::builtin_trigrams();
        entries.pop();
        assert_eq!(
            Catalog::new(entries).unwrap_err(),
            CatalogError::WrongCount(7)
        );
    }

    #[test]
    fn rejects_duplicate_configuration() {
        let mut entries = data::builtin_trigrams();
        entries[1] = entries[0];
        let err = Catalog::new(entries).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTriple(_)));
    }

    #[test]
    fn display_order_matches_the_content_table() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<_> = catalog.entries().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            ["qian", "kun", "zhen", "xun", "kan", "li", "gen", "dui"]
        );
    }
}
