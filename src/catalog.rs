use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context as _;

const LEGACY_LIST: &str = include_str!("../assets/symbols-core.txt");
const EXTENDED_LIST: &str = include_str!("../assets/symbols-extended.txt");

/// Ordered, immutable list of symbol names.
///
/// The bundled lists are parsed at most once per process ([`Catalog::legacy`],
/// [`Catalog::extended`], [`Catalog::full`]) and shared by reference across
/// picker instances. Duplicate names are allowed; order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    /// Splits newline-delimited text into symbol names, dropping blank lines.
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { names }
    }

    /// Loads a host-supplied symbol list from disk.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read symbol list {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Like [`Catalog::from_path`], but a missing or unreadable list degrades
    /// to an empty catalog instead of failing the caller. Symbol lists are
    /// cosmetic data; an empty picker is the worst acceptable outcome.
    pub fn from_path_or_empty(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                eprintln!("{err:#}; using an empty symbol list");
                Self::default()
            }
        }
    }

    /// The bundled legacy symbol set.
    pub fn legacy() -> &'static Self {
        static LEGACY: OnceLock<Catalog> = OnceLock::new();
        LEGACY.get_or_init(|| Self::parse(LEGACY_LIST))
    }

    /// The bundled extended symbol set (names added after the legacy list).
    pub fn extended() -> &'static Self {
        static EXTENDED: OnceLock<Catalog> = OnceLock::new();
        EXTENDED.get_or_init(|| Self::parse(EXTENDED_LIST))
    }

    /// Legacy and extended sets concatenated, in that order.
    pub fn full() -> &'static Self {
        static FULL: OnceLock<Catalog> = OnceLock::new();
        FULL.get_or_init(|| {
            let mut names = Self::legacy().names.clone();
            names.extend(Self::extended().names.iter().cloned());
            Self { names }
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The visible subset for a search query: every name containing the query
    /// case-insensitively, in catalog order. An empty query matches all.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return self.names.iter().map(String::as_str).collect();
        }
        let needle = query.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_drops_blank_lines_and_keeps_order() {
        let catalog = Catalog::parse("alpha\n\nbeta\n  \ngamma\nbeta\n");
        assert_eq!(catalog.names(), ["alpha", "beta", "gamma", "beta"]);
    }

    #[test]
    fn filter_is_case_insensitive_and_order_preserving() {
        let catalog = Catalog::parse("square.and.arrow.up\nstar\nstar.fill\n");
        assert_eq!(catalog.filter("star"), ["star", "star.fill"]);
        assert_eq!(catalog.filter("STAR"), ["star", "star.fill"]);
        assert_eq!(
            catalog.filter(""),
            ["square.and.arrow.up", "star", "star.fill"]
        );
    }

    #[test]
    fn filter_is_a_pure_function_of_catalog_and_query() {
        let catalog = Catalog::parse("star\nstar.fill\nmoon\n");
        assert_eq!(catalog.filter("ar"), catalog.filter("ar"));
    }

    #[test]
    fn missing_list_degrades_to_empty() {
        let path = PathBuf::from("/nonexistent/symbol-list.txt");
        assert!(Catalog::from_path(&path).is_err());
        assert!(Catalog::from_path_or_empty(&path).is_empty());
    }

    #[test]
    fn bundled_lists_are_memoized_and_nonempty() {
        assert!(std::ptr::eq(Catalog::legacy(), Catalog::legacy()));
        assert!(std::ptr::eq(Catalog::full(), Catalog::full()));
        assert!(!Catalog::legacy().is_empty());
        assert!(!Catalog::extended().is_empty());
        assert_eq!(
            Catalog::full().len(),
            Catalog::legacy().len() + Catalog::extended().len()
        );
    }

    #[test]
    fn bundled_legacy_list_contains_the_classics() {
        let names = Catalog::legacy().names();
        for expected in ["square.and.arrow.up", "star", "star.fill"] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }
}
