//! Deriving the links of an advisory from its file name

use url::Url;

/// Base of the human facing advisory pages.
pub const DEFAULT_DISPLAY_BASE: &str = "https://www.cloudvulndb.org/";
/// Base of the raw advisory documents in the origin repository.
pub const DEFAULT_SOURCE_BASE: &str =
    "https://raw.githubusercontent.com/wiz-sec/open-cvdb/main/vulnerabilities/";
/// The suffix removed from a file name to get the name of the advisory page.
pub const ADVISORY_SUFFIX: &str = ".yaml";

/// The base URLs links are derived from.
///
/// Both are treated as directories: a missing trailing slash gets added, and the file name is
/// appended as it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Links {
    display_base: Url,
    source_base: Url,
}

impl Default for Links {
    fn default() -> Self {
        Self::new(
            Url::parse(DEFAULT_DISPLAY_BASE).expect("default display base is known to parse"),
            Url::parse(DEFAULT_SOURCE_BASE).expect("default source base is known to parse"),
        )
    }
}

impl Links {
    pub fn new(display_base: Url, source_base: Url) -> Self {
        Self {
            display_base: as_directory(display_base),
            source_base: as_directory(source_base),
        }
    }

    /// The advisory page for a file name, e.g. `https://www.cloudvulndb.org/chaosdb` for
    /// `chaosdb.yaml`.
    pub fn display_url(&self, file_name: &str) -> String {
        format!("{}{}", self.display_base, display_name(file_name))
    }

    /// The raw document for a file name.
    pub fn source_url(&self, file_name: &str) -> String {
        format!("{}{file_name}", self.source_base)
    }
}

/// Strip a single trailing [`ADVISORY_SUFFIX`]. Other extensions are kept.
pub fn display_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(ADVISORY_SUFFIX)
        .unwrap_or(file_name)
}

fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_links() {
        let links = Links::default();

        assert_eq!(
            links.display_url("chaosdb.yaml"),
            "https://www.cloudvulndb.org/chaosdb"
        );
        assert_eq!(
            links.source_url("chaosdb.yaml"),
            "https://raw.githubusercontent.com/wiz-sec/open-cvdb/main/vulnerabilities/chaosdb.yaml"
        );
    }

    #[test]
    fn strip_only_trailing_suffix() {
        assert_eq!(display_name("omigod.yaml"), "omigod");
        assert_eq!(display_name("omigod.yml"), "omigod.yml");
        assert_eq!(display_name("omigod.yaml.bak"), "omigod.yaml.bak");
        assert_eq!(display_name("omigod.yaml.yaml"), "omigod.yaml");
        assert_eq!(display_name("README"), "README");
    }

    #[test]
    fn suffix_round_trip() {
        for name in ["a.yaml", "with-dashes.yaml", "x.y.yaml"] {
            assert_eq!(format!("{}{ADVISORY_SUFFIX}", display_name(name)), name);
        }
    }

    #[test]
    fn other_extension_kept_in_display_url() {
        let links = Links::default();
        assert_eq!(
            links.display_url("notes.txt"),
            "https://www.cloudvulndb.org/notes.txt"
        );
        assert_eq!(
            links.source_url("notes.txt"),
            format!("{DEFAULT_SOURCE_BASE}notes.txt")
        );
    }

    #[test]
    fn base_without_trailing_slash() {
        let links = Links::new(
            Url::parse("https://example.com/advisories").unwrap(),
            Url::parse("https://example.com/raw/main/vulnerabilities").unwrap(),
        );

        assert_eq!(links.display_url("a.yaml"), "https://example.com/advisories/a");
        assert_eq!(
            links.source_url("a.yaml"),
            "https://example.com/raw/main/vulnerabilities/a.yaml"
        );
    }
}
