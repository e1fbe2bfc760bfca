//! Row scanner that locates label/value pairs describing a VLAN
//!
//! A definition occupies four consecutive cells of one row:
//! `<id label> <id> <description label> <description>`. Labels are compared
//! trimmed and case-insensitively; both values must be non-blank.

use crate::config::ScanConfig;
use crate::record::VlanRecord;
use regex::Regex;
use std::sync::OnceLock;

const WINDOW: usize = 4;

/// Collapse every run of non-word characters into one hyphen, then lower-case.
///
/// Leading and trailing runs are kept, so `"(mgmt)"` becomes `"-mgmt-"`.
pub fn slugify(s: &str) -> String {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    let non_word = NON_WORD.get_or_init(|| Regex::new(r"\W+").unwrap());
    non_word.replace_all(s, "-").to_lowercase()
}

/// Scans rows for VLAN definitions
#[derive(Debug, Clone)]
pub struct RowScanner {
    id_label: String,
    description_label: String,
    with_slug: bool,
}

impl RowScanner {
    pub fn new(config: &ScanConfig, with_slug: bool) -> Self {
        Self {
            id_label: config.id_label.trim().to_lowercase(),
            description_label: config.description_label.trim().to_lowercase(),
            with_slug,
        }
    }

    /// Return every definition in `row`, in column order.
    ///
    /// Windows may overlap; the cursor always advances by one cell.
    pub fn scan_row<S: AsRef<str>>(&self, row: &[S]) -> Vec<VlanRecord> {
        if row.len() < WINDOW {
            return Vec::new();
        }

        row.windows(WINDOW)
            .filter(|window| self.is_definition(window))
            .map(|window| {
                VlanRecord::new(window[1].as_ref(), window[3].as_ref(), self.with_slug)
            })
            .collect()
    }

    fn is_definition<S: AsRef<str>>(&self, window: &[S]) -> bool {
        is_label(window[0].as_ref(), &self.id_label)
            && is_value(window[1].as_ref())
            && is_label(window[2].as_ref(), &self.description_label)
            && is_value(window[3].as_ref())
    }
}

impl Default for RowScanner {
    fn default() -> Self {
        Self::new(&ScanConfig::default(), true)
    }
}

// `label` is already trimmed and lower-cased
fn is_label(cell: &str, label: &str) -> bool {
    cell.trim().to_lowercase() == label
}

fn is_value(cell: &str) -> bool {
    !cell.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_single_definition() {
        let scanner = RowScanner::default();
        let records = scanner.scan_row(&row(&["VLAN", "10", "Description", "Guest Network"]));

        assert_eq!(
            records,
            vec![VlanRecord {
                id: "10".to_string(),
                name: "Guest Network".to_string(),
                slug: Some("guest-network".to_string()),
            }]
        );
    }

    #[test]
    fn test_short_rows_yield_nothing() {
        let scanner = RowScanner::default();
        assert!(scanner.scan_row::<&str>(&[]).is_empty());
        assert!(scanner.scan_row(&["vlan"]).is_empty());
        assert!(scanner.scan_row(&["vlan", "10", "description"]).is_empty());
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let scanner = RowScanner::default();
        assert!(scanner.scan_row(&["vlan", "", "description", "x"]).is_empty());
        assert!(scanner.scan_row(&["vlan", "   ", "description", "x"]).is_empty());
    }

    #[test]
    fn test_empty_description_rejected() {
        let scanner = RowScanner::default();
        assert!(scanner.scan_row(&["vlan", "10", "description", " "]).is_empty());
    }

    #[test]
    fn test_labels_trimmed_and_case_insensitive() {
        let scanner = RowScanner::default();
        let records = scanner.scan_row(&["  Vlan ", "30", " DESCRIPTION\t", "Servers"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "30");
        assert_eq!(records[0].name, "Servers");
    }

    #[test]
    fn test_values_are_kept_raw() {
        let scanner = RowScanner::default();
        let records = scanner.scan_row(&["vlan", " 40 ", "description", " Lab "]);
        assert_eq!(records[0].id, " 40 ");
        assert_eq!(records[0].name, " Lab ");
    }

    #[test]
    fn test_mispaired_label_skipped() {
        let scanner = RowScanner::default();
        assert!(scanner.scan_row(&["vlan", "10", "name", "Guest"]).is_empty());
    }

    #[test]
    fn test_multiple_definitions_in_order() {
        let scanner = RowScanner::default();
        let records = scanner.scan_row(&[
            "Site A",
            "vlan",
            "10",
            "description",
            "Users",
            "",
            "vlan",
            "20",
            "description",
            "Printers",
        ]);

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "20"]);
    }

    #[test]
    fn test_overlapping_windows() {
        // The description value doubles as the next window's id label.
        let scanner = RowScanner::default();
        let records =
            scanner.scan_row(&["vlan", "10", "description", "vlan", "description", "x"]);

        assert_eq!(records.len(), 2);
        assert_eq!((records[0].id.as_str(), records[0].name.as_str()), ("10", "vlan"));
        assert_eq!(
            (records[1].id.as_str(), records[1].name.as_str()),
            ("description", "x")
        );
    }

    #[test]
    fn test_without_slug() {
        let scanner = RowScanner::new(&ScanConfig::default(), false);
        let records = scanner.scan_row(&["vlan", "10", "description", "Guest"]);
        assert_eq!(records[0].slug, None);
    }

    #[test]
    fn test_custom_labels() {
        let config = ScanConfig {
            id_label: "VLAN ID".to_string(),
            description_label: "Name".to_string(),
        };
        let scanner = RowScanner::new(&config, true);

        assert_eq!(scanner.scan_row(&["vlan id", "5", "name", "Mgmt"]).len(), 1);
        assert!(scanner.scan_row(&["vlan", "5", "description", "Mgmt"]).is_empty());
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Guest  Wi-Fi!!"), "guest-wi-fi-");
        assert_eq!(slugify("Guest Network"), "guest-network");
        assert_eq!(slugify("core_uplink"), "core_uplink");
    }

    #[test]
    fn test_slugify_keeps_edge_hyphens() {
        assert_eq!(slugify("(mgmt)"), "-mgmt-");
        assert_eq!(slugify("  DMZ"), "-dmz");
    }

    #[test]
    fn test_slugify_is_stable_on_slugs() {
        for input in ["Guest Network", "VoIP / Phones", "lab-42", "Ünïcode Näme"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {input}");
        }
    }
}
