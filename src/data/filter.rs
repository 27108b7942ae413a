use super::model::{LaunchDataset, LaunchRecord};
use super::options::ALL_SITES_VALUE;

// ---------------------------------------------------------------------------
// Filter predicates: site selection and payload range
// ---------------------------------------------------------------------------

/// Site restriction as selected in the dropdown: either the `ALL` sentinel
/// or one concrete launch site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse the dropdown's value string. Anything other than the sentinel
    /// is treated as a site name, including names absent from the table
    /// (those simply match no rows).
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.site == *site,
        }
    }
}

/// Closed-interval payload test, inclusive on both ends. An inverted range
/// (`lo > hi`) matches nothing.
pub fn payload_in_range(record: &LaunchRecord, range: [f64; 2]) -> bool {
    range[0] <= record.payload_mass_kg && record.payload_mass_kg <= range[1]
}

/// Return indices of launches matching the site selection and, when given,
/// the payload range. Row order is preserved.
pub fn filtered_indices(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    payload_range: Option<[f64; 2]>,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .filter(|(_, rec)| payload_range.is_none_or(|range| payload_in_range(rec, range)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn dataset() -> LaunchDataset {
        let rec = |site: &str, payload: f64| LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: "FT".to_string(),
            outcome: Outcome::Success,
        };
        LaunchDataset::from_records(vec![
            rec("CCAFS LC-40", 500.0),
            rec("VAFB SLC-4E", 2000.0),
            rec("CCAFS LC-40", 2001.0),
            rec("KSC LC-39A", 9600.0),
        ])
        .unwrap()
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &SiteSelection::All, Some([500.0, 2000.0]));
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn site_restriction_composes_with_range() {
        let ds = dataset();
        let sel = SiteSelection::from_value("CCAFS LC-40");
        let idx = filtered_indices(&ds, &sel, Some([0.0, 10000.0]));
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &SiteSelection::All, Some([5000.0, 100.0]));
        assert!(idx.is_empty());
    }

    #[test]
    fn unknown_site_matches_nothing() {
        let ds = dataset();
        let sel = SiteSelection::from_value("Boca Chica");
        assert!(filtered_indices(&ds, &sel, None).is_empty());
    }

    #[test]
    fn sentinel_parses_to_all() {
        assert_eq!(SiteSelection::from_value("ALL"), SiteSelection::All);
    }
}
