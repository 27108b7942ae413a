use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Dropdown options derived from the dataset
// ---------------------------------------------------------------------------

/// Sentinel dropdown value meaning "no site restriction".
pub const ALL_SITES_VALUE: &str = "ALL";
/// Display label for the sentinel entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// One selectable entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Build the dropdown options: the "All Sites" sentinel first, then one
/// `{label = value = site}` entry per distinct launch site in first-seen
/// order. The ordering is part of the contract, not an accident.
pub fn site_options(dataset: &LaunchDataset) -> Vec<SiteOption> {
    let mut options = Vec::with_capacity(dataset.sites.len() + 1);
    options.push(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    });
    for site in &dataset.sites {
        options.push(SiteOption {
            label: site.clone(),
            value: site.clone(),
        });
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset(sites: &[&str]) -> LaunchDataset {
        let records = sites
            .iter()
            .map(|site| LaunchRecord {
                site: site.to_string(),
                payload_mass_kg: 1000.0,
                booster_category: "FT".to_string(),
                outcome: Outcome::Success,
            })
            .collect();
        LaunchDataset::from_records(records).unwrap()
    }

    #[test]
    fn sentinel_comes_first_then_sites_in_encounter_order() {
        let ds = dataset(&["VAFB SLC-4E", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        let options = site_options(&ds);

        let pairs: Vec<(&str, &str)> = options
            .iter()
            .map(|o| (o.label.as_str(), o.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("All Sites", "ALL"),
                ("VAFB SLC-4E", "VAFB SLC-4E"),
                ("CCAFS LC-40", "CCAFS LC-40"),
                ("KSC LC-39A", "KSC LC-39A"),
            ]
        );
    }

    #[test]
    fn length_is_distinct_sites_plus_sentinel() {
        let ds = dataset(&["A", "B", "A", "C", "B"]);
        assert_eq!(site_options(&ds).len(), 4);
    }

    #[test]
    fn output_is_identical_across_calls() {
        let ds = dataset(&["B", "A"]);
        assert_eq!(site_options(&ds), site_options(&ds));
    }
}
