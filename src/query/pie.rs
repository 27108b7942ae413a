use crate::data::filter::SiteSelection;
use crate::data::model::{LaunchDataset, Outcome};

use super::spec::{PieSlice, PieSpec};

// ---------------------------------------------------------------------------
// Success pie query
// ---------------------------------------------------------------------------

/// Success distribution pie for the current site selection.
///
/// Under `ALL` there is one slice per distinct site, sized by the summed
/// binary outcome class of that site (i.e. its success count). For a single
/// site the slices are the outcome groups observed for it, sized by row
/// count, failure group before success group.
pub fn success_pie(dataset: &LaunchDataset, selected_site: &str) -> PieSpec {
    match SiteSelection::from_value(selected_site) {
        SiteSelection::All => {
            let slices = dataset
                .sites
                .iter()
                .map(|site| {
                    let value: u32 = dataset
                        .records
                        .iter()
                        .filter(|rec| rec.site == *site)
                        .map(|rec| u32::from(rec.outcome.class()))
                        .sum();
                    PieSlice {
                        label: site.clone(),
                        value: f64::from(value),
                    }
                })
                .collect();
            PieSpec {
                title: "Total Select Launches By Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let mut counts = [0usize; 2];
            for rec in dataset.records.iter().filter(|rec| rec.site == site) {
                counts[rec.outcome.class() as usize] += 1;
            }
            let slices = [Outcome::Failure, Outcome::Success]
                .into_iter()
                .filter(|outcome| counts[outcome.class() as usize] > 0)
                .map(|outcome| PieSlice {
                    label: outcome.label().to_string(),
                    value: counts[outcome.class() as usize] as f64,
                })
                .collect();
            PieSpec {
                title: format!("Total Select Launches for Site {site}"),
                slices,
            }
        }
    }
}
