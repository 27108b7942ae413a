use crate::data::filter::{SiteSelection, filtered_indices};
use crate::data::model::LaunchDataset;

use super::spec::{ScatterSeries, ScatterSpec};

// ---------------------------------------------------------------------------
// Payload / outcome scatter query
// ---------------------------------------------------------------------------

/// Payload-vs-outcome scatter for the current selection.
///
/// Rows are first restricted to the closed payload interval, then to the
/// selected site (unless `ALL`). Each remaining row becomes one point,
/// x = payload mass, y = outcome class; points are grouped into one series
/// per booster version category in first-seen order among the kept rows.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    selected_site: &str,
    payload_range: [f64; 2],
) -> ScatterSpec {
    let selection = SiteSelection::from_value(selected_site);
    let indices = filtered_indices(dataset, &selection, Some(payload_range));

    let mut series: Vec<ScatterSeries> = Vec::new();
    for &i in &indices {
        let rec = &dataset.records[i];
        let point = [rec.payload_mass_kg, f64::from(rec.outcome.class())];
        match series.iter_mut().find(|s| s.name == rec.booster_category) {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                name: rec.booster_category.clone(),
                points: vec![point],
            }),
        }
    }

    let title = match &selection {
        SiteSelection::All => "Correlation Between Payload and Success for all sites".to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation Between Payload and Success for Site {site}")
        }
    };

    ScatterSpec { title, series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn rec(site: &str, payload: f64, booster: &str, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            outcome,
        }
    }

    /// Ten rows, two of which fall inside [500, 2000].
    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("A", 100.0, "v1.0", Outcome::Failure),
            rec("A", 400.0, "v1.0", Outcome::Failure),
            rec("A", 500.0, "v1.1", Outcome::Success),
            rec("B", 2000.0, "FT", Outcome::Success),
            rec("B", 2100.0, "FT", Outcome::Success),
            rec("B", 3000.0, "FT", Outcome::Failure),
            rec("A", 4500.0, "B4", Outcome::Success),
            rec("B", 6000.0, "B4", Outcome::Success),
            rec("A", 8000.0, "B5", Outcome::Success),
            rec("B", 9600.0, "B5", Outcome::Failure),
        ])
        .unwrap()
    }

    #[test]
    fn band_filter_keeps_exactly_the_rows_inside() {
        let spec = payload_scatter(&dataset(), "ALL", [500.0, 2000.0]);

        assert_eq!(spec.point_count(), 2);
        for series in &spec.series {
            for point in &series.points {
                assert!((500.0..=2000.0).contains(&point[0]));
            }
        }
        assert_eq!(
            spec.title,
            "Correlation Between Payload and Success for all sites"
        );
    }

    #[test]
    fn site_selection_restricts_points_to_that_site() {
        let ds = dataset();
        let spec = payload_scatter(&ds, "B", [0.0, 10000.0]);

        assert_eq!(spec.point_count(), 5);
        assert_eq!(spec.title, "Correlation Between Payload and Success for Site B");
        // Every point corresponds to a row of site B.
        for series in &spec.series {
            for point in &series.points {
                assert!(ds
                    .records
                    .iter()
                    .any(|r| r.site == "B" && r.payload_mass_kg == point[0]));
            }
        }
    }

    #[test]
    fn series_group_by_booster_category_in_first_seen_order() {
        let spec = payload_scatter(&dataset(), "ALL", [0.0, 10000.0]);
        let names: Vec<&str> = spec.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "v1.1", "FT", "B4", "B5"]);
        assert_eq!(spec.point_count(), 10);
    }

    #[test]
    fn outcome_class_is_the_y_value() {
        let spec = payload_scatter(&dataset(), "ALL", [100.0, 100.0]);
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].points, vec![[100.0, 0.0]]);
    }

    #[test]
    fn empty_selection_yields_empty_chart() {
        let ds = dataset();
        assert_eq!(payload_scatter(&ds, "ALL", [9999.0, 9999.5]).point_count(), 0);
        // Inverted range.
        assert_eq!(payload_scatter(&ds, "ALL", [2000.0, 500.0]).point_count(), 0);
        // Unknown site.
        assert_eq!(payload_scatter(&ds, "Boca Chica", [0.0, 10000.0]).point_count(), 0);
    }

    #[test]
    fn identical_arguments_yield_identical_specs() {
        let ds = dataset();
        assert_eq!(
            payload_scatter(&ds, "A", [500.0, 8000.0]),
            payload_scatter(&ds, "A", [500.0, 8000.0])
        );
    }
}
