// ---------------------------------------------------------------------------
// Chart specifications – what a query produces, what the renderer consumes
// ---------------------------------------------------------------------------

/// Output of a query handler. Purely descriptive; the UI layer decides how
/// to draw it.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Pie(PieSpec),
    Scatter(ScatterSpec),
}

/// A pie chart: titled, with zero or more slices.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

impl PieSpec {
    /// Sum of all slice magnitudes.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// A scatter chart: one series per color group, points as `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl ScatterSpec {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
