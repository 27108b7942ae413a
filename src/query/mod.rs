/// Query layer: the two filter-and-aggregate queries behind the charts.
///
/// Both handlers are pure functions of the immutable dataset and the
/// current selection; they hold no state and perform no I/O, so calling
/// them twice with the same arguments yields equal `ChartSpec` values.
pub mod pie;
pub mod scatter;
pub mod spec;
