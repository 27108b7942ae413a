/// Data layer: core types, loading, filtering, and dropdown options.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site index, payload extremes
///   └──────────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  filter   │          │ options  │
///   │ site+range│          │ dropdown │
///   └──────────┘          └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
