/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet   (wide: one row per country, one column per year)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + reshape → GdpDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ GdpDataset  │  long-form observations, year axis
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  country set + year range → chart series
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
