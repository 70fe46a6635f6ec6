pub mod csv;
pub mod dataset;

pub use csv::{parse_csv, CsvDataProvider, CsvParseError};
pub use dataset::{DataProvider, Dataset};
