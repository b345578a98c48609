pub mod report;

pub use report::{ComparisonRow, ContactFacts, ScanReport};
