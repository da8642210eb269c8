pub mod dashboard;

pub use dashboard::{CardOutOfRange, ResultsBoard};
