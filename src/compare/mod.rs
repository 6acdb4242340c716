pub mod invoker;
pub mod types;

pub use invoker::Comparator;
pub use types::{ComparisonOutcome, GateError, GateResult, ImagePair};
