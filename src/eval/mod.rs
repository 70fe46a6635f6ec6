pub mod accuracy;

pub use accuracy::{accuracy, true_class};
