pub mod advisory;
pub mod classifier;

pub use advisory::{AdvisoryTier, HealthAlert};
pub use classifier::{classify, AqiCategory, Classification};
