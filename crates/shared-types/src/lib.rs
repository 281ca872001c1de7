pub mod country;
pub mod error;
pub mod feature_flags;

pub use country::*;
pub use error::*;
pub use feature_flags::*;
