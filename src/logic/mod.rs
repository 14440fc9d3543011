pub mod catalog;
pub mod delivery;
pub mod orders;

pub use catalog::*;
pub use delivery::*;
pub use orders::*;
