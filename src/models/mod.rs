pub mod leg;
pub mod option;

pub use leg::OptionLeg;
pub use option::{OptionKind, OptionParameters};
