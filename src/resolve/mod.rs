mod substitution;
mod variant;

pub use substitution::*;
pub use variant::*;
