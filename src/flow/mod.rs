pub mod conversion;
pub mod definition;
pub mod input;

pub use conversion::*;
pub use definition::*;
pub use input::*;
