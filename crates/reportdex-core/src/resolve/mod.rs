pub mod months;
pub mod name;
pub mod period;

pub use name::{resolve_name, ResolvedName};
pub use period::resolve_period;
