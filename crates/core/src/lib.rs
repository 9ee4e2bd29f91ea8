pub(crate) mod filter;
pub(crate) mod location;
pub(crate) mod marker;
pub(crate) mod pattern;
pub(crate) mod selector;
pub(crate) mod severity;

pub use filter::*;
pub use location::*;
pub use marker::*;
pub use pattern::*;
pub use selector::*;
pub use severity::*;
