pub(crate) mod apply;
pub(crate) mod config;
pub(crate) mod effect;
pub(crate) mod kill;
pub(crate) mod lsp;
pub(crate) mod navigate;
pub(crate) mod session;
pub(crate) mod surface;

pub mod lsp_types {
    pub use lsp_types::*;
}

pub use marknav_core;

pub use apply::*;
pub use config::*;
pub use effect::*;
pub use kill::*;
pub use lsp::*;
pub use navigate::*;
pub use session::*;
pub use surface::*;
