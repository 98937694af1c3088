pub mod check;
mod context;
pub mod init;
pub mod locales;
pub mod scaffold;
pub mod write;

pub use context::CommandContext;
