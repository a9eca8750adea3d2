/// Treeline CLI — terminal frontend.
///
/// This crate contains all terminal I/O. Business logic lives in
/// `treeline-core`.
pub mod cli;
pub mod run;

pub use run::run;
