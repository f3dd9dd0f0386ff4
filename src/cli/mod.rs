mod flags;
mod parse;
pub mod prompts;
pub mod quiet;
mod run;

pub use flags::CliFlags;
pub use parse::parse;
pub use run::run;
