//! CLI domain: parse, route and output only.
//! Generation itself lives in [`crate::generator`].

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use route::RunContext;
