pub mod db;
pub mod server;

pub use db::*;
pub use server::*;

/// Read a variable through `lookup`, treating empty or whitespace-only values as absent.
pub(crate) fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
