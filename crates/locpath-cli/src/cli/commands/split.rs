//! `locpath split <path>` – one segment per line.

use locpath_core::path;

pub fn run_split(input: &str) {
    for segment in path::split(input) {
        println!("{segment}");
    }
}
