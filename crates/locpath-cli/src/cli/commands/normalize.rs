//! `locpath normalize <path>`.

use locpath_core::path;

pub fn run_normalize(input: &str) {
    println!("{}", path::normalize(input));
}
