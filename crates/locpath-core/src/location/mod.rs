//! Location records: the parsed, decoded form of a URL.

mod decode;
mod extract;
mod record;

pub use decode::decode_component;
pub use extract::{base_part, dir_part, ext_part};
pub use record::LocationRecord;
