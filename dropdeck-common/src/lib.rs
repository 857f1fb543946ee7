//! dropdeck-common - pure data types and list logic for dropdeck
//!
//! No I/O and no UI dependencies. The UI crates render this state;
//! nothing in here touches the filesystem or the network.

mod byte_size;
mod file_entry;
mod share_list;

pub use byte_size::format_file_size;
pub use file_entry::{FileCategory, SharedFile};
pub use share_list::ShareList;
