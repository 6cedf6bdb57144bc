/// Data model for dirtally scans.
///
/// Re-exports the visited-entry record, the keyed counter used by every
/// aggregate, and size/count formatting helpers.
pub mod counter;
pub mod entry;
pub mod size;

pub use counter::{CountRow, Counter};
pub use entry::{EntryKind, FileEntry, NO_EXTENSION, ROOT_KEY};
