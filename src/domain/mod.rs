pub mod checksum;
pub mod entry;
pub mod error;
pub mod journal;
pub mod transfer;

pub use entry::DiaryEntry;
pub use journal::Journal;
