pub mod complaint;

pub use complaint::{Complaint, ComplaintStatus, HistoryEntry, ResolvedLocation};
