pub mod complaint_handler;

pub use complaint_handler::{append_history, file_complaint, list_complaints, track_complaint};
