pub mod categories;
pub mod complaints;
pub mod dashboard;
pub mod directory;
pub mod faq;
pub mod notices;
pub mod taxes;
