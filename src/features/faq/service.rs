use std::sync::Arc;

use crate::features::faq::model::FaqEntry;

/// Read-only FAQ list, injected from the municipal content bundle.
pub struct FaqService {
    faqs: Arc<Vec<FaqEntry>>,
}

impl FaqService {
    pub fn new(faqs: Arc<Vec<FaqEntry>>) -> Self {
        Self { faqs }
    }

    pub fn list(&self) -> Vec<FaqEntry> {
        self.faqs.as_ref().clone()
    }
}
