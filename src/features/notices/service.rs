use std::sync::Arc;

use crate::features::notices::model::Notice;

/// Read-only public notice board, injected from the municipal content
/// bundle. Notices are served newest first.
pub struct NoticeService {
    notices: Arc<Vec<Notice>>,
}

impl NoticeService {
    pub fn new(notices: Arc<Vec<Notice>>) -> Self {
        Self { notices }
    }

    /// List notices, optionally restricted to one category.
    pub fn list(&self, category: Option<&str>) -> Vec<Notice> {
        let mut notices: Vec<Notice> = self
            .notices
            .iter()
            .filter(|n| match category {
                Some(c) if c != "all" => n.category == c,
                _ => true,
            })
            .cloned()
            .collect();
        notices.sort_by(|a, b| b.date.cmp(&a.date));
        notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::MunicipalContent;

    fn service() -> NoticeService {
        NoticeService::new(Arc::new(MunicipalContent::default_content().notices))
    }

    #[test]
    fn test_list_all_newest_first() {
        let notices = service().list(None);
        assert_eq!(notices.len(), 3);
        for pair in notices.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_list_filters_by_category() {
        let tenders = service().list(Some("tender"));
        assert_eq!(tenders.len(), 1);
        assert!(tenders[0].title.contains("Tender"));
    }

    #[test]
    fn test_all_keyword_returns_everything() {
        assert_eq!(service().list(Some("all")).len(), 3);
    }
}
