use std::sync::Arc;

/// Read-only complaint category registry, injected from the municipal
/// content bundle. The same registry backs filing-time validation in the
/// complaint lifecycle service.
pub struct CategoryService {
    categories: Arc<Vec<String>>,
}

impl CategoryService {
    pub fn new(categories: Arc<Vec<String>>) -> Self {
        Self { categories }
    }

    pub fn list(&self) -> Vec<String> {
        self.categories.as_ref().clone()
    }
}
