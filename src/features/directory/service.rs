use std::sync::Arc;

use crate::features::directory::model::{Department, Ward};

/// Read-only department and ward directory, injected from the municipal
/// content bundle.
pub struct DirectoryService {
    departments: Arc<Vec<Department>>,
    wards: Arc<Vec<Ward>>,
}

impl DirectoryService {
    pub fn new(departments: Arc<Vec<Department>>, wards: Arc<Vec<Ward>>) -> Self {
        Self { departments, wards }
    }

    pub fn list_departments(&self) -> Vec<Department> {
        self.departments.as_ref().clone()
    }

    pub fn find_ward(&self, ward_no: &str) -> Option<Ward> {
        let needle = ward_no.trim();
        self.wards.iter().find(|w| w.ward_no == needle).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::MunicipalContent;

    fn service() -> DirectoryService {
        let content = MunicipalContent::default_content();
        DirectoryService::new(Arc::new(content.departments), Arc::new(content.wards))
    }

    #[test]
    fn test_list_departments() {
        assert_eq!(service().list_departments().len(), 4);
    }

    #[test]
    fn test_find_ward_trims_input() {
        let ward = service().find_ward(" 10 ").unwrap();
        assert_eq!(ward.corporator, "Smt. Anita Singh");
    }

    #[test]
    fn test_find_unknown_ward_is_none() {
        assert!(service().find_ward("99").is_none());
    }
}
