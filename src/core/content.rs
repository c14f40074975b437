use serde::Deserialize;

use crate::features::directory::model::{Department, Ward};
use crate::features::faq::model::FaqEntry;
use crate::features::notices::model::Notice;
use crate::features::taxes::model::TaxItem;

/// Read-only municipal content served by the display features: the complaint
/// category registry, department and ward directories, public notices, FAQs
/// and the tax catalog.
///
/// Loaded once at startup and injected into the per-feature services; there
/// is no process-wide mutable state. A JSON file named by `CONTENT_FILE`
/// replaces the embedded defaults wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct MunicipalContent {
    pub categories: Vec<String>,
    pub departments: Vec<Department>,
    pub wards: Vec<Ward>,
    pub notices: Vec<Notice>,
    pub faqs: Vec<FaqEntry>,
    pub taxes: Vec<TaxItem>,
}

impl MunicipalContent {
    pub fn load(path: Option<&str>) -> Result<Self, String> {
        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .map_err(|e| format!("Failed to read content file '{}': {}", p, e))?;
                serde_json::from_str(&raw)
                    .map_err(|e| format!("Failed to parse content file '{}': {}", p, e))
            }
            None => Ok(Self::default_content()),
        }
    }

    /// Embedded defaults mirroring the municipality's published directory.
    pub fn default_content() -> Self {
        Self {
            categories: vec![
                "Garbage & Sanitation".to_string(),
                "Streetlight Not Working".to_string(),
                "Water Leakage / No Water".to_string(),
                "Road Potholes".to_string(),
                "Stray Animals".to_string(),
                "Illegal Construction".to_string(),
                "Other".to_string(),
            ],
            departments: vec![
                Department {
                    name: "Sanitation Department".to_string(),
                    description:
                        "Responsible for city cleanliness, garbage collection, and waste management."
                            .to_string(),
                    head: "Dr. Rajesh Kumar".to_string(),
                    contact: "0542-2501234".to_string(),
                    email: "sanitation@varanasi.gov.in".to_string(),
                    address: "Sanitation Office, Sigra, Varanasi".to_string(),
                },
                Department {
                    name: "Water Works Department".to_string(),
                    description:
                        "Manages water supply, pipeline maintenance, and water bill collections."
                            .to_string(),
                    head: "Eng. Priya Sharma".to_string(),
                    contact: "0542-2501456".to_string(),
                    email: "waterworks@varanasi.gov.in".to_string(),
                    address: "Water Works Office, Cantonment, Varanasi".to_string(),
                },
                Department {
                    name: "Public Works Department (PWD)".to_string(),
                    description:
                        "Handles the construction and maintenance of roads, bridges, and public buildings."
                            .to_string(),
                    head: "Eng. Suresh Gupta".to_string(),
                    contact: "0542-2501789".to_string(),
                    email: "pwd@varanasi.gov.in".to_string(),
                    address: "PWD Office, Civil Lines, Varanasi".to_string(),
                },
                Department {
                    name: "Health Department".to_string(),
                    description:
                        "Oversees public health initiatives, disease control, and food safety regulations."
                            .to_string(),
                    head: "Dr. Meera Singh".to_string(),
                    contact: "0542-2501012".to_string(),
                    email: "health@varanasi.gov.in".to_string(),
                    address: "Health Office, Mahmoorganj, Varanasi".to_string(),
                },
            ],
            wards: vec![
                Ward {
                    ward_no: "10".to_string(),
                    corporator: "Smt. Anita Singh".to_string(),
                    mobile: "9876543210".to_string(),
                    recent_work: vec![
                        "New streetlights installed on main road.".to_string(),
                        "Repaired major water pipeline leakage.".to_string(),
                    ],
                },
                Ward {
                    ward_no: "22".to_string(),
                    corporator: "Shri. Ramesh Gupta".to_string(),
                    mobile: "9871234567".to_string(),
                    recent_work: vec![
                        "Road resurfacing project completed.".to_string(),
                        "Conducted sanitation drive.".to_string(),
                    ],
                },
            ],
            notices: vec![
                Notice {
                    id: 1,
                    title: "Notice regarding property tax deadline extension".to_string(),
                    date: "2025-07-20".to_string(),
                    category: "announcement".to_string(),
                    file: Some("/downloads/notice1.pdf".to_string()),
                },
                Notice {
                    id: 2,
                    title: "Tender invitation for sanitation equipment supply".to_string(),
                    date: "2025-07-18".to_string(),
                    category: "tender".to_string(),
                    file: Some("/downloads/tender1.pdf".to_string()),
                },
                Notice {
                    id: 3,
                    title: "Public announcement on monsoon preparedness drive".to_string(),
                    date: "2025-07-15".to_string(),
                    category: "announcement".to_string(),
                    file: Some("/downloads/announcement1.pdf".to_string()),
                },
            ],
            faqs: vec![
                FaqEntry {
                    question: "How do I file a complaint?".to_string(),
                    answer:
                        "You can file a complaint by filling out the form on our homepage. Please provide as much detail as possible, including the exact location and a photo if possible."
                            .to_string(),
                },
                FaqEntry {
                    question: "How long does it take to resolve a complaint?".to_string(),
                    answer:
                        "The resolution time varies depending on the complexity of the issue and the department involved. The average time is 5-7 working days. You will receive notifications on status changes."
                            .to_string(),
                },
                FaqEntry {
                    question: "Can I track my complaint?".to_string(),
                    answer:
                        "Yes, after submitting a complaint, you will receive a unique Tracking ID. You can use this ID in the \"Track Your Complaint\" section to see the latest updates and the complete history of actions taken."
                            .to_string(),
                },
                FaqEntry {
                    question: "Is my personal information safe?".to_string(),
                    answer:
                        "Absolutely. We adhere to strict data privacy policies. Your personal information is only used for communication regarding your complaint and is not shared with third parties."
                            .to_string(),
                },
            ],
            taxes: vec![
                TaxItem {
                    id: "property-tax".to_string(),
                    title: "Property Tax".to_string(),
                    description: "Annual tax on residential and commercial properties".to_string(),
                    base_rate: "₹12 per sq ft".to_string(),
                    due_date: "March 31st".to_string(),
                },
                TaxItem {
                    id: "water-tax".to_string(),
                    title: "Water Tax".to_string(),
                    description: "Monthly charges for water supply and sewerage".to_string(),
                    base_rate: "₹150 per month".to_string(),
                    due_date: "10th of every month".to_string(),
                },
                TaxItem {
                    id: "trade-license".to_string(),
                    title: "Trade License Fee".to_string(),
                    description: "Annual license fee for commercial establishments".to_string(),
                    base_rate: "₹500 - ₹5000".to_string(),
                    due_date: "April 30th".to_string(),
                },
                TaxItem {
                    id: "building-permit".to_string(),
                    title: "Building Permit Fee".to_string(),
                    description: "One-time fee for construction permits".to_string(),
                    base_rate: "₹50 per sq ft".to_string(),
                    due_date: "Before construction".to_string(),
                },
                TaxItem {
                    id: "garbage-tax".to_string(),
                    title: "Garbage Collection Tax".to_string(),
                    description: "Monthly fee for waste collection and disposal".to_string(),
                    base_rate: "₹100 per month".to_string(),
                    due_date: "5th of every month".to_string(),
                },
                TaxItem {
                    id: "parking-fee".to_string(),
                    title: "Parking Fee".to_string(),
                    description: "Monthly fee for designated parking spaces".to_string(),
                    base_rate: "₹300 per month".to_string(),
                    due_date: "1st of every month".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_populated() {
        let content = MunicipalContent::default_content();
        assert!(content.categories.contains(&"Road Potholes".to_string()));
        assert!(content.categories.contains(&"Garbage & Sanitation".to_string()));
        assert_eq!(content.departments.len(), 4);
        assert_eq!(content.wards.len(), 2);
        assert!(!content.notices.is_empty());
        assert!(!content.faqs.is_empty());
        assert!(!content.taxes.is_empty());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let content = MunicipalContent::load(None).unwrap();
        assert_eq!(content.categories.len(), 7);
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(MunicipalContent::load(Some("/nonexistent/content.json")).is_err());
    }
}
