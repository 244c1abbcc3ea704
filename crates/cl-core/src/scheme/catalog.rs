//! Built-in scheme catalog.

use std::sync::OnceLock;

use chrono::NaiveDate;

use super::model::{RequirementTag, Scheme, SchemeCategory};

static CATALOG: OnceLock<Vec<Scheme>> = OnceLock::new();

/// The five programmes the portal ships with, in display order.
pub fn default_catalog() -> &'static [Scheme] {
    CATALOG.get_or_init(build_catalog)
}

fn tags(values: &[&str]) -> Vec<RequirementTag> {
    values.iter().copied().map(RequirementTag::parse).collect()
}

fn build_catalog() -> Vec<Scheme> {
    vec![
        Scheme {
            id: "1".to_string(),
            name: "PM-KISAN (PM Kisan Samman Nidhi)".to_string(),
            description: "Income support scheme for small and marginal farmers".to_string(),
            eligibility: tags(&["farmers", "landholders", "rural"]),
            benefits: "₹6,000 per year in three installments".to_string(),
            category: SchemeCategory::Agriculture,
            application_deadline: NaiveDate::from_ymd_opt(2025, 3, 31),
            estimated_benefit: "₹6,000".to_string(),
            applicant_count: 120_000_000,
        },
        Scheme {
            id: "2".to_string(),
            name: "Ayushman Bharat - PMJAY".to_string(),
            description: "Health insurance scheme for economically vulnerable families"
                .to_string(),
            eligibility: tags(&["bpl", "lmig"]),
            benefits: "Health insurance cover up to ₹5 lakhs per family per year".to_string(),
            category: SchemeCategory::Healthcare,
            application_deadline: None,
            estimated_benefit: "₹5,00,000".to_string(),
            applicant_count: 50_000_000,
        },
        Scheme {
            id: "3".to_string(),
            name: "National Scholarship Portal".to_string(),
            description: "Scholarships for students from various backgrounds".to_string(),
            eligibility: tags(&["student", "sc", "st", "obc"]),
            benefits: "Educational scholarships and fee reimbursement".to_string(),
            category: SchemeCategory::Education,
            application_deadline: NaiveDate::from_ymd_opt(2025, 2, 28),
            estimated_benefit: "₹25,000".to_string(),
            applicant_count: 8_500_000,
        },
        Scheme {
            id: "4".to_string(),
            name: "Pradhan Mantri Awaas Yojana".to_string(),
            description: "Housing for All scheme providing affordable housing".to_string(),
            eligibility: tags(&["bpl", "lmig", "mig"]),
            benefits: "Subsidized housing loans and direct assistance".to_string(),
            category: SchemeCategory::Housing,
            application_deadline: None,
            estimated_benefit: "₹2,50,000".to_string(),
            applicant_count: 12_000_000,
        },
        Scheme {
            id: "5".to_string(),
            name: "Skill India Mission".to_string(),
            description: "Skill development and training programs for youth".to_string(),
            eligibility: tags(&["youth", "unemployed"]),
            benefits: "Free skill training and certification".to_string(),
            category: SchemeCategory::Employment,
            application_deadline: None,
            estimated_benefit: "₹10,000".to_string(),
            applicant_count: 15_000_000,
        },
    ]
}

/// Look a scheme up by id.
pub fn find_scheme<'a>(catalog: &'a [Scheme], id: &str) -> Option<&'a Scheme> {
    catalog.iter().find(|s| s.id == id)
}
