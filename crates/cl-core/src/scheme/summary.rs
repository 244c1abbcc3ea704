use serde::Serialize;

use super::model::Scheme;

/// Headline figures shown above the eligible scheme list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeSummary {
    pub eligible_count: usize,
    /// Sum of every parsable estimated benefit, in rupees.
    pub total_potential_benefit: u64,
    pub with_deadline_count: usize,
}

impl SchemeSummary {
    pub fn from_schemes<'a, I>(schemes: I) -> Self
    where
        I: IntoIterator<Item = &'a Scheme>,
    {
        schemes
            .into_iter()
            .fold(SchemeSummary::default(), |mut summary, scheme| {
                summary.eligible_count += 1;
                summary.total_potential_benefit += scheme.estimated_benefit_rupees().unwrap_or(0);
                if scheme.application_deadline.is_some() {
                    summary.with_deadline_count += 1;
                }
                summary
            })
    }
}
