//! Eligibility engine
//!
//! Matching is a disjunction: a citizen qualifies for a scheme when ANY of
//! its requirement tags holds for their profile.

use crate::profile::Profile;

use super::model::{CategoryFilter, RequirementTag, Scheme};

/// Upper age bound (inclusive) for the `youth` tag.
pub const YOUTH_MAX_AGE: u8 = 35;
/// Upper age bound (inclusive) for the `student` tag.
pub const STUDENT_MAX_AGE: u8 = 25;

impl RequirementTag {
    /// Whether this single tag holds for `profile`.
    pub fn matches(&self, profile: &Profile) -> bool {
        match self {
            RequirementTag::Income(group) => profile.income_group == *group,
            RequirementTag::Caste(caste) => profile.caste == Some(*caste),
            RequirementTag::Youth => profile.age <= YOUTH_MAX_AGE,
            RequirementTag::Student => profile.age <= STUDENT_MAX_AGE,
            RequirementTag::Other(_) => false,
        }
    }
}

/// `true` iff at least one tag matches; always `false` without a profile.
pub fn is_eligible<'a, I>(profile: Option<&Profile>, requirements: I) -> bool
where
    I: IntoIterator<Item = &'a RequirementTag>,
{
    let Some(profile) = profile else {
        return false;
    };
    requirements.into_iter().any(|tag| tag.matches(profile))
}

/// Eligible schemes of `catalog`, narrowed by category and a case-insensitive
/// search over name and description. Catalog order is preserved.
pub fn filter_catalog<'a>(
    catalog: &'a [Scheme],
    profile: Option<&Profile>,
    category: CategoryFilter,
    search_text: &str,
) -> Vec<&'a Scheme> {
    let needle = search_text.to_lowercase();

    catalog
        .iter()
        .filter(|scheme| is_eligible(profile, &scheme.eligibility))
        .filter(|scheme| match category {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => scheme.category == wanted,
        })
        .filter(|scheme| {
            needle.is_empty()
                || scheme.name.to_lowercase().contains(&needle)
                || scheme.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{fixtures, Caste, IncomeGroup};
    use crate::scheme::{default_catalog, SchemeCategory};

    fn tags(values: &[&str]) -> Vec<RequirementTag> {
        values.iter().copied().map(RequirementTag::parse).collect()
    }

    fn ids(schemes: &[&Scheme]) -> Vec<String> {
        schemes.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_income_tag_matches_exact_group() {
        let mut profile = fixtures::profile();
        assert!(is_eligible(Some(&profile), &tags(&["bpl"])));

        profile.income_group = IncomeGroup::Mig;
        assert!(!is_eligible(Some(&profile), &tags(&["bpl"])));
    }

    #[test]
    fn test_youth_boundary() {
        let mut profile = fixtures::profile();
        profile.age = 35;
        assert!(is_eligible(Some(&profile), &tags(&["youth"])));

        profile.age = 36;
        assert!(!is_eligible(Some(&profile), &tags(&["youth"])));
    }

    #[test]
    fn test_student_boundary() {
        let mut profile = fixtures::profile();
        profile.age = 25;
        assert!(is_eligible(Some(&profile), &tags(&["student"])));

        profile.age = 26;
        assert!(!is_eligible(Some(&profile), &tags(&["student"])));
    }

    #[test]
    fn test_caste_tag_requires_declared_caste() {
        let mut profile = fixtures::profile();
        profile.caste = Some(Caste::Sc);
        assert!(is_eligible(Some(&profile), &tags(&["sc"])));
        assert!(!is_eligible(Some(&profile), &tags(&["st", "obc"])));

        profile.caste = None;
        assert!(!is_eligible(Some(&profile), &tags(&["sc", "st", "obc"])));

        profile.caste = Some(Caste::General);
        assert!(!is_eligible(Some(&profile), &tags(&["general"])));
    }

    #[test]
    fn test_unknown_tags_never_match() {
        let profile = fixtures::profile();
        assert!(!is_eligible(Some(&profile), &tags(&["farmers", "rural"])));
        assert!(!is_eligible(Some(&profile), &Vec::<RequirementTag>::new()));
    }

    #[test]
    fn test_any_single_tag_is_enough() {
        let mut profile = fixtures::profile();
        profile.income_group = IncomeGroup::Hig;
        profile.caste = None;
        profile.age = 20;

        assert!(is_eligible(Some(&profile), &tags(&["bpl", "farmers", "student"])));
    }

    #[test]
    fn test_absent_profile_is_never_eligible() {
        assert!(!is_eligible(None, &tags(&["bpl", "youth", "student"])));
        assert!(filter_catalog(default_catalog(), None, CategoryFilter::All, "").is_empty());
    }

    #[test]
    fn test_filter_catalog_for_bpl_obc_adult() {
        // BPL, OBC, 30 years old: healthcare, scholarship (obc), housing, skills (youth)
        let profile = fixtures::profile();
        let result = filter_catalog(default_catalog(), Some(&profile), CategoryFilter::All, "");

        assert_eq!(ids(&result), vec!["2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_catalog_by_category() {
        let profile = fixtures::profile();
        let result = filter_catalog(
            default_catalog(),
            Some(&profile),
            CategoryFilter::Only(SchemeCategory::Housing),
            "",
        );

        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_filter_catalog_search_is_case_insensitive_over_name_and_description() {
        let profile = fixtures::profile();
        let catalog = default_catalog();

        let by_name = filter_catalog(catalog, Some(&profile), CategoryFilter::All, "SKILL");
        assert_eq!(ids(&by_name), vec!["5"]);

        // only the PMAY description mentions it
        let by_description =
            filter_catalog(catalog, Some(&profile), CategoryFilter::All, "Affordable");
        assert_eq!(ids(&by_description), vec!["4"]);

        let none = filter_catalog(catalog, Some(&profile), CategoryFilter::All, "tractor");
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_catalog_preserves_input_order() {
        let profile = fixtures::profile();
        let mut reversed: Vec<Scheme> = default_catalog().to_vec();
        reversed.reverse();

        for category in [
            CategoryFilter::All,
            CategoryFilter::Only(SchemeCategory::Healthcare),
            CategoryFilter::Only(SchemeCategory::Education),
        ] {
            for search in ["", "scheme", "s"] {
                let result = filter_catalog(&reversed, Some(&profile), category, search);
                let positions: Vec<usize> = result
                    .iter()
                    .map(|s| reversed.iter().position(|r| r.id == s.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
