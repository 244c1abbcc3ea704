//! Browse schemes use case
//! 浏览福利计划用例

use std::sync::Arc;

use cl_core::scheme::{filter_catalog, CategoryFilter, Scheme, SchemeSummary};
use serde::Serialize;
use tracing::{info, info_span};

use crate::navigation::Route;

use super::favorites::FavoritesSet;
use super::profile_store::ProfileStore;

/// Filters chosen on the scheme list.
#[derive(Debug, Clone, Default)]
pub struct SchemeQuery {
    pub category: CategoryFilter,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedScheme {
    pub scheme: Scheme,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeListing {
    pub profile_name: String,
    /// Eligible schemes matching the query, in catalog order.
    pub schemes: Vec<ListedScheme>,
    /// Figures over every eligible scheme, ignoring the query.
    pub summary: SchemeSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeBrowse {
    /// No registered profile; the caller should navigate to `redirect`.
    RegistrationRequired { redirect: Route },
    Listing(SchemeListing),
}

/// Use case for the personalised scheme list.
///
/// ## Behavior / 行为
/// - Unregistered citizens are sent to registration
/// - Otherwise lists eligible schemes filtered by category and search text
/// - Each entry carries its favorite flag
pub struct BrowseSchemes {
    profiles: Arc<ProfileStore>,
    favorites: Arc<FavoritesSet>,
    catalog: Arc<[Scheme]>,
}

impl BrowseSchemes {
    pub fn new(
        profiles: Arc<ProfileStore>,
        favorites: Arc<FavoritesSet>,
        catalog: Arc<[Scheme]>,
    ) -> Self {
        Self {
            profiles,
            favorites,
            catalog,
        }
    }

    pub fn execute(&self, query: &SchemeQuery) -> SchemeBrowse {
        let span = info_span!(
            "usecase.browse_schemes.execute",
            category = ?query.category,
            search = %query.search,
        );
        let _enter = span.enter();

        let profile = match self.profiles.load() {
            Some(profile) if profile.is_registered => profile,
            _ => {
                info!("No registered profile; redirecting to registration");
                return SchemeBrowse::RegistrationRequired {
                    redirect: Route::Register,
                };
            }
        };

        let eligible = filter_catalog(&self.catalog, Some(&profile), CategoryFilter::All, "");
        let summary = SchemeSummary::from_schemes(eligible.iter().copied());

        let schemes: Vec<ListedScheme> =
            filter_catalog(&self.catalog, Some(&profile), query.category, &query.search)
                .into_iter()
                .map(|scheme| ListedScheme {
                    is_favorite: self.favorites.contains(&scheme.id),
                    scheme: scheme.clone(),
                })
                .collect();

        info!(
            eligible = summary.eligible_count,
            listed = schemes.len(),
            "Scheme listing built"
        );

        SchemeBrowse::Listing(SchemeListing {
            profile_name: profile.name,
            schemes,
            summary,
        })
    }
}
