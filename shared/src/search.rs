//! Donor search: an exact blood-group match combined with a case-insensitive
//! city substring, evaluated as a linear scan in storage order.

use log::debug;

use crate::config::DirectoryConfig;
use crate::error::StoreResult;
use crate::store::DonorRepository;
use crate::tasks::Delay;
use crate::{BloodGroup, Donor};

/// Criteria from the search bar. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub blood_group: Option<BloodGroup>,
    pub city: String,
}

impl SearchQuery {
    /// Build a query from the raw select and text input values
    pub fn from_inputs(blood_group: &str, city: &str) -> Self {
        let blood_group = if blood_group.is_empty() {
            None
        } else {
            Some(BloodGroup::from(blood_group))
        };

        Self {
            blood_group,
            city: city.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blood_group.is_none() && self.city.trim().is_empty()
    }

    pub fn matches(&self, donor: &Donor) -> bool {
        let group_matches = self
            .blood_group
            .as_ref()
            .map_or(true, |group| donor.blood_group == *group);

        let needle = self.city.trim().to_lowercase();
        let city_matches = needle.is_empty() || donor.city.to_lowercase().contains(&needle);

        group_matches && city_matches
    }
}

/// Matching subset of `donors`, in storage order
pub fn filter_donors(donors: &[Donor], query: &SearchQuery) -> Vec<Donor> {
    donors
        .iter()
        .filter(|donor| query.matches(donor))
        .cloned()
        .collect()
}

/// What the listing shows once a search resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<Donor>),
    NoResults,
}

impl SearchOutcome {
    pub fn from_matches(matches: Vec<Donor>) -> Self {
        if matches.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(matches)
        }
    }

    pub fn donors(&self) -> &[Donor] {
        match self {
            SearchOutcome::Found(donors) => donors,
            SearchOutcome::NoResults => &[],
        }
    }
}

/// Wait out the simulated latency, then filter the current collection
pub async fn run_search<R, D>(
    repository: &R,
    delay: &D,
    query: &SearchQuery,
    config: &DirectoryConfig,
) -> StoreResult<SearchOutcome>
where
    R: DonorRepository + ?Sized,
    D: Delay + ?Sized,
{
    if query.is_empty() {
        debug!("Unfiltered search, listing every donor");
    }
    delay.sleep(config.search_delay_ms).await;

    let donors = repository.load()?;
    let matches = filter_donors(&donors, query);
    debug!(
        "Search {:?} matched {} of {} donors",
        query,
        matches.len(),
        donors.len()
    );

    Ok(SearchOutcome::from_matches(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_donors;
    use crate::store::{MemoryStorage, StorageDonorRepository};
    use crate::tasks::ImmediateDelay;
    use futures::executor::block_on;

    fn names(donors: &[Donor]) -> Vec<&str> {
        donors.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let donors = seed_donors();
        let query = SearchQuery::from_inputs("", "");

        assert!(query.is_empty());
        assert_eq!(filter_donors(&donors, &query), donors);
    }

    #[test]
    fn test_whitespace_city_counts_as_empty() {
        let donors = seed_donors();
        let query = SearchQuery::from_inputs("", "   ");

        assert!(query.is_empty());
        assert_eq!(filter_donors(&donors, &query).len(), 5);
    }

    #[test]
    fn test_blood_group_filter_is_exact() {
        let donors = seed_donors();

        for group in BloodGroup::ALL {
            let query = SearchQuery::from_inputs(group.as_str(), "");
            let matched = filter_donors(&donors, &query);

            for donor in &donors {
                let included = matched.iter().any(|m| m.id == donor.id);
                assert_eq!(included, donor.blood_group == group);
            }
        }
    }

    #[test]
    fn test_positive_group_does_not_match_negative() {
        let donors = seed_donors();
        let query = SearchQuery::from_inputs("O+", "");

        assert_eq!(names(&filter_donors(&donors, &query)), ["Ali Khan"]);
    }

    #[test]
    fn test_city_filter_is_case_insensitive_substring() {
        let donors = seed_donors();

        let query = SearchQuery::from_inputs("", "mad");
        assert_eq!(names(&filter_donors(&donors, &query)), ["Ali Khan", "Fatima Noor"]);

        let query = SearchQuery::from_inputs("", "  MADINAH ");
        assert_eq!(names(&filter_donors(&donors, &query)), ["Ali Khan", "Fatima Noor"]);
    }

    #[test]
    fn test_criteria_combine() {
        let donors = seed_donors();

        let query = SearchQuery::from_inputs("AB+", "madinah");
        assert_eq!(names(&filter_donors(&donors, &query)), ["Fatima Noor"]);

        let query = SearchQuery::from_inputs("A-", "madinah");
        assert!(filter_donors(&donors, &query).is_empty());
    }

    #[test]
    fn test_outcome_distinguishes_no_results() {
        assert_eq!(SearchOutcome::from_matches(Vec::new()), SearchOutcome::NoResults);
        assert!(SearchOutcome::NoResults.donors().is_empty());

        let found = SearchOutcome::from_matches(seed_donors());
        assert_eq!(found.donors().len(), 5);
    }

    #[test]
    fn test_run_search_waits_then_filters_the_store() {
        let repo = StorageDonorRepository::new(MemoryStorage::new(), "donors");
        let delay = ImmediateDelay::new();
        let config = DirectoryConfig::default();

        let outcome = block_on(run_search(
            &repo,
            &delay,
            &SearchQuery::from_inputs("", "jeddah"),
            &config,
        ))
        .unwrap();

        assert_eq!(names(outcome.donors()), ["Omar Farooq"]);
        assert_eq!(delay.requested(), vec![500]);
    }

    #[test]
    fn test_run_search_with_empty_query_lists_everything() {
        let repo = StorageDonorRepository::new(MemoryStorage::new(), "donors");
        let delay = ImmediateDelay::new();
        let query = SearchQuery::from_inputs("", " ");

        let outcome = block_on(run_search(&repo, &delay, &query, &DirectoryConfig::default())).unwrap();

        assert!(query.is_empty());
        assert_eq!(outcome.donors(), seed_donors().as_slice());
    }

    #[test]
    fn test_run_search_reports_no_results() {
        let repo = StorageDonorRepository::new(MemoryStorage::new(), "donors");
        let delay = ImmediateDelay::new();

        let outcome = block_on(run_search(
            &repo,
            &delay,
            &SearchQuery::from_inputs("B-", ""),
            &DirectoryConfig::default(),
        ))
        .unwrap();

        assert_eq!(outcome, SearchOutcome::NoResults);
    }
}
