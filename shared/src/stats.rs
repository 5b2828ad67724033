use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::Donor;

/// Summary cards shown above the admin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorStats {
    pub total: usize,
    /// Most frequent blood group, "N/A" for an empty collection
    pub most_common_blood_group: String,
    /// Always "Active"; not derived from donor statuses
    pub status_label: String,
}

impl DonorStats {
    pub const NOT_AVAILABLE: &'static str = "N/A";
    pub const STATUS_LABEL: &'static str = "Active";

    /// Single pass over the donors.
    ///
    /// On a tie the group that first reached the winning count keeps the
    /// lead, because a later group only replaces it with a strictly higher
    /// count.
    pub fn from_donors(donors: &[Donor]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut leader = Self::NOT_AVAILABLE;
        let mut leader_count = 0;

        for donor in donors {
            let group = donor.blood_group.as_str();
            let count = counts.entry(group).or_insert(0);
            *count += 1;
            if *count > leader_count {
                leader_count = *count;
                leader = group;
            }
        }

        Self {
            total: donors.len(),
            most_common_blood_group: leader.to_string(),
            status_label: Self::STATUS_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed_donors, BloodGroup};

    fn with_groups(groups: &[&str]) -> Vec<Donor> {
        let template = seed_donors().remove(0);
        groups
            .iter()
            .enumerate()
            .map(|(i, group)| Donor {
                id: i as u32 + 1,
                blood_group: BloodGroup::from(*group),
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn test_empty_collection() {
        let stats = DonorStats::from_donors(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.most_common_blood_group, "N/A");
        assert_eq!(stats.status_label, "Active");
    }

    #[test]
    fn test_clear_winner() {
        let stats = DonorStats::from_donors(&with_groups(&["A+", "O-", "O-", "B+"]));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.most_common_blood_group, "O-");
    }

    #[test]
    fn test_all_distinct_picks_first() {
        // The seed has five distinct groups, so the first donor's group wins
        let stats = DonorStats::from_donors(&seed_donors());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.most_common_blood_group, "O+");
    }

    #[test]
    fn test_tie_goes_to_first_to_reach_the_count() {
        let stats = DonorStats::from_donors(&with_groups(&["B+", "A+", "A+", "B+"]));
        assert_eq!(stats.most_common_blood_group, "A+");

        let stats = DonorStats::from_donors(&with_groups(&["B+", "A+", "B+", "A+"]));
        assert_eq!(stats.most_common_blood_group, "B+");
    }

    #[test]
    fn test_status_label_ignores_data() {
        let stats = DonorStats::from_donors(&with_groups(&["AB-"]));
        assert_eq!(stats.status_label, DonorStats::STATUS_LABEL);
    }
}
