use futures::executor::block_on;
use std::rc::Rc;

use shared::search::run_search;
use shared::{
    filter_donors, DirectoryConfig, DonorCommand, DonorRepository, DonorService, DonorStats,
    ImmediateDelay, KeyValueStorage, MemoryStorage, NewDonorRequest, SearchOutcome, SearchQuery,
    StorageDonorRepository,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fresh_repository() -> StorageDonorRepository<Rc<MemoryStorage>> {
    StorageDonorRepository::new(Rc::new(MemoryStorage::new()), "donors")
}

fn names(outcome: &SearchOutcome) -> Vec<String> {
    outcome.donors().iter().map(|d| d.name.clone()).collect()
}

#[test]
fn empty_store_seeds_the_default_donors() {
    init_logging();
    let repo = fresh_repository();

    let donors = repo.load().unwrap();

    let summary: Vec<(String, String, String)> = donors
        .iter()
        .map(|d| (d.name.clone(), d.blood_group.to_string(), d.city.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Ali Khan".into(), "O+".into(), "Madinah".into()),
            ("Sara Ahmed".into(), "A-".into(), "Riyadh".into()),
            ("Omar Farooq".into(), "B+".into(), "Jeddah".into()),
            ("Fatima Noor".into(), "AB+".into(), "Madinah".into()),
            ("Khalid Yasin".into(), "O-".into(), "Makkah".into()),
        ]
    );
    assert!(repo.storage().get_item("donors").unwrap().is_some());
}

#[test]
fn search_by_blood_group_finds_one_donor() {
    init_logging();
    let repo = fresh_repository();
    let delay = ImmediateDelay::new();

    let outcome = block_on(run_search(
        &repo,
        &delay,
        &SearchQuery::from_inputs("O+", ""),
        &DirectoryConfig::default(),
    ))
    .unwrap();

    assert_eq!(names(&outcome), vec!["Ali Khan"]);
}

#[test]
fn search_by_city_keeps_storage_order() {
    init_logging();
    let repo = fresh_repository();
    let delay = ImmediateDelay::new();

    let outcome = block_on(run_search(
        &repo,
        &delay,
        &SearchQuery::from_inputs("", "madinah"),
        &DirectoryConfig::default(),
    ))
    .unwrap();

    assert_eq!(names(&outcome), vec!["Ali Khan", "Fatima Noor"]);
}

#[test]
fn delete_then_search_reflects_the_removal() {
    init_logging();
    let service = DonorService::new(fresh_repository(), DirectoryConfig::default());
    let delay = ImmediateDelay::new();

    let outcome = service.delete(3).unwrap();
    assert_eq!(outcome.donors.len(), 4);

    let jeddah = block_on(run_search(
        service.repository(),
        &delay,
        &SearchQuery::from_inputs("", "jeddah"),
        service.config(),
    ))
    .unwrap();
    assert_eq!(jeddah, SearchOutcome::NoResults);
}

#[test]
fn registration_shows_up_in_listing_and_stats() {
    init_logging();
    let service = DonorService::new(fresh_repository(), DirectoryConfig::default());
    let delay = ImmediateDelay::new();

    for name in ["Huda", "Yusuf"] {
        let request = NewDonorRequest {
            name: name.to_string(),
            blood_group: "O+".to_string(),
            city: "Madinah".to_string(),
            phone: "966511111111".to_string(),
            last_donation: String::new(),
        };
        block_on(service.register(&delay, request)).unwrap();
    }

    let donors = service.list().unwrap();
    assert_eq!(donors.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);

    let stats = DonorStats::from_donors(&donors);
    assert_eq!(stats.total, 7);
    assert_eq!(stats.most_common_blood_group, "O+");
    assert_eq!(stats.status_label, "Active");

    let madinah = filter_donors(&donors, &SearchQuery::from_inputs("O+", "MAD"));
    assert_eq!(madinah.len(), 3);
}

#[test]
fn commands_are_pure_until_saved() {
    init_logging();
    let repo = fresh_repository();
    let donors = repo.load().unwrap();
    let before = repo.storage().get_item("donors").unwrap();

    let outcome = DonorCommand::Delete(1).apply(donors);
    assert_eq!(outcome.donors.len(), 4);
    assert_eq!(repo.storage().get_item("donors").unwrap(), before);

    repo.save(&outcome.donors).unwrap();
    assert_eq!(repo.load().unwrap(), outcome.donors);
}
