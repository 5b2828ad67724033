pub mod use_admin_donors;
pub mod use_chrome;
pub mod use_donor_search;
pub mod use_registration;
