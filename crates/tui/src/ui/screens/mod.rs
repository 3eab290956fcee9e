pub mod form;
pub mod home;
pub mod jar;
pub mod ledger;
pub mod stats;
