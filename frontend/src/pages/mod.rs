pub mod booking;
pub mod dashboard;
pub mod designs;
pub mod login;
