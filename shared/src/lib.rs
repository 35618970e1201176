pub mod account;
pub mod accreditation;
pub mod application;
pub mod program;
