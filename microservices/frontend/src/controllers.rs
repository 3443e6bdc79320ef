pub mod data;
pub mod home;
