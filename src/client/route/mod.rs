pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod home;
pub mod localized;
pub mod not_found;

pub use dashboard::Dashboard;
pub use home::Home;
pub use localized::Localized;
pub use not_found::NotFound;
