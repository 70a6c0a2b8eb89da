pub mod form;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod search;

pub use form::{FormStatus, StatusAlert, TextField};
pub use header::Header;
pub use layout::{Layout, LocalLink};
pub use markdown::Markdown;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page, UnderConstruction};
pub use protected_layout::{LoginGuard, RequiresLoggedIn};
pub use search::SearchPage;
