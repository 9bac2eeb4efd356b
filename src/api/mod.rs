//! API service modules for the tagging endpoints.
//!
//! Each service groups the endpoints of one resource. Every method checks its
//! required parameters before anything is sent, so a missing one fails with
//! [`Error::MissingParameter`](crate::Error::MissingParameter) without
//! touching the network.

mod actions;
mod categories;
mod tags;
mod users;

pub use actions::ActionsService;
pub use categories::CategoriesService;
pub use tags::TagsService;
pub use users::UsersService;
