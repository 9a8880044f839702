//! Database models.

pub mod media;
pub mod page;
pub mod role;
pub mod user;
pub mod website;

pub use media::{CreateMedia, MediaItem};
pub use page::{PageRecord, SavePage};
pub use user::{AuthError, RegisterUser, User, UserWithRoles};
pub use website::{CreateWebsite, Website};
