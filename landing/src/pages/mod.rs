// Page-level views, one per route
// Each composes sections; none holds state.

mod about;
mod contact;
mod explore;
mod home;
mod not_found;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use explore::ExplorePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
