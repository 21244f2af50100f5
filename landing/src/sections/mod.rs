// Landing page sections
// Reusable building blocks composed by the page views.

pub mod icons;

mod features;
mod footer;
mod hero;
mod nav;
mod product_mock;
mod recommendations;
mod testimonials;

pub use features::Features;
pub use footer::{Footer, copyright_line, current_year};
pub use hero::Hero;
pub use nav::{Nav, NavState, bar_class};
pub use product_mock::ProductMock;
pub use recommendations::Recommendations;
pub use testimonials::Testimonials;
