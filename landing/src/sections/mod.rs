// Landing page sections

mod cta;
mod cursor;
mod features;
mod footer;
mod hero;
mod icon;
mod nav;
mod page;
mod reveal;
mod testimonials;

pub use cta::CallToAction;
pub use cursor::CursorOverlay;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use icon::Icon;
pub use nav::{Header, LinkList};
pub use page::{Document, LandingPage};
pub use reveal::use_reveal;
pub use testimonials::Testimonials;
