//! Landing page sections, top to bottom

pub mod brand;
pub mod case_studies;
pub mod footer;
pub mod hero;
pub mod mission;
pub mod navbar;
pub mod showcase;

pub use case_studies::CaseStudies;
pub use footer::Footer;
pub use hero::Hero;
pub use mission::Mission;
pub use navbar::Navbar;
pub use showcase::FeatureShowcase;
