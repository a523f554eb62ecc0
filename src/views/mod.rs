pub mod article;
pub mod home;
pub mod layout;
pub mod shared;
pub mod theme_toggle;

pub use article::EcologistPost;
pub use home::{Home, HomePage};
pub use layout::{NotFound, PageLayout};
pub use theme_toggle::ThemeToggle;
