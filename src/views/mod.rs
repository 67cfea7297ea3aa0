//! Screens
//!
//! One component per `View`. Role views load their own data on mount.

mod coordinator;
mod home;
mod organization;
mod volunteer;

pub use coordinator::CoordinatorView;
pub use home::HomeView;
pub use organization::OrganizationView;
pub use volunteer::VolunteerView;
