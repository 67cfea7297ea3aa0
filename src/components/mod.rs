//! UI Components
//!
//! Reusable Leptos components.

mod application_card;
mod badges;
mod certificate_card;
mod empty_state;
mod filter_panel;
mod initiative_card;
mod participation_card;
mod stat_card;
mod student_table;
mod view_header;

pub use application_card::ApplicationCard;
pub use badges::{CategoryPill, StatusBadge};
pub use certificate_card::CertificateCard;
pub use empty_state::EmptyState;
pub use filter_panel::FilterPanel;
pub use initiative_card::InitiativeCard;
pub use participation_card::ParticipationCard;
pub use stat_card::StatCard;
pub use student_table::StudentTable;
pub use view_header::ViewHeader;
