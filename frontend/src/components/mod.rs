//! Reusable UI components and the collaborator seam used by pages.

mod card;
mod collaborator;
mod empty_state;
mod placeholder;
pub mod theme;

pub use card::Card;
pub use collaborator::{Collaborator, Empty};
pub use empty_state::EmptyState;
pub use placeholder::Placeholder;
