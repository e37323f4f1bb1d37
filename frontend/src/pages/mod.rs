pub mod create_room;

pub use create_room::{LayoutConfig, PageLayout, RegionLayout, RoomCreationPage, Slot};
