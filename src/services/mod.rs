pub mod allocator;
pub mod composer;
pub mod randomizer;

pub use allocator::{allocate, room_sizes, RoomAllocation};
pub use composer::compose;
pub use randomizer::{shuffle_students, Randomizer, SHUFFLE_PASSES};
