pub mod document;
pub mod loaders;
pub mod student;

pub use document::{
    Alignment, Column, DocumentKind, ExamMeta, PageGeometry, RoomSection, SeatingDocument, Table,
    TextStyle,
};
pub use loaders::{load_rooms, load_students};
pub use student::{max_name_length, Room, Student};
