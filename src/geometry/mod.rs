pub mod anchor;
pub mod box3;
pub mod rect;

pub use anchor::AnchorPoint;
pub use box3::Box3;
pub use rect::Rect;
