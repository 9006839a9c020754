pub mod annotated;
pub mod result;

pub use annotated::Annotated;
pub use result::SeqShot;
