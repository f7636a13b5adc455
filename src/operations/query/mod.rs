mod check_loop;
mod face_box;
mod face_size;
mod orientation;
mod self_intersect;
mod signed_area;

pub use check_loop::CheckLoop;
pub use face_box::FaceBox;
pub use face_size::FaceSize;
pub use orientation::FaceOrientation;
pub use self_intersect::{IsSimple, SelfIntersections};
pub use signed_area::{Area, SignedArea};
