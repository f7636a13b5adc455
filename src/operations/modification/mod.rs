mod append;
mod arc_length;
mod insert;
mod remove;
mod reverse;

pub use append::AppendEdge;
pub use arc_length::SetArcLength;
pub use insert::InsertEdge;
pub use remove::RemoveEdge;
pub use reverse::ReverseFace;
