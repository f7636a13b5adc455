//! Face export: structured shape records (JSON) and SVG path data.

mod records;
mod svg;

pub use records::ExportRecords;
pub use svg::SvgPath;
