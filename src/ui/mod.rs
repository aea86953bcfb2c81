pub mod icons;
pub mod output;
pub mod table;

pub use icons::Icons;
pub use output::Palette;
pub use table::{RecordTable, MAX_PREVIEW_LINES};
