pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, menu_line, prompt, success, warn};
pub use table::items_table;
pub use theme::{theme, Theme};
