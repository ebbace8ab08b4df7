mod bundle;
mod render;

pub use bundle::{I18nBundle, current_lang};
pub use render::{t, tr};
