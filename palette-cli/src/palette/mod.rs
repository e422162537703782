pub mod colors;
pub mod legend;
pub mod safelist;
pub mod scale;

pub use colors::special_case;
pub use legend::color_scales;
pub use safelist::Palette;
pub use scale::{generate_scale, sort_entries, ColorScale};
