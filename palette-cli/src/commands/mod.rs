pub mod colors;
pub mod framework;
pub mod legend;
pub mod safelist;
pub mod scale;
