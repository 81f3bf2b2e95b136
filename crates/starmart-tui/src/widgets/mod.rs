//! Small reusable rendering helpers shared by the screens.

pub mod price_fmt;
pub mod sub_tabs;
