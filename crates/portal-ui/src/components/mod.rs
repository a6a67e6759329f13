//! Reusable form components
//!
//! Class names follow the stylesheet in the app shell (`btn-*`, `input-*`).

mod button;
mod currency_field;
mod icons;
mod input;
mod phone_field;

pub use button::*;
pub use currency_field::*;
pub use icons::*;
pub use input::*;
pub use phone_field::*;
