pub mod card;
pub(crate) mod de;
pub mod price;

pub use card::*;
pub use price::*;
