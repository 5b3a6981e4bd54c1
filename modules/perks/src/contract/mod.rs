pub mod client;
pub mod error;
pub mod model;

pub use error::PerksError;
pub use model::{NewPerk, Perk, PerkCategory, PerkDraft};
