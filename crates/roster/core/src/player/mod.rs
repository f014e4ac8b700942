//! Player records and the payloads that create or modify them.
//!
//! - [`Player`] is the persisted shape, including the derived progression fields
//! - [`NewPlayer`] is a creation payload that passed validation
//! - [`PlayerPatch`] carries one optional value per caller-supplied field

mod kinds;
mod patch;
mod record;

pub use kinds::{Profession, Race};
pub use patch::PlayerPatch;
pub use record::{NewPlayer, Player, PlayerId};
