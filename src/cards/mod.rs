//! Card system: definitions, live instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Immutable card template (cost, damage, element flags)
//! - `InstanceId` / `CardInstance`: A drawn card living in a hand slot
//! - `CardCatalog`: Ordered, weighted set of definitions decks are built from

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, MIRROR_DAMAGE};
pub use instance::{CardInstance, InstanceId};
