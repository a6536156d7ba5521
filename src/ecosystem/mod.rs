pub mod animal;
pub mod events;
pub mod population;
pub mod resources;
pub mod species;

pub use animal::Animal;
pub use events::{DeathCause, EnvEvent, TurnEvent};
pub use population::Population;
pub use resources::{ResourceKind, ResourceLevels, ResourcePool};
pub use species::{Diet, SpeciesProfile};
