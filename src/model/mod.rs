pub use shoal_core::{Command, Ecosystem, Frame, SimConfig, SimError};
pub mod config {
    pub use shoal_core::config::*;
}
pub mod clock {
    pub use shoal_core::clock::*;
}
pub mod flocking {
    pub use shoal_core::flocking::*;
}
pub mod food {
    pub use shoal_core::food::*;
    pub use shoal_data::Food;
}
pub mod lifecycle {
    pub use shoal_core::lifecycle::*;
}
pub mod snapshot {
    pub use shoal_core::snapshot::*;
}
pub mod species {
    pub use shoal_core::species::*;
}
pub mod stats {
    pub use shoal_core::stats::*;
    pub use shoal_data::Stats;
}
pub mod metrics {
    pub use shoal_core::metrics::*;
}
