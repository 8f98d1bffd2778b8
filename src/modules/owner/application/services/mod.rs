mod owner_gate;
mod panel_registry;

pub use owner_gate::{OwnerGate, OwnerGateError};
pub use panel_registry::PanelRegistry;
