pub mod forward;
pub mod network;
pub mod parameters;
pub mod settings;

pub use forward::{feed_forward, ForwardPass};
pub use network::{Network, NetworkState};
pub use parameters::NetworkParameters;
pub use settings::Settings;
