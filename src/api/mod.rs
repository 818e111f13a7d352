//! Interfaces to the remote services the ordering core consumes

pub mod addresses;
pub mod gateway;
pub mod orders;
pub mod settings;

pub use addresses::{AddressClient, AddressService};
pub use gateway::{GatewayAuthorization, GatewayResult, PaymentGateway};
pub use orders::{OrderClient, OrderFilter, OrderService};
pub use settings::{SettingsClient, SettingsService};
