mod address;
mod cart_line;
mod menu_item;
mod order;
mod payment;
mod settings;

pub use address::Address;
pub use cart_line::CartLine;
pub use menu_item::MenuItem;
pub use order::{Order, OrderConfirmation, OrderLine, OrderPricing, OrderSubmission};
pub use payment::PaymentDetails;
pub use settings::StoreSettings;
