pub mod dispatch;
pub mod networks;
pub mod resolve;
pub mod schema;
