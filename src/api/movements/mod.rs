pub mod fetch;
pub mod filter;
pub mod structs;
pub use filter::{filter_movements_by_date, parse_movement_date};
pub use structs::{Movement, MovementPage, MovementQuery, MovementQueryBuilder, PaymentStatus};
