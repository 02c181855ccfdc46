pub mod gst_calculator;
pub mod material_balance;
pub mod price_entry;
pub mod work_order;

pub use gst_calculator::calculate;
pub use material_balance::{usable_materials, validate_issue};
pub use price_entry::submit_price_rows;
pub use work_order::{calculate_vendor, calculate_work_order_request};
