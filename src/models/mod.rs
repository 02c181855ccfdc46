pub mod material;
pub mod price_entry;
pub mod quotation;

pub use material::{IssueRecord, MaterialBalance, MaterialIssueRequest, MaterialStock};
pub use price_entry::{PriceEntryRow, PriceEntrySummary, PricedRow};
pub use quotation::{
    ApprovalStatus, CalculatedItem, QuotationCalculation, QuoteItem, VendorCalculation,
    VendorQuotation, VendorTotals, WorkOrderRequest,
};
