use crate::models::{ApprovalStatus, VendorCalculation, VendorQuotation, WorkOrderRequest};
use crate::report::{format_date_en_gb, PLACEHOLDER};
use crate::service::gst_calculator;
use rayon::prelude::*;

/// 计算单个供应商报价
pub fn calculate_vendor(vendor: &VendorQuotation) -> VendorCalculation {
    let result = gst_calculator::calculate(&vendor.quote_items);

    VendorCalculation {
        vendor_id: vendor.vendor_id.clone(),
        vendor_name: vendor.vendor_name.clone(),
        quotation_id: vendor.quotation_id.clone(),
        quotation_date: format_date_en_gb(vendor.quotation_date.as_deref()),
        delivery_period: format_date_en_gb(vendor.delivery_period.as_deref()),
        address: vendor.address.clone(),
        approval_status: vendor
            .approval_status
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        approval_badge: ApprovalStatus::parse(vendor.approval_status.as_deref()),
        calculated: result.calculated,
        totals: result.totals,
    }
}

/// 工单申请下所有供应商并行计算 (各供应商互不影响, 结果保序)
pub fn calculate_work_order_request(request: &WorkOrderRequest) -> Vec<VendorCalculation> {
    tracing::debug!(
        "Calculating WOR '{}' with {} vendor quotations",
        request.title,
        request.vendor_quotations.len()
    );

    request
        .vendor_quotations
        .par_iter()
        .map(calculate_vendor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteItem;

    fn vendor(id: &str, status: Option<&str>, items: Vec<(f64, f64)>) -> VendorQuotation {
        VendorQuotation {
            vendor_id: id.to_string(),
            vendor_name: format!("Vendor {}", id),
            quotation_id: format!("Q-{}", id),
            quotation_date: Some("2025-03-14T00:00:00.000Z".to_string()),
            delivery_period: None,
            address: "Chennai".to_string(),
            approval_status: status.map(str::to_string),
            quote_items: items
                .into_iter()
                .map(|(quantity, rate)| QuoteItem {
                    material_name: "Steel".to_string(),
                    unit: "Kg".to_string(),
                    quantity,
                    quoted_unit_rate: rate,
                })
                .collect(),
        }
    }

    #[test]
    fn test_vendor_header_fields() {
        let v = calculate_vendor(&vendor("V1", Some("Approved"), vec![(50.0, 350.0)]));
        assert_eq!(v.vendor_name, "Vendor V1");
        assert_eq!(v.quotation_date, "14/03/2025");
        assert_eq!(v.delivery_period, "—");
        assert_eq!(v.approval_status, "Approved");
        assert_eq!(v.approval_badge, ApprovalStatus::Approved);
        assert!((v.totals.net - 20650.0).abs() < 1e-9);
    }

    #[test]
    fn test_vendors_independent_and_ordered() {
        let request = WorkOrderRequest {
            title: "Plumbing".to_string(),
            description: String::new(),
            vendor_quotations: (0..16)
                .map(|i| vendor(&i.to_string(), Some("Pending"), vec![(i as f64, 100.0)]))
                .collect(),
        };
        let result = calculate_work_order_request(&request);
        assert_eq!(result.len(), 16);
        for (i, v) in result.iter().enumerate() {
            assert_eq!(v.vendor_id, i.to_string());
            // i x 100 x 1.18
            assert!((v.totals.net - (i as f64 * 118.0)).abs() < 1e-9);
            assert_eq!(v.approval_badge, ApprovalStatus::Pending);
        }
    }

    #[test]
    fn test_vendor_without_items() {
        let v = calculate_vendor(&vendor("V2", None, vec![]));
        assert!(v.calculated.is_empty());
        assert_eq!(v.totals.net, 0.0);
        assert_eq!(v.approval_status, "—");
        assert_eq!(v.approval_badge, ApprovalStatus::Other);
    }

    #[test]
    fn test_unlisted_status_text_is_kept() {
        let v = calculate_vendor(&vendor("V3", Some("Rejected"), vec![]));
        assert_eq!(v.approval_status, "Rejected");
        assert_eq!(v.approval_badge, ApprovalStatus::Other);

        let v = calculate_vendor(&vendor("V4", Some(""), vec![]));
        assert_eq!(v.approval_status, "—");
    }
}
