use crate::error::ValidationError;
use crate::models::{MaterialBalance, MaterialIssueRequest, MaterialStock};

const PRIORITY_LEVELS: [&str; 3] = ["High", "Medium", "Low"];

/// 结余 = 收料数量 - 累计发料数量
pub fn balance(stock: &MaterialStock) -> f64 {
    stock.received_quantity - total_issued(stock)
}

fn total_issued(stock: &MaterialStock) -> f64 {
    stock.issued.iter().map(|r| r.issued_quantity).sum()
}

fn to_balance(stock: &MaterialStock) -> MaterialBalance {
    let issued = total_issued(stock);
    MaterialBalance {
        item_description: stock.item_description.clone(),
        unit: stock.unit.clone(),
        received_quantity: stock.received_quantity,
        total_issued: issued,
        balance: stock.received_quantity - issued,
    }
}

/// 仅保留仍有结余的物料 (保序)
pub fn usable_materials(materials: &[MaterialStock]) -> Vec<MaterialBalance> {
    materials
        .iter()
        .map(to_balance)
        .filter(|b| b.balance > 0.0)
        .collect()
}

/// 校验发料申请, 通过时返回所选物料的当前结余
pub fn validate_issue(
    materials: &[MaterialStock],
    issue: &MaterialIssueRequest,
) -> Result<MaterialBalance, ValidationError> {
    let required = [
        ("Site Name", &issue.site_name),
        ("Material", &issue.item_description),
        ("Unit", &issue.unit),
        ("Work Location", &issue.work_location),
        ("Requested By", &issue.requested_by),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(name));
        }
    }

    if !PRIORITY_LEVELS.contains(&issue.priority_level.as_str()) {
        return Err(ValidationError::InvalidPriority(issue.priority_level.clone()));
    }

    let stock = usable_materials(materials)
        .into_iter()
        .find(|b| b.item_description == issue.item_description)
        .ok_or_else(|| ValidationError::UnknownMaterial(issue.item_description.clone()))?;

    if issue.issued_quantity < 1.0 {
        return Err(ValidationError::QuantityTooSmall);
    }
    if issue.issued_quantity > stock.balance {
        return Err(ValidationError::ExceedsBalance { balance: stock.balance });
    }

    tracing::debug!(
        "Issue of {} {} validated against balance {}",
        issue.issued_quantity,
        stock.unit,
        stock.balance
    );
    Ok(stock)
}
