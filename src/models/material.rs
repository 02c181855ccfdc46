use serde::{Deserialize, Serialize};

/// 单次发料记录
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueRecord {
    pub issued_quantity: f64,
}

/// 工地物料库存 (收料 + 历次发料)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialStock {
    pub item_description: String,
    pub unit: String,
    pub received_quantity: f64,
    pub issued: Vec<IssueRecord>,
}

/// 物料结余
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialBalance {
    pub item_description: String,
    pub unit: String,
    pub received_quantity: f64,
    pub total_issued: f64,
    pub balance: f64,
}

/// 发料申请
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialIssueRequest {
    pub site_name: String,
    pub item_description: String,
    pub unit: String,
    pub issued_quantity: f64,
    pub work_location: String,
    pub priority_level: String,
    pub requested_by: String,
}
