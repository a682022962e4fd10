//! 实例状态与实例类型摘要

use super::{TypeDefCategory, TypeDefLink};
use serde::{Deserialize, Serialize};

/// 元数据实例的生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstanceStatus {
    Unknown,
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    ApprovedConcept,
    Active,
    Deprecated,
    Other,
    Deleted,
}

/// 创建实例时使用的类型摘要
///
/// 由缓存按类型名延迟构建，类型定义变化时失效
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceType {
    pub category: TypeDefCategory,
    pub type_def_guid: String,
    pub type_def_name: String,
    pub type_def_version: u64,
    pub type_def_description: Option<String>,
    /// 由近及远
    pub super_types: Vec<TypeDefLink>,
    pub valid_instance_properties: Vec<String>,
    pub valid_statuses: Vec<InstanceStatus>,
}

impl InstanceType {
    pub fn is_valid_status(&self, status: InstanceStatus) -> bool {
        self.valid_statuses.contains(&status)
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.valid_instance_properties.iter().any(|p| p == property)
    }
}
