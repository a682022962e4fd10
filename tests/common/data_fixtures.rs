//! 测试数据生成模块
//!
//! 提供示例类型体系的生成函数

use typedef_cache::core::{
    AttributeTypeDef, AttributeTypeDefCategory, InstanceStatus, RelationshipEndDef, TypeDef,
    TypeDefAttribute, TypeDefKind, TypeDefLink,
};

pub const STRING_GUID: &str = "b34a64b9-554a-42b1-8f8a-7d5c2339f9c4";
pub const INT_GUID: &str = "7fc49104-fd3a-46c8-b6bf-f16b6074cd35";

pub const REFERENCEABLE_GUID: &str = "a32316b8-dc8c-48c5-b12b-71c1b2a080bf";
pub const ASSET_GUID: &str = "896d14c2-7522-4f6c-8519-757711943fe6";
pub const DATASET_GUID: &str = "1449911c-4f44-4c22-abc0-7540154feefb";
pub const PROCESS_GUID: &str = "d8f33bd7-afa9-4a11-a8c7-07dcec83c050";
pub const CONFIDENTIALITY_GUID: &str = "742ddb7d-9a4a-4eb5-8ac2-1d69953bd2b6";
pub const DATA_CONTENT_GUID: &str = "b827683c-2924-4df3-a92d-7be1888e23c0";

pub fn link(guid: &str, name: &str) -> TypeDefLink {
    TypeDefLink::new(guid, name)
}

pub fn string_property(name: &str) -> TypeDefAttribute {
    TypeDefAttribute::new(name, link(STRING_GUID, "string"))
}

pub fn int_property(name: &str) -> TypeDefAttribute {
    TypeDefAttribute::new(name, link(INT_GUID, "int"))
}

pub fn primitive_types() -> Vec<AttributeTypeDef> {
    vec![
        AttributeTypeDef::new(STRING_GUID, "string", AttributeTypeDefCategory::Primitive),
        AttributeTypeDef::new(INT_GUID, "int", AttributeTypeDefCategory::Primitive),
    ]
}

/// 创建实体类型
pub fn entity_type(guid: &str, name: &str, super_type: Option<TypeDefLink>, properties: &[&str]) -> TypeDef {
    TypeDef::entity(guid, name)
        .with_super_type(super_type)
        .with_properties(properties.iter().map(|p| string_property(p)).collect())
        .with_statuses(
            vec![InstanceStatus::Active, InstanceStatus::Deleted],
            Some(InstanceStatus::Active),
        )
}

pub fn referenceable() -> TypeDef {
    entity_type(REFERENCEABLE_GUID, "Referenceable", None, &["qualifiedName"])
}

pub fn asset() -> TypeDef {
    entity_type(
        ASSET_GUID,
        "Asset",
        Some(link(REFERENCEABLE_GUID, "Referenceable")),
        &["displayName", "description"],
    )
}

pub fn data_set() -> TypeDef {
    entity_type(
        DATASET_GUID,
        "DataSet",
        Some(link(ASSET_GUID, "Asset")),
        &["displayName", "encodingStandard"],
    )
}

pub fn process() -> TypeDef {
    entity_type(
        PROCESS_GUID,
        "Process",
        Some(link(REFERENCEABLE_GUID, "Referenceable")),
        &["formula"],
    )
}

pub fn confidentiality() -> TypeDef {
    TypeDef::new(
        CONFIDENTIALITY_GUID,
        "Confidentiality",
        TypeDefKind::classification(vec![link(ASSET_GUID, "Asset")]),
    )
    .with_properties(vec![int_property("level"), string_property("notes")])
    .with_statuses(vec![InstanceStatus::Active], Some(InstanceStatus::Active))
}

pub fn data_content_for_data_set() -> TypeDef {
    TypeDef::new(
        DATA_CONTENT_GUID,
        "DataContentForDataSet",
        TypeDefKind::RelationshipDef {
            end_def_1: RelationshipEndDef::new(link(ASSET_GUID, "Asset"), "dataContent"),
            end_def_2: RelationshipEndDef::new(link(DATASET_GUID, "DataSet"), "supportedDataSets"),
        },
    )
    .with_property(string_property("queryId"))
    .with_statuses(vec![InstanceStatus::Active], Some(InstanceStatus::Proposed))
}

pub fn sample_type_defs() -> Vec<TypeDef> {
    vec![
        referenceable(),
        asset(),
        data_set(),
        process(),
        confidentiality(),
        data_content_for_data_set(),
    ]
}
