//! 类型归档加载集成测试

mod common;

use common::{assertions::assert_ok, data_fixtures::*};
use std::io::Write;
use tempfile::NamedTempFile;
use typedef_cache::core::{ArchiveError, InstanceStatus, TypeCacheError, TypeDefCategory};
use typedef_cache::{ArchiveLoadReport, Config, TypeDefArchive, TypeDefCache};

const ARCHIVE_JSON: &str = r#"{
    "name": "core-types",
    "attribute_type_defs": [
        {"guid": "prim-string", "name": "string", "category": "Primitive"}
    ],
    "type_defs": [
        {
            "guid": "g-dataset",
            "name": "DataSet",
            "category": "EntityDef",
            "super_type": {"guid": "g-asset", "name": "Asset"},
            "properties": [
                {"attribute_name": "encodingStandard", "attribute_type": {"guid": "prim-string", "name": "string"}}
            ]
        },
        {
            "guid": "g-asset",
            "name": "Asset",
            "category": "EntityDef",
            "properties": [
                {"attribute_name": "qualifiedName", "attribute_type": {"guid": "prim-string", "name": "string"}, "is_unique": true}
            ],
            "valid_instance_statuses": ["Draft", "Active"],
            "initial_status": "Draft"
        },
        {
            "guid": "g-link",
            "name": "DataSetLink",
            "category": "RelationshipDef",
            "end_def_1": {"entity_type": {"guid": "g-dataset", "name": "DataSet"}, "attribute_name": "source"},
            "end_def_2": {"entity_type": {"guid": "g-dataset", "name": "DataSet"}, "attribute_name": "target"}
        }
    ]
}"#;

#[test]
fn test_load_archive_from_json() {
    let archive = assert_ok(TypeDefArchive::from_json_str(ARCHIVE_JSON));
    let cache = TypeDefCache::new();
    let report = assert_ok(archive.load_into(&cache));

    assert_eq!(
        report,
        ArchiveLoadReport {
            attribute_type_defs: 1,
            type_defs: 3,
        }
    );
    assert!(cache.is_type_of(Some("DataSet"), Some("Asset")));
    assert_eq!(
        cache.get_type_def_by_name("DataSetLink").map(|t| t.category()),
        Some(TypeDefCategory::RelationshipDef)
    );

    let keywords = assert_ok(cache.resolve_all_property_keywords("DataSet"));
    assert!(keywords["qualifiedName"].attribute().is_unique);
    assert_eq!(cache.initial_status("Asset"), Some(InstanceStatus::Draft));
}

#[test]
fn test_archive_file_roundtrip() {
    let mut archive = TypeDefArchive::new("fixtures");
    archive.attribute_type_defs = primitive_types();
    archive.type_defs = sample_type_defs().into_iter().rev().collect();

    let mut file = NamedTempFile::new().expect("创建临时文件失败");
    file.write_all(assert_ok(archive.to_json_string()).as_bytes())
        .expect("写入归档失败");

    let loaded = assert_ok(TypeDefArchive::load(file.path()));
    assert_eq!(loaded, archive);

    let cache = TypeDefCache::new();
    let report = assert_ok(loaded.load_into(&cache));
    assert_eq!(report.type_defs, sample_type_defs().len());
    assert!(cache.is_valid_classification_for_entity("Confidentiality", "DataSet"));
}

#[test]
fn test_archive_stops_at_structural_error() {
    let mut archive = TypeDefArchive::new("broken");
    archive.type_defs = vec![
        referenceable(),
        entity_type("g-bad", "Bad", None, &["dup", "dup"]),
    ];

    let cache = TypeDefCache::new();
    let result = archive.load_into(&cache);
    assert!(matches!(
        result,
        Err(ArchiveError::Cache(TypeCacheError::DuplicateProperty { .. }))
    ));
    assert!(cache.get_type_def_by_name("Referenceable").is_some());
    assert!(cache.get_type_def_by_name("Bad").is_none());
}

#[test]
fn test_missing_archive_file() {
    let result = TypeDefArchive::load("/nonexistent/archive.json");
    assert!(matches!(result, Err(ArchiveError::Io(_))));
}

#[test]
fn test_cache_built_from_config_file() {
    let mut file = NamedTempFile::new().expect("创建临时文件失败");
    file.write_all(b"[cache]\nmax_supertype_depth = 1\n")
        .expect("写入配置失败");
    let config = assert_ok(Config::load(file.path()));

    let cache = TypeDefCache::with_config(&config.cache);
    for type_def in sample_type_defs() {
        assert_ok(cache.add_type_def(type_def));
    }
    assert!(cache.resolve_all_super_types("Asset").is_ok());
    assert!(matches!(
        cache.resolve_all_super_types("DataSet"),
        Err(TypeCacheError::SupertypeDepthExceeded { max_depth: 1, .. })
    ));
}
