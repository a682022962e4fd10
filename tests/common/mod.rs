//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::sync::Arc;
use typedef_cache::TypeDefCache;

/// 预先注册了示例类型体系的缓存
///
/// Referenceable <- Asset <- DataSet, Referenceable <- Process,
/// 分类 Confidentiality 仅适用于 Asset，关系 DataContentForDataSet 连接 Asset 与 DataSet
pub fn populated_cache() -> Arc<TypeDefCache> {
    let cache = Arc::new(TypeDefCache::new());
    for attribute_type_def in data_fixtures::primitive_types() {
        cache.add_attribute_type_def(attribute_type_def);
    }
    for type_def in data_fixtures::sample_type_defs() {
        cache.add_type_def(type_def).expect("注册示例类型失败");
    }
    cache
}
