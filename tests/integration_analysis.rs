//! 子计划分析与计划缓存集成测试
//!
//! 测试范围:
//! - 重复子计划识别
//! - 以子树指纹为键的计划缓存
//! - 批量指纹计算

mod common;

use std::sync::Arc;
use std::thread;

use common::*;
use plan_fingerprint::config::{Config, FingerprintConfig};
use plan_fingerprint::core::PlanCacheError;
use plan_fingerprint::query::optimizer::analysis::{FingerprintCalculator, ReferenceCountAnalyzer};
use plan_fingerprint::query::optimizer::decision::{PlanCache, PlanCacheConfig, PlanCacheKey};
use plan_fingerprint::query::planner::plan::core::{
    DataSourceNode, LimitNode, NodeIdGenerator, PlanNodeEnum, ProjectionNode,
};

#[test]
fn test_repeated_subplan_detected_after_clone() {
    let id_gen = NodeIdGenerator::new();
    let subplan = limited_selection(&id_gen);
    let copy = subplan.clone_with_new_ids(&id_gen);
    let (subplan_id, copy_id) = (subplan.id(), copy.id());
    let join = cross_join(&id_gen, subplan, copy);
    let join_id = join.id();

    let analysis = ReferenceCountAnalyzer::new().analyze(&join);

    // Limit、Selection、TableDual 三层子树各出现两次
    assert_eq!(analysis.repeated_count(), 3);
    assert!(analysis.is_repeated(subplan_id));
    assert!(analysis.is_repeated(copy_id));
    assert!(!analysis.is_repeated(join_id));

    let info = analysis
        .get_node_info(copy_id)
        .expect("copied subplan should be reported");
    assert_eq!(info.root_node_id, subplan_id);
    assert_eq!(info.reference_count, 2);
    assert_eq!(info.node_count, 3);
    assert_eq!(info.reference_locations, vec![join_id]);

    let node_counts: Vec<usize> = analysis.repeated_subplans.iter().map(|i| i.node_count).collect();
    assert!(node_counts.contains(&1));
    assert!(node_counts.contains(&2));
    assert!(node_counts.contains(&3));
}

#[test]
fn test_analysis_is_deterministic() {
    let id_gen = NodeIdGenerator::new();
    let subplan = limited_selection(&id_gen);
    let copy = subplan.clone_with_new_ids(&id_gen);
    let join = cross_join(&id_gen, subplan, copy);

    let analyzer = ReferenceCountAnalyzer::new();
    let first: Vec<i64> = analyzer
        .analyze(&join)
        .repeated_subplans
        .iter()
        .map(|i| i.root_node_id)
        .collect();
    for _ in 0..5 {
        let again: Vec<i64> = analyzer
            .analyze(&join)
            .repeated_subplans
            .iter()
            .map(|i| i.root_node_id)
            .collect();
        assert_eq!(first, again);
    }
}

#[test]
fn test_identity_kinds_never_repeat() {
    let id_gen = NodeIdGenerator::new();
    let source = || -> PlanNodeEnum {
        DataSourceNode::new(&id_gen, "t", vec![col(1)])
            .expect("DataSource node should be created successfully")
            .into()
    };
    let join = cross_join(&id_gen, source(), source());
    let analysis = ReferenceCountAnalyzer::new().analyze(&join);
    assert_eq!(analysis.repeated_count(), 0);
}

#[test]
fn test_plan_cache_keyed_by_subtree() {
    let cache: PlanCache<String> = PlanCache::with_default_config().expect("创建缓存失败");
    let calc = FingerprintCalculator::new();

    // 两次独立构造的等价计划
    let first_gen = NodeIdGenerator::new();
    let first = limited_selection(&first_gen);
    let second_gen = NodeIdGenerator::new();
    let second = limited_selection(&second_gen);

    let key = PlanCacheKey::from_plan(&calc, &first, 1);
    cache.insert(key, "physical-plan".to_string());

    let lookup = PlanCacheKey::from_plan(&calc, &second, 1);
    assert_eq!(cache.get(&lookup).as_deref(), Some("physical-plan"));

    // 模式版本变化后失效
    let stale = PlanCacheKey::from_plan(&calc, &second, 2);
    assert_eq!(cache.get(&stale), None);
    assert_eq!(cache.invalidate_schema_version(2), 1);
    assert!(cache.is_empty());

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

fn scan(id_gen: &NodeIdGenerator, table: &str) -> PlanNodeEnum {
    let source: PlanNodeEnum = DataSourceNode::new(id_gen, table, vec![col(1)])
        .expect("DataSource node should be created successfully")
        .into();
    LimitNode::new(id_gen, source, 0, 10).into()
}

#[test]
fn test_unrelated_sources_do_not_share_cache_entry() {
    let cache: PlanCache<String> = PlanCache::with_default_config().expect("创建缓存失败");
    let calc = FingerprintCalculator::new();

    // 各自使用新的生成器，节点ID仍然不同
    let orders = scan(&NodeIdGenerator::new(), "orders");
    let users = scan(&NodeIdGenerator::new(), "users");
    assert_ne!(orders.children()[0].id(), users.children()[0].id());
    assert_ne!(
        calc.calculate_subtree_fingerprint(&orders),
        calc.calculate_subtree_fingerprint(&users)
    );

    cache.insert(
        PlanCacheKey::from_plan(&calc, &orders, 1),
        "scan orders".to_string(),
    );
    assert_eq!(cache.get(&PlanCacheKey::from_plan(&calc, &users, 1)), None);
    assert_eq!(
        cache
            .get(&PlanCacheKey::from_plan(&calc, &orders, 1))
            .as_deref(),
        Some("scan orders")
    );
}

#[test]
fn test_copy_with_fresh_generator_not_repeated() {
    let id_gen = NodeIdGenerator::new();
    let original = scan(&id_gen, "orders");
    let copy = original.clone_with_new_ids(&NodeIdGenerator::new());
    let join = cross_join(&id_gen, original, copy);

    let analysis = ReferenceCountAnalyzer::new().analyze(&join);
    assert_eq!(analysis.repeated_count(), 0);
}

#[test]
fn test_plan_cache_from_config() {
    let config = Config::from_toml_str(
        r#"
        [plan_cache]
        max_entries = 1
        ttl_seconds = 60
        "#,
    )
    .expect("config should parse");
    let cache: PlanCache<u32> =
        PlanCache::new(PlanCacheConfig::from(config.plan_cache)).expect("创建缓存失败");
    let calc = FingerprintCalculator::new();
    let id_gen = NodeIdGenerator::new();

    cache.insert(PlanCacheKey::from_plan(&calc, &dual(&id_gen, 0), 1), 0);
    cache.insert(PlanCacheKey::from_plan(&calc, &dual(&id_gen, 1), 1), 1);
    assert_eq!(cache.size(), 1);
    assert_eq!(cache.stats().evictions, 1);

    let zero = PlanCacheConfig {
        max_entries: 0,
        ..PlanCacheConfig::default()
    };
    assert!(matches!(
        PlanCache::<u32>::new(zero),
        Err(PlanCacheError::ZeroCapacity)
    ));
}

#[test]
fn test_plan_cache_shared_between_threads() {
    let cache: Arc<PlanCache<usize>> =
        Arc::new(PlanCache::with_default_config().expect("创建缓存失败"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let id_gen = NodeIdGenerator::new();
                let plan = limited_selection(&id_gen);
                let key = PlanCacheKey::from_plan(&FingerprintCalculator::new(), &plan, 7);
                cache
                    .get_or_compute(key, || Ok(plan.node_count()))
                    .expect("计算不应失败")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("线程不应 panic"), 3);
    }
    assert_eq!(cache.size(), 1);
}

#[test]
fn test_batch_matches_sequential() {
    let id_gen = NodeIdGenerator::new();
    let plans: Vec<PlanNodeEnum> = (0..64)
        .map(|i| {
            ProjectionNode::new(&id_gen, dual(&id_gen, 1), vec![col(i), int(i)])
                .expect("Projection node should be created successfully")
                .into()
        })
        .collect();

    let parallel = FingerprintCalculator::with_config(FingerprintConfig {
        parallel_batch_threshold: 2,
        ..FingerprintConfig::default()
    });
    let sequential = FingerprintCalculator::with_config(FingerprintConfig {
        parallel_batch_threshold: usize::MAX,
        ..FingerprintConfig::default()
    });

    assert_eq!(parallel.calculate_batch(&plans), sequential.calculate_batch(&plans));
    assert_eq!(
        parallel.calculate_subtree_batch(&plans),
        plans
            .iter()
            .map(|p| sequential.calculate_subtree_fingerprint(p))
            .collect::<Vec<_>>()
    );
}
