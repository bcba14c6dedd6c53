// 查询模块
//
// - planner: 逻辑计划节点
// - optimizer: 计划指纹、子计划分析与计划缓存

pub mod optimizer;
pub mod planner;
