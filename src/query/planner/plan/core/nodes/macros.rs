//! 计划节点宏定义
//!
//! 提供宏来简化计划节点的定义，减少样板代码。
//!
//! 生成的结构体带有 `id`、`block_offset` 两个公共字段以及按输入类型确定的
//! 子节点字段，并实现 [`PlanNode`] 与对应的输入特征。节点不实现 `Clone`，
//! 复制计划请使用 `clone_with_new_ids`，复制出的每个节点都会从生成器领取新ID。
//!
//! [`PlanNode`]: crate::query::planner::plan::core::nodes::plan_node_traits::PlanNode

/// 定义计划节点的宏
///
/// # 示例
/// ```ignore
/// define_plan_node! {
///     pub struct LimitNode {
///         offset: u64,
///         count: u64,
///     }
///     plan_type: Limit
///     input: SingleInputNode
/// }
/// ```
#[macro_export]
macro_rules! define_plan_node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        plan_type: $variant:ident
        input: ZeroInputNode
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            id: i64,
            block_offset: u32,
            $($field: $type,)*
        }

        impl $name {
            pub fn clone_with_new_ids(
                &self,
                id_gen: &$crate::query::planner::plan::core::NodeIdGenerator,
            ) -> Self {
                Self {
                    id: id_gen.next_id(),
                    block_offset: self.block_offset,
                    $($field: self.$field.clone(),)*
                }
            }
        }

        $crate::define_plan_node!(@common $name, $variant);

        impl $crate::query::planner::plan::core::nodes::plan_node_traits::ZeroInputNode for $name {}
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        plan_type: $variant:ident
        input: SingleInputNode
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            id: i64,
            block_offset: u32,
            input: Box<$crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum>,
            $($field: $type,)*
        }

        impl $name {
            pub fn clone_with_new_ids(
                &self,
                id_gen: &$crate::query::planner::plan::core::NodeIdGenerator,
            ) -> Self {
                let id = id_gen.next_id();
                Self {
                    id,
                    block_offset: self.block_offset,
                    input: Box::new(self.input.clone_with_new_ids(id_gen)),
                    $($field: self.$field.clone(),)*
                }
            }
        }

        $crate::define_plan_node!(@common $name, $variant);

        impl $crate::query::planner::plan::core::nodes::plan_node_traits::SingleInputNode for $name {
            fn input(&self) -> &$crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum {
                &self.input
            }

            fn set_input(
                &mut self,
                input: $crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum,
            ) {
                self.input = Box::new(input);
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        plan_type: $variant:ident
        input: BinaryInputNode
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            id: i64,
            block_offset: u32,
            left: Box<$crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum>,
            right: Box<$crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum>,
            $($field: $type,)*
        }

        impl $name {
            pub fn clone_with_new_ids(
                &self,
                id_gen: &$crate::query::planner::plan::core::NodeIdGenerator,
            ) -> Self {
                let id = id_gen.next_id();
                let left = Box::new(self.left.clone_with_new_ids(id_gen));
                let right = Box::new(self.right.clone_with_new_ids(id_gen));
                Self {
                    id,
                    block_offset: self.block_offset,
                    left,
                    right,
                    $($field: self.$field.clone(),)*
                }
            }
        }

        $crate::define_plan_node!(@common $name, $variant);

        impl $crate::query::planner::plan::core::nodes::plan_node_traits::BinaryInputNode for $name {
            fn left_input(&self) -> &$crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum {
                &self.left
            }

            fn right_input(&self) -> &$crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum {
                &self.right
            }

            fn set_left_input(
                &mut self,
                input: $crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum,
            ) {
                self.left = Box::new(input);
            }

            fn set_right_input(
                &mut self,
                input: $crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum,
            ) {
                self.right = Box::new(input);
            }
        }
    };

    (@common $name:ident, $variant:ident) => {
        impl $name {
            pub fn id(&self) -> i64 {
                self.id
            }

            pub fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            pub fn block_offset(&self) -> u32 {
                self.block_offset
            }

            pub fn set_block_offset(&mut self, offset: u32) {
                self.block_offset = offset;
            }

            pub fn with_block_offset(mut self, offset: u32) -> Self {
                self.block_offset = offset;
                self
            }
        }

        impl $crate::query::planner::plan::core::nodes::plan_node_traits::PlanNode for $name {
            fn id(&self) -> i64 {
                self.id
            }

            fn name(&self) -> &'static str {
                self.type_name()
            }

            fn plan_type(&self) -> $crate::query::planner::plan::core::nodes::plan_type::PlanType {
                $crate::query::planner::plan::core::nodes::plan_type::PlanType::$variant
            }

            fn block_offset(&self) -> u32 {
                self.block_offset
            }

            fn set_block_offset(&mut self, offset: u32) {
                self.block_offset = offset;
            }

            fn into_enum(self) -> $crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum {
                $crate::query::planner::plan::core::nodes::plan_node_enum::PlanNodeEnum::$variant(self)
            }
        }
    };
}
