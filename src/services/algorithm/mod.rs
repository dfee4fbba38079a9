//! 算法模块
//!
//! 包含图相关算法实现

pub mod dfs;
pub mod dijkstra;
pub mod strongly_connected_components;
pub mod transpose;

// 重新导出常用算法结构体
pub use dfs::{Dfs, DfsOutcome, NodeVisitor, NullVisitor, TraversalContext, VisitState};
pub use dijkstra::Dijkstra;
pub use strongly_connected_components::{Component, GroupingVisitor, StronglyConnectedComponents};
pub use transpose::Transpose;
