pub mod error;
pub mod graph;

// 错误和结果类型
pub use error::{PatrolError, PatrolResult};

// 图模型
pub use graph::{Edge, Graph, Node, NodeId, DEFAULT_WEIGHT};
