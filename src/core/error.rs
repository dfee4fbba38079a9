//! 统一错误处理系统 for patrolgraph
//!
//! ## 设计理念
//!
//! 1. **单一枚举**：解析、图操作、求解和配置错误共用 `PatrolError`
//! 2. **断言转错误**：输入契约被破坏（节点数量不符、巡逻分量不连通）时返回错误，
//!    由可执行程序决定是否终止进程
//! 3. **统一接口**：`PatrolResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

use crate::core::graph::NodeId;

/// 统一的错误类型
#[derive(Error, Debug)]
pub enum PatrolError {
    #[error("解析错误: {0}")]
    Parse(String),

    #[error("节点数量不匹配: 声明 {expected} 个, 实际出现 {found} 个")]
    NodeCountMismatch { expected: usize, found: usize },

    #[error("节点未找到: {0}")]
    NodeNotFound(NodeId),

    #[error("重复的节点编号: {0}")]
    DuplicateNode(NodeId),

    #[error("巡逻分量不连通: 期望 1 个遍历组, 实际 {0} 个")]
    FragmentedComponent(usize),

    #[error("巡逻路线无法连接: {from} -> {to}")]
    RouteUnreachable { from: NodeId, to: NodeId },

    #[error("没有节点能够到达其余所有节点, 无法确定首都")]
    NoCapital,

    #[error("配置错误: {0}")]
    Config(String),

    #[error("日志错误: {0}")]
    Logging(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 统一的结果类型
pub type PatrolResult<T> = Result<T, PatrolError>;

impl From<toml::de::Error> for PatrolError {
    fn from(e: toml::de::Error) -> Self {
        PatrolError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for PatrolError {
    fn from(e: toml::ser::Error) -> Self {
        PatrolError::Config(e.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for PatrolError {
    fn from(e: flexi_logger::FlexiLoggerError) -> Self {
        PatrolError::Logging(e.to_string())
    }
}
