//! 服务层模块
//!
//! 图算法与建立在其上的首都/营地/巡逻求解

pub mod algorithm;
pub mod realm;

// 重新导出常用服务
pub use algorithm::*;
pub use realm::{PatrolRoute, Realm, Survey};
