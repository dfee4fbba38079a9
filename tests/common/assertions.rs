//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use patrolgraph::core::Graph;
use patrolgraph::services::PatrolRoute;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言巡逻路线是原图上的闭合行走
///
/// 从起点出发，相邻两站之间、以及最后一站回到起点都必须有道路
pub fn assert_closed_walk(graph: &Graph, route: &PatrolRoute) {
    assert_eq!(route.stops.first(), Some(&route.start), "路线应从起点出发");
    for (i, from) in route.stops.iter().enumerate() {
        let to = route.stops[(i + 1) % route.stops.len()];
        assert!(
            graph.has_edge(*from, to),
            "路线中缺少道路 {} -> {}",
            from,
            to
        );
    }
}
