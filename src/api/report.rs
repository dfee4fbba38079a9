//! 求解结果的文本输出与比较
//!
//! 输出格式：
//! - 第 1 行：首都名
//! - 没有营地时一行 `0`，否则营地数量后每行一个营地名
//! - 巡逻路线数量，随后每行一条路线，站名以空格分隔

use std::collections::BTreeSet;

use crate::core::error::{PatrolError, PatrolResult};
use crate::core::graph::Graph;
use crate::services::realm::Survey;

/// 把求解结果渲染为文本，没有首都时返回 `NoCapital`
pub fn render(graph: &Graph, survey: &Survey) -> PatrolResult<String> {
    let capital = survey.capital.ok_or(PatrolError::NoCapital)?;
    let mut lines = vec![graph.name_of(capital)?.to_string()];

    if !survey.has_battalions {
        lines.push("0".to_string());
    } else {
        lines.push(survey.battalions.len().to_string());
        for id in &survey.battalions {
            lines.push(graph.name_of(*id)?.to_string());
        }
    }

    lines.push(survey.patrols.len().to_string());
    for route in &survey.patrols {
        let stops = route
            .stops
            .iter()
            .map(|id| graph.name_of(*id))
            .collect::<PatrolResult<Vec<_>>>()?;
        lines.push(stops.join(" "));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// 报告的可比较形式
#[derive(Debug, PartialEq, Eq)]
struct ReportShape {
    capital: String,
    battalions: BTreeSet<String>,
    battalion_count: usize,
    route_count: usize,
    route_names: BTreeSet<String>,
}

impl ReportShape {
    fn parse(text: &str) -> Option<Self> {
        let mut lines = text.lines();
        let capital = lines.next()?.trim().to_string();

        let battalion_count: usize = lines.next()?.trim().parse().ok()?;
        let mut battalions = BTreeSet::new();
        for _ in 0..battalion_count {
            battalions.insert(lines.next()?.trim().to_string());
        }

        let route_count: usize = lines.next()?.trim().parse().ok()?;
        let mut route_names = BTreeSet::new();
        for _ in 0..route_count {
            route_names.extend(lines.next()?.split_whitespace().map(str::to_string));
        }

        Some(Self {
            capital,
            battalions,
            battalion_count,
            route_count,
            route_names,
        })
    }
}

/// 比较两份报告是否等价
///
/// 首都相同；营地数量相同且营地集合相同；路线数量相同且所有路线涉及的站名集合相同。
/// 营地与路线的排列顺序、路线内的站序不参与比较。
pub fn equivalent(expected: &str, actual: &str) -> bool {
    match (ReportShape::parse(expected), ReportShape::parse(actual)) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::NodeId;
    use crate::services::realm::PatrolRoute;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        for name in ["cap", "x", "y"] {
            graph.add_node(name);
        }
        graph
    }

    #[test]
    fn test_render_full_report() {
        let graph = sample_graph();
        let survey = Survey {
            capital: Some(NodeId(1)),
            battalions: vec![NodeId(2)],
            patrols: vec![PatrolRoute {
                start: NodeId(2),
                stops: vec![NodeId(2), NodeId(3)],
            }],
            has_battalions: true,
        };
        let text = render(&graph, &survey).expect("render");
        assert_eq!(text, "cap\n1\nx\n1\nx y\n");
    }

    #[test]
    fn test_render_without_battalions() {
        let graph = sample_graph();
        let survey = Survey {
            capital: Some(NodeId(1)),
            has_battalions: false,
            ..Survey::default()
        };
        assert_eq!(render(&graph, &survey).expect("render"), "cap\n0\n0\n");
    }

    #[test]
    fn test_render_requires_capital() {
        let graph = sample_graph();
        let result = render(&graph, &Survey::default());
        assert!(matches!(result, Err(PatrolError::NoCapital)));
    }

    #[test]
    fn test_equivalent_ignores_order() {
        let expected = "cap\n2\nx\ny\n2\nx z\ny w\n";
        let actual = "cap\n2\ny\nx\n2\nw y\nz x\n";
        assert!(equivalent(expected, actual));
    }

    #[test]
    fn test_equivalent_detects_differences() {
        let expected = "cap\n1\nx\n1\nx y\n";
        assert!(!equivalent(expected, "other\n1\nx\n1\nx y\n"));
        assert!(!equivalent(expected, "cap\n1\ny\n1\nx y\n"));
        assert!(!equivalent(expected, "cap\n1\nx\n1\nx\n"));
        assert!(!equivalent(expected, "cap\n1\n"));
    }
}
