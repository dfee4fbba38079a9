//! 集成测试共享工具模块
//!
//! 提供测试图的构造函数和暴力可达性检查，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::collections::{HashSet, VecDeque};

use patrolgraph::core::{Graph, NodeId};

/// 按名字构造有向图，节点编号按 `names` 的顺序分配
pub fn build_graph(names: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for name in names {
        graph.add_node(*name);
    }
    for (from, to) in edges {
        let source = node_id(&graph, from);
        let target = node_id(&graph, to);
        graph.add_edge(source, target).expect("测试图的道路应该合法");
    }
    graph
}

/// 按名字查找节点编号
pub fn node_id(graph: &Graph, name: &str) -> NodeId {
    graph
        .node_by_name(name)
        .unwrap_or_else(|| panic!("测试图中没有节点 {}", name))
        .id()
}

/// 把节点编号序列转换为名字
pub fn names(graph: &Graph, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .map(|id| graph.name_of(*id).expect("节点应该存在").to_string())
        .collect()
}

/// 广度优先求跳数，作为最短路径的对照
pub fn bfs_hops(graph: &Graph, source: NodeId) -> Vec<(NodeId, usize)> {
    let mut seen = HashSet::from([source]);
    let mut queue = VecDeque::from([(source, 0usize)]);
    let mut hops = Vec::new();

    while let Some((node, depth)) = queue.pop_front() {
        if node != source {
            hops.push((node, depth));
        }
        for edge in graph.neighbors(node) {
            if seen.insert(edge.target) {
                queue.push_back((edge.target, depth + 1));
            }
        }
    }
    hops
}

/// `from` 能否沿道路到达 `to`
pub fn reaches(graph: &Graph, from: NodeId, to: NodeId) -> bool {
    from == to || bfs_hops(graph, from).iter().any(|(node, _)| *node == to)
}
