//! 强连通分量算法模块
//!
//! 基于两次DFS的Kosaraju算法：第一次在原图上记录完成时间，转置后按完成时间降序
//! 作为遍历根再做一次DFS，每棵遍历树就是一个强连通分量。算法结束时图会被转置回原样。

use std::collections::HashSet;

use crate::core::graph::{Graph, NodeId};
use crate::services::algorithm::dfs::{Dfs, NodeVisitor, NullVisitor, TraversalContext};
use crate::services::algorithm::transpose::Transpose;

/// 一个强连通分量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// 去重后的成员，按首次访问顺序
    pub members: Vec<NodeId>,
    /// 访问者看到的原始节点流，回溯时会重新插入父节点
    pub trail: Vec<NodeId>,
}

impl Component {
    fn from_trail(trail: Vec<NodeId>) -> Self {
        let mut seen = HashSet::with_capacity(trail.len());
        let members = trail.iter().copied().filter(|id| seen.insert(*id)).collect();
        Self { members, trail }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// 分量中按首次访问顺序的第一个节点
    pub fn first(&self) -> Option<NodeId> {
        self.members.first().copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    pub fn is_singleton_of(&self, id: NodeId) -> bool {
        self.members.len() == 1 && self.members[0] == id
    }
}

/// 按遍历树分组的访问者
///
/// 遍历根变化时结束当前分组。若新节点的父节点不是上一个访问的节点，
/// 先把父节点补进分组，使节点流在回溯处仍然连贯。
#[derive(Debug, Default)]
pub struct GroupingVisitor {
    groups: Vec<Vec<NodeId>>,
    current: Vec<NodeId>,
    current_root: Option<NodeId>,
    previous: Option<NodeId>,
}

impl GroupingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 结束遍历，返回所有分组
    pub fn finish(mut self) -> Vec<Component> {
        if !self.current.is_empty() {
            self.groups.push(std::mem::take(&mut self.current));
        }
        self.groups.into_iter().map(Component::from_trail).collect()
    }
}

impl NodeVisitor for GroupingVisitor {
    fn visit(&mut self, node: NodeId, context: &TraversalContext) {
        let root = *self.current_root.get_or_insert(context.root);

        if root != context.root && !self.current.is_empty() {
            self.groups.push(std::mem::take(&mut self.current));
            self.current_root = Some(context.root);
        }

        if let (Some(previous), Some(predecessor)) = (self.previous, context.predecessor) {
            if previous != predecessor {
                self.current.push(predecessor);
            }
        }

        self.current.push(node);
        self.previous = Some(node);
    }
}

/// 强连通分量算法结构体
pub struct StronglyConnectedComponents;

impl StronglyConnectedComponents {
    /// 使用Kosaraju算法查找有向图的所有强连通分量
    ///
    /// 图在计算过程中被转置两次，返回时边关系与调用前一致
    pub fn find(graph: &mut Graph) -> Vec<Component> {
        let outcome = Dfs::run(graph, &mut NullVisitor);

        Transpose::apply(graph);

        // 稳定排序：完成时间相同的节点保持原有相对顺序
        let mut order = graph.node_ids();
        order.sort_by(|a, b| outcome.finish_time(*b).cmp(&outcome.finish_time(*a)));

        let mut visitor = GroupingVisitor::new();
        Dfs::run_in_order(graph, &order, &mut visitor);

        Transpose::apply(graph);

        let components = visitor.finish();
        log::debug!(
            "Kosaraju: {} 个节点, {} 个强连通分量",
            graph.len(),
            components.len()
        );
        components
    }

    /// 计算强连通分量的数量
    pub fn count(graph: &mut Graph) -> usize {
        Self::find(graph).len()
    }

    /// 查找包含指定节点的强连通分量
    pub fn find_component_of(graph: &mut Graph, node: NodeId) -> Option<Component> {
        Self::find(graph)
            .into_iter()
            .find(|component| component.contains(node))
    }

    /// 检查图是否是强连通的（只有一个强连通分量）
    pub fn is_strongly_connected(graph: &mut Graph) -> bool {
        Self::count(graph) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(count: usize, edges: &[(usize, usize)]) -> (Graph, Vec<NodeId>) {
        let mut graph = Graph::new();
        let ids: Vec<NodeId> = (1..=count)
            .map(|i| graph.add_node(format!("n{}", i)))
            .collect();
        for &(from, to) in edges {
            graph
                .add_edge(ids[from - 1], ids[to - 1])
                .expect("fixture edge");
        }
        (graph, ids)
    }

    fn member_sets(components: &[Component]) -> Vec<Vec<usize>> {
        let mut sets: Vec<Vec<usize>> = components
            .iter()
            .map(|component| {
                let mut ids: Vec<usize> = component.members.iter().map(|id| id.0).collect();
                ids.sort();
                ids
            })
            .collect();
        sets.sort();
        sets
    }

    #[test]
    fn test_find_scc_simple() {
        let (mut graph, _) = build(3, &[(1, 2), (2, 1), (3, 2)]);
        let components = StronglyConnectedComponents::find(&mut graph);
        assert_eq!(member_sets(&components), vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_find_scc_two_cycles() {
        let (mut graph, _) = build(5, &[(1, 2), (2, 3), (3, 1), (2, 4), (4, 5), (5, 4)]);
        let components = StronglyConnectedComponents::find(&mut graph);
        assert_eq!(member_sets(&components), vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_isolated_nodes() {
        let (mut graph, _) = build(5, &[(4, 5), (5, 4)]);
        let components = StronglyConnectedComponents::find(&mut graph);
        assert_eq!(
            member_sets(&components),
            vec![vec![1], vec![2], vec![3], vec![4, 5]]
        );
    }

    #[test]
    fn test_full_cycle() {
        let (mut graph, _) = build(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]);
        assert!(StronglyConnectedComponents::is_strongly_connected(&mut graph));
        let component = StronglyConnectedComponents::find_component_of(&mut graph, NodeId(3))
            .expect("component of node 3");
        assert_eq!(component.len(), 4);
    }

    #[test]
    fn test_graph_restored_after_find() {
        let (mut graph, _) = build(4, &[(1, 2), (2, 3), (3, 1), (3, 4)]);
        let mut before = graph.edge_pairs();
        StronglyConnectedComponents::find(&mut graph);
        let mut after = graph.edge_pairs();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = Graph::new();
        assert!(StronglyConnectedComponents::find(&mut graph).is_empty());
    }

    #[test]
    fn test_trail_reinserts_predecessor_on_backtrack() {
        // 转置后 1 -> 2, 1 -> 3：访问 2 之后回溯到 1 再访问 3
        let (mut graph, ids) = build(3, &[(1, 2), (2, 1), (1, 3), (3, 1)]);
        let components = StronglyConnectedComponents::find(&mut graph);
        assert_eq!(components.len(), 1);

        let component = &components[0];
        assert_eq!(component.members.len(), 3);
        assert_eq!(component.trail.len(), 4);
        assert_eq!(component.trail[0], component.trail[2]);
        assert!(component.members.iter().all(|id| ids.contains(id)));
    }

    #[test]
    fn test_grouping_visitor_splits_on_new_root() {
        let (graph, ids) = build(3, &[(1, 2)]);
        let mut visitor = GroupingVisitor::new();
        Dfs::run(&graph, &mut visitor);
        let groups = visitor.finish();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].trail, vec![ids[0], ids[1]]);
        assert_eq!(groups[1].trail, vec![ids[2]]);
    }
}
