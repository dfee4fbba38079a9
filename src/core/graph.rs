//! 道路网络图模型
//!
//! 节点保存在图拥有的有序数组中，边只记录端点的稳定编号，不持有其他节点的引用。
//! 节点的插入顺序即所有算法的遍历顺序与平局裁决顺序。

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::core::error::{PatrolError, PatrolResult};

/// 默认道路权重
pub const DEFAULT_WEIGHT: u32 = 1;

/// 节点的稳定编号，创建时分配，不会复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 单向道路
///
/// 相等性只比较两个端点，权重不参与比较
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self::with_weight(source, target, DEFAULT_WEIGHT)
    }

    pub fn with_weight(source: NodeId, target: NodeId, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl Eq for Edge {}

/// 城市节点
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    edges: Vec<Edge>,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 替换全部出边
    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    /// 添加一条权重为 1 的出边
    pub fn connect(&mut self, target: NodeId) {
        self.connect_weighted(target, DEFAULT_WEIGHT);
    }

    pub fn connect_weighted(&mut self, target: NodeId, weight: u32) {
        self.edges.push(Edge::with_weight(self.id, target, weight));
    }

    /// 删除所有指向 `target` 的出边
    pub fn disconnect(&mut self, target: NodeId) {
        let probe = Edge::new(self.id, target);
        self.edges.retain(|edge| *edge != probe);
    }

    pub fn is_connected(&self, target: NodeId) -> bool {
        self.edges.iter().any(|edge| edge.target == target)
    }

    /// 结构相等：编号相同且出边端点序列逐一相同
    ///
    /// 与按编号的身份查找分开使用，转置后两个副本的结构相等性会随之改变
    pub fn same_structure(&self, other: &Node) -> bool {
        self.id == other.id && self.edges == other.edges
    }
}

/// 道路网络
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    positions: HashMap<NodeId, usize>,
    next_id: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由现成的节点构建图，拒绝重复编号
    pub fn from_nodes(nodes: Vec<Node>) -> PatrolResult<Self> {
        let mut positions = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if positions.insert(node.id, position).is_some() {
                return Err(PatrolError::DuplicateNode(node.id));
            }
        }
        let next_id = nodes.iter().map(|node| node.id.0 + 1).max().unwrap_or(0);
        Ok(Self {
            nodes,
            positions,
            next_id,
        })
    }

    /// 追加新节点，编号为当前最大编号加一（空图从 1 开始）
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.positions.insert(id, self.nodes.len());
        self.nodes.push(Node::new(id, name));
        id
    }

    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> PatrolResult<()> {
        self.add_weighted_edge(source, target, DEFAULT_WEIGHT)
    }

    pub fn add_weighted_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: u32,
    ) -> PatrolResult<()> {
        if !self.contains(target) {
            return Err(PatrolError::NodeNotFound(target));
        }
        self.node_mut(source)?.connect_weighted(target, weight);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    /// 节点在遍历顺序中的位置
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|node| node.id).collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.position(id).map(|position| &self.nodes[position])
    }

    pub fn node_mut(&mut self, id: NodeId) -> PatrolResult<&mut Node> {
        match self.position(id) {
            Some(position) => Ok(&mut self.nodes[position]),
            None => Err(PatrolError::NodeNotFound(id)),
        }
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn name_of(&self, id: NodeId) -> PatrolResult<&str> {
        self.node(id)
            .map(Node::name)
            .ok_or(PatrolError::NodeNotFound(id))
    }

    /// 目标节点在图内的出边
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.node(id)
            .map(Node::edges)
            .unwrap_or_default()
            .iter()
            .filter(|edge| self.contains(edge.target))
    }

    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.node(source)
            .is_some_and(|node| node.is_connected(target))
    }

    /// 所有边的 (起点, 终点) 对，按节点顺序与出边顺序排列
    pub fn edge_pairs(&self) -> Vec<(NodeId, NodeId)> {
        self.nodes
            .iter()
            .flat_map(|node| node.edges.iter().map(|edge| (edge.source, edge.target)))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }

    /// 把节点移到最前面，其余节点保持相对顺序
    pub fn move_to_front(&mut self, id: NodeId) -> PatrolResult<()> {
        let position = self.position(id).ok_or(PatrolError::NodeNotFound(id))?;
        self.nodes[..=position].rotate_right(1);
        self.reindex();
        Ok(())
    }

    /// 按给定顺序截取子图，只保留两端都在子集内的边
    pub fn subgraph(&self, ids: &[NodeId]) -> PatrolResult<Graph> {
        let keep: HashSet<NodeId> = ids.iter().copied().collect();
        let mut nodes = Vec::with_capacity(ids.len());
        for &id in ids {
            let node = self.node(id).ok_or(PatrolError::NodeNotFound(id))?;
            let mut copy = Node::new(node.id, node.name.clone());
            copy.set_edges(
                node.edges
                    .iter()
                    .filter(|edge| keep.contains(&edge.target))
                    .copied()
                    .collect(),
            );
            nodes.push(copy);
        }
        Graph::from_nodes(nodes)
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    fn reindex(&mut self) {
        self.positions = self
            .nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id, position))
            .collect();
    }
}
