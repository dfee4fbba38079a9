//! Dijkstra算法模块
//!
//! 包含带权图最短路径算法实现。结果中不包含起点本身，不可达节点不会出现在结果里。

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::error::{PatrolError, PatrolResult};
use crate::core::graph::{Graph, NodeId};

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
///
/// 距离相同时先入队者优先
#[derive(Debug, Clone, Eq, PartialEq)]
struct NodeDistance {
    node: NodeId,
    distance: u64,
    sequence: u64,
}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 一次完整松弛的结果
struct Relaxation {
    distances: HashMap<NodeId, u64>,
    predecessors: HashMap<NodeId, NodeId>,
    /// 沿前驱链到起点的跳数
    hops: HashMap<NodeId, usize>,
}

impl Dijkstra {
    /// 计算从起点到所有可达节点的最短距离
    pub fn shortest_distances(
        graph: &Graph,
        source: NodeId,
    ) -> PatrolResult<HashMap<NodeId, u64>> {
        let mut relaxation = Self::relax(graph, source, None)?;
        relaxation.distances.remove(&source);
        Ok(relaxation.distances)
    }

    /// 计算从起点到所有可达节点的最短路径跳数
    ///
    /// 跳数与 `shortest_paths` 返回的路径长度一致，但不构造路径
    pub fn shortest_hops(
        graph: &Graph,
        source: NodeId,
    ) -> PatrolResult<HashMap<NodeId, usize>> {
        let mut relaxation = Self::relax(graph, source, None)?;
        relaxation.hops.remove(&source);
        Ok(relaxation.hops)
    }

    /// 计算从起点到所有可达节点的一条最短路径
    ///
    /// 每条路径不含起点，以目标节点结尾，长度即跳数
    pub fn shortest_paths(
        graph: &Graph,
        source: NodeId,
    ) -> PatrolResult<HashMap<NodeId, Vec<NodeId>>> {
        let relaxation = Self::relax(graph, source, None)?;

        let mut result = HashMap::with_capacity(relaxation.distances.len());
        for &node in relaxation.distances.keys() {
            if node == source {
                continue;
            }
            result.insert(node, Self::rebuild(&relaxation.predecessors, source, node));
        }
        Ok(result)
    }

    /// 查找从起点到目标节点的最短路径，不可达时返回 `None`
    ///
    /// 路径不含起点；起点与目标相同时返回空路径
    pub fn shortest_path(
        graph: &Graph,
        source: NodeId,
        target: NodeId,
    ) -> PatrolResult<Option<Vec<NodeId>>> {
        if !graph.contains(target) {
            return Err(PatrolError::NodeNotFound(target));
        }
        if source == target {
            return Ok(graph.contains(source).then(Vec::new));
        }

        let relaxation = Self::relax(graph, source, Some(target))?;
        if !relaxation.distances.contains_key(&target) {
            return Ok(None);
        }
        Ok(Some(Self::rebuild(&relaxation.predecessors, source, target)))
    }

    fn relax(
        graph: &Graph,
        source: NodeId,
        stop_at: Option<NodeId>,
    ) -> PatrolResult<Relaxation> {
        if !graph.contains(source) {
            return Err(PatrolError::NodeNotFound(source));
        }

        let mut distances: HashMap<NodeId, u64> = HashMap::new();
        let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();
        let mut hops: HashMap<NodeId, usize> = HashMap::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut to_visit: BinaryHeap<NodeDistance> = BinaryHeap::new();
        let mut sequence = 0u64;

        distances.insert(source, 0);
        hops.insert(source, 0);
        to_visit.push(NodeDistance {
            node: source,
            distance: 0,
            sequence,
        });

        while let Some(NodeDistance { node, distance, .. }) = to_visit.pop() {
            if !visited.insert(node) {
                continue;
            }
            if stop_at == Some(node) {
                break;
            }

            let node_hops = hops.get(&node).copied().unwrap_or(0);
            for edge in graph.neighbors(node) {
                let new_distance = distance + u64::from(edge.weight);
                let improves = distances
                    .get(&edge.target)
                    .map_or(true, |&known| new_distance < known);

                if improves {
                    distances.insert(edge.target, new_distance);
                    predecessors.insert(edge.target, node);
                    hops.insert(edge.target, node_hops + 1);
                    sequence += 1;
                    to_visit.push(NodeDistance {
                        node: edge.target,
                        distance: new_distance,
                        sequence,
                    });
                }
            }
        }

        Ok(Relaxation {
            distances,
            predecessors,
            hops,
        })
    }

    // 沿前驱链回溯到起点后反转
    fn rebuild(
        predecessors: &HashMap<NodeId, NodeId>,
        source: NodeId,
        target: NodeId,
    ) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut current = target;
        while let Some(&predecessor) = predecessors.get(&current) {
            if predecessor == source {
                break;
            }
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();
        path
    }
}
