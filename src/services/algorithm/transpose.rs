//! 图转置模块
//!
//! 原地反转所有边的方向，节点身份保持不变

use std::collections::HashMap;

use crate::core::graph::{Edge, Graph, NodeId};

/// 图转置算法结构体
pub struct Transpose;

impl Transpose {
    /// 原地转置：对每条 u->v 生成 v->u，原有边全部移除
    ///
    /// 新出边按来源节点在图中的顺序排列，权重随边保留
    pub fn apply(graph: &mut Graph) {
        let mut inverted: HashMap<NodeId, Vec<(NodeId, u32)>> = HashMap::new();
        for node in graph.nodes() {
            for edge in node.edges() {
                inverted
                    .entry(edge.target)
                    .or_default()
                    .push((node.id(), edge.weight));
            }
        }

        for node in graph.nodes_mut() {
            let id = node.id();
            let edges = inverted
                .remove(&id)
                .unwrap_or_default()
                .into_iter()
                .map(|(source, weight)| Edge::with_weight(id, source, weight))
                .collect();
            node.set_edges(edges);
        }

        if !inverted.is_empty() {
            log::warn!("转置时丢弃了 {} 个图外终点的反向边", inverted.len());
        }
    }

    /// 返回转置后的副本，原图不变
    pub fn transposed(graph: &Graph) -> Graph {
        let mut copy = graph.clone();
        Self::apply(&mut copy);
        copy
    }
}
