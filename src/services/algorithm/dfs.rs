//! DFS算法模块
//!
//! 使用显式栈的深度优先遍历，记录发现/完成时间戳，并在每个节点首次被发现时回调访问者

use std::collections::HashMap;

use crate::core::graph::{Graph, NodeId};

/// 节点的遍历状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// 尚未发现
    Unvisited,
    /// 已发现但出边尚未处理完
    InProgress,
    /// 已完成
    Done,
}

/// 每次回调时传给访问者的遍历上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalContext {
    /// 当前遍历树的根
    pub root: NodeId,
    /// 发现该节点时所在的父节点，根节点为 `None`
    pub predecessor: Option<NodeId>,
}

/// 节点访问者
pub trait NodeVisitor {
    fn visit(&mut self, node: NodeId, context: &TraversalContext);
}

impl<F> NodeVisitor for F
where
    F: FnMut(NodeId, &TraversalContext),
{
    fn visit(&mut self, node: NodeId, context: &TraversalContext) {
        self(node, context)
    }
}

/// 什么都不做的访问者，只需要时间戳时使用
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisitor;

impl NodeVisitor for NullVisitor {
    fn visit(&mut self, _node: NodeId, _context: &TraversalContext) {}
}

/// 一次遍历的结果
#[derive(Debug, Clone, Default)]
pub struct DfsOutcome {
    pub states: HashMap<NodeId, VisitState>,
    pub discovery: HashMap<NodeId, usize>,
    pub finish: HashMap<NodeId, usize>,
}

impl DfsOutcome {
    pub fn state(&self, node: NodeId) -> VisitState {
        self.states
            .get(&node)
            .copied()
            .unwrap_or(VisitState::Unvisited)
    }

    pub fn finish_time(&self, node: NodeId) -> usize {
        self.finish.get(&node).copied().unwrap_or(0)
    }
}

/// DFS算法结构体
pub struct Dfs;

struct Frame {
    node: NodeId,
    next_edge: usize,
}

impl Dfs {
    /// 按图的节点顺序选择遍历根
    pub fn run<V: NodeVisitor>(graph: &Graph, visitor: &mut V) -> DfsOutcome {
        let roots = graph.node_ids();
        Self::run_in_order(graph, &roots, visitor)
    }

    /// 按 `roots` 给定的顺序选择遍历根，仍未发现的节点开启新的遍历树
    ///
    /// 不在图中的根会被忽略
    pub fn run_in_order<V: NodeVisitor>(
        graph: &Graph,
        roots: &[NodeId],
        visitor: &mut V,
    ) -> DfsOutcome {
        let mut outcome = DfsOutcome::default();
        for node in graph.nodes() {
            outcome.states.insert(node.id(), VisitState::Unvisited);
            outcome.discovery.insert(node.id(), 0);
            outcome.finish.insert(node.id(), 0);
        }

        let mut time = 0usize;
        let mut stack: Vec<Frame> = Vec::new();

        for &root in roots {
            if outcome.states.get(&root) != Some(&VisitState::Unvisited) {
                continue;
            }

            let mut context = TraversalContext {
                root,
                predecessor: None,
            };
            Self::discover(&mut outcome, &mut time, root, &context, visitor);
            stack.push(Frame {
                node: root,
                next_edge: 0,
            });

            while let Some(frame) = stack.last_mut() {
                let edges = graph
                    .node(frame.node)
                    .map(|node| node.edges())
                    .unwrap_or_default();

                let mut child = None;
                while frame.next_edge < edges.len() {
                    let target = edges[frame.next_edge].target;
                    frame.next_edge += 1;
                    if outcome.states.get(&target) == Some(&VisitState::Unvisited) {
                        child = Some(target);
                        break;
                    }
                }

                match child {
                    Some(target) => {
                        context.predecessor = Some(frame.node);
                        Self::discover(&mut outcome, &mut time, target, &context, visitor);
                        stack.push(Frame {
                            node: target,
                            next_edge: 0,
                        });
                    }
                    None => {
                        let node = frame.node;
                        stack.pop();
                        time += 1;
                        outcome.states.insert(node, VisitState::Done);
                        outcome.finish.insert(node, time);
                    }
                }
            }
        }

        outcome
    }

    fn discover<V: NodeVisitor>(
        outcome: &mut DfsOutcome,
        time: &mut usize,
        node: NodeId,
        context: &TraversalContext,
        visitor: &mut V,
    ) {
        *time += 1;
        outcome.discovery.insert(node, *time);
        outcome.states.insert(node, VisitState::InProgress);
        visitor.visit(node, context);
    }
}
