//! 首都、营地与巡逻路线求解
//!
//! 求解流程：
//! 1. 对每个节点运行Dijkstra，能到达其余所有节点且总跳数最小者为首都（严格小于，先到先得，总和为 0 不计）
//! 2. 首都移到节点序列最前面
//! 3. 运行Kosaraju得到强连通分量
//! 4. 只剩首都单点分量时没有营地
//! 5. 去掉首都单点分量，其余分量的首个节点（首都除外）驻扎营地
//! 6. 去掉单点分量，为剩下的每个分量生成闭合巡逻路线

use log::{debug, info, warn};

use crate::core::error::{PatrolError, PatrolResult};
use crate::core::graph::{Graph, NodeId};
use crate::services::algorithm::{
    Component, Dfs, Dijkstra, GroupingVisitor, StronglyConnectedComponents, Transpose,
};

/// 一条闭合巡逻路线
///
/// `stops` 从 `start` 出发，相邻两站之间以及最后一站回到 `start` 都有原图中的道路
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatrolRoute {
    pub start: NodeId,
    pub stops: Vec<NodeId>,
}

/// 求解结果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Survey {
    /// 没有节点能到达其余所有节点时为 `None`
    pub capital: Option<NodeId>,
    pub battalions: Vec<NodeId>,
    pub patrols: Vec<PatrolRoute>,
    pub has_battalions: bool,
}

/// 持有道路网络并缓存求解结果
#[derive(Debug, Clone)]
pub struct Realm {
    graph: Graph,
    survey: Option<Survey>,
}

impl Realm {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            survey: None,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// 可变访问会使缓存的求解结果失效
    pub fn graph_mut(&mut self) -> &mut Graph {
        self.survey = None;
        &mut self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn is_surveyed(&self) -> bool {
        self.survey.is_some()
    }

    /// 计算（或返回缓存的）求解结果
    ///
    /// 首次计算会把首都移到节点序列最前面
    pub fn survey(&mut self) -> PatrolResult<&Survey> {
        let survey = match self.survey.take() {
            Some(survey) => survey,
            None => Self::compute(&mut self.graph)?,
        };
        let survey: &Survey = self.survey.insert(survey);
        Ok(survey)
    }

    pub fn capital(&mut self) -> PatrolResult<Option<NodeId>> {
        Ok(self.survey()?.capital)
    }

    /// 选择首都，不修改图
    pub fn select_capital(graph: &Graph) -> PatrolResult<Option<NodeId>> {
        let total = graph.len();
        let mut best: Option<(NodeId, usize)> = None;

        for node in graph.nodes() {
            let hops = Dijkstra::shortest_hops(graph, node.id())?;
            if hops.len() + 1 != total {
                continue;
            }

            let cost: usize = hops.values().sum();
            debug!("首都候选 {} ({}): 总跳数 {}", node.name(), node.id(), cost);
            if cost == 0 {
                continue;
            }
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((node.id(), cost));
            }
        }

        Ok(best.map(|(id, _)| id))
    }

    fn compute(graph: &mut Graph) -> PatrolResult<Survey> {
        let capital = Self::select_capital(graph)?;
        match capital {
            Some(id) => {
                info!("首都: {} ({})", graph.name_of(id)?, id);
                graph.move_to_front(id)?;
            }
            None => warn!("没有节点能到达其余所有节点, 首都未确定"),
        }

        let mut components = StronglyConnectedComponents::find(graph);

        let only_capital = components.len() == 1
            && capital.is_some_and(|id| components[0].is_singleton_of(id));
        let has_battalions = !only_capital;

        if let Some(id) = capital {
            components.retain(|component| !component.is_singleton_of(id));
        }

        let battalions: Vec<NodeId> = components
            .iter()
            .filter_map(Component::first)
            .filter(|first| Some(*first) != capital)
            .collect();

        components.retain(|component| component.len() > 1);

        let patrols = components
            .iter()
            .map(|component| Self::patrol_route(graph, component))
            .collect::<PatrolResult<Vec<_>>>()?;

        info!(
            "求解完成: {} 个营地, {} 条巡逻路线",
            battalions.len(),
            patrols.len()
        );

        Ok(Survey {
            capital,
            battalions,
            patrols,
            has_battalions,
        })
    }

    /// 为一个强连通分量生成闭合巡逻路线
    ///
    /// 在分量的转置子图上从首个节点做DFS，得到的节点流倒过来读是一条沿原图道路、
    /// 终点为起点的行走；流中不相邻的两站用最短路径补齐。
    /// 倒读是因为转置图的树边就是方向相反的原图道路。
    pub fn patrol_route(graph: &Graph, component: &Component) -> PatrolResult<PatrolRoute> {
        let sub = graph.subgraph(&component.members)?;
        let reversed = Transpose::transposed(&sub);

        let mut visitor = GroupingVisitor::new();
        Dfs::run(&reversed, &mut visitor);
        let mut groups = visitor.finish();
        if groups.len() != 1 {
            return Err(PatrolError::FragmentedComponent(groups.len()));
        }
        let trail = groups.remove(0).trail;
        let start = *trail.first().ok_or(PatrolError::FragmentedComponent(0))?;

        let mut stops = vec![start];
        let mut current = start;
        for &next in trail.iter().rev() {
            if next == current {
                continue;
            }
            if sub.has_edge(current, next) {
                stops.push(next);
            } else {
                stops.extend(Self::connect(&sub, current, next)?);
            }
            current = next;
        }

        // 行走以起点结束，去掉重复的终点
        if stops.len() > 1 && stops.last() == Some(&start) {
            stops.pop();
        }

        debug!("巡逻路线 {}: {} 站", start, stops.len());
        Ok(PatrolRoute { start, stops })
    }

    fn connect(graph: &Graph, from: NodeId, to: NodeId) -> PatrolResult<Vec<NodeId>> {
        Dijkstra::shortest_path(graph, from, to)?
            .ok_or(PatrolError::RouteUnreachable { from, to })
    }
}
