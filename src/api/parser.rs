//! 道路网络文本解析
//!
//! 输入格式（以空白分隔）：首行 `V E`，随后 `E` 行 `nameA nameB` 表示道路 nameA -> nameB。
//! 节点编号按名字首次出现的顺序从 1 开始分配，出现的不同名字数量必须等于 `V`。

use std::collections::HashMap;

use crate::core::error::{PatrolError, PatrolResult};
use crate::core::graph::{Graph, NodeId, DEFAULT_WEIGHT};

/// 道路网络解析器
#[derive(Debug, Clone, Copy)]
pub struct NetworkParser {
    default_weight: u32,
}

impl Default for NetworkParser {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

impl NetworkParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置每条道路的权重，必须大于 0
    pub fn with_default_weight(mut self, weight: u32) -> PatrolResult<Self> {
        if weight == 0 {
            return Err(PatrolError::Config("道路默认权重必须大于 0".to_string()));
        }
        self.default_weight = weight;
        Ok(self)
    }

    pub fn parse(&self, input: &str) -> PatrolResult<Graph> {
        let mut tokens = input.split_whitespace();

        let declared_nodes = Self::next_count(&mut tokens, "节点数量")?;
        let declared_edges = Self::next_count(&mut tokens, "道路数量")?;

        let mut graph = Graph::new();
        let mut by_name: HashMap<String, NodeId> = HashMap::new();

        for line in 1..=declared_edges {
            let (from, to) = match (tokens.next(), tokens.next()) {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    return Err(PatrolError::Parse(format!(
                        "声明了 {} 条道路, 第 {} 条缺失",
                        declared_edges, line
                    )))
                }
            };

            let source = Self::intern(&mut graph, &mut by_name, from);
            let target = Self::intern(&mut graph, &mut by_name, to);
            graph.add_weighted_edge(source, target, self.default_weight)?;
        }

        if let Some(extra) = tokens.next() {
            log::warn!("道路列表之后还有多余内容, 已忽略: {}", extra);
        }

        if graph.len() != declared_nodes {
            return Err(PatrolError::NodeCountMismatch {
                expected: declared_nodes,
                found: graph.len(),
            });
        }

        log::debug!(
            "解析完成: {} 个节点, {} 条道路",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn next_count<'a>(
        tokens: &mut impl Iterator<Item = &'a str>,
        what: &str,
    ) -> PatrolResult<usize> {
        let token = tokens
            .next()
            .ok_or_else(|| PatrolError::Parse(format!("缺少{}", what)))?;
        token
            .parse::<usize>()
            .map_err(|e| PatrolError::Parse(format!("{}无效 '{}': {}", what, token, e)))
    }

    fn intern(graph: &mut Graph, by_name: &mut HashMap<String, NodeId>, name: &str) -> NodeId {
        if let Some(&id) = by_name.get(name) {
            return id;
        }
        let id = graph.add_node(name);
        by_name.insert(name.to_string(), id);
        id
    }
}

/// 使用默认权重解析
pub fn parse_network(input: &str) -> PatrolResult<Graph> {
    NetworkParser::new().parse(input)
}
