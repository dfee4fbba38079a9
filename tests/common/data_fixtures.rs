//! 测试数据生成模块
//!
//! 提供各种道路网络的文本和图

use patrolgraph::core::Graph;

use super::build_graph;

/// 环 a->b->c->a 加尾巴 c->d->e->d
pub fn kingdom() -> Graph {
    build_graph(
        &["a", "b", "c", "d", "e"],
        &[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("d", "e"),
            ("e", "d"),
        ],
    )
}

/// 与 `kingdom` 相同网络的输入文本
pub const KINGDOM_INPUT: &str = "5 6\na b\nb c\nc a\nc d\nd e\ne d\n";

/// 两个通过单向道路相连的环：{p,q,r} -> {x,y}
pub const TWIN_RINGS_INPUT: &str = "5 6\np q\nq r\nr p\nr x\nx y\ny x\n";

/// 长度为 `n` 的有向环 n0 -> n1 -> ... -> n0
pub fn ring(n: usize) -> Graph {
    let names: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let edges: Vec<(&str, &str)> = (0..n).map(|i| (refs[i], refs[(i + 1) % n])).collect();
    build_graph(&refs, &edges)
}

/// 以 `hub` 为中心的星形，每个叶子与中心双向相连
pub fn star(leaves: usize) -> Graph {
    let mut names = vec!["hub".to_string()];
    names.extend((0..leaves).map(|i| format!("leaf{}", i)));
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut edges = Vec::new();
    for leaf in &refs[1..] {
        edges.push(("hub", *leaf));
        edges.push((*leaf, "hub"));
    }
    build_graph(&refs, &edges)
}

/// 一个稍大的混合网络：带弦的环、互通的双节点、单向尾巴
pub fn mixed() -> Graph {
    build_graph(
        &["s", "t", "u", "v", "w", "x", "y", "z"],
        &[
            ("s", "t"),
            ("t", "u"),
            ("u", "v"),
            ("v", "s"),
            ("t", "s"),
            ("u", "s"),
            ("v", "w"),
            ("w", "x"),
            ("x", "w"),
            ("x", "y"),
            ("y", "z"),
        ],
    )
}
