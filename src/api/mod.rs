//! 输入输出边界
//!
//! 读取道路网络文本，求解后输出报告；以及按目录批量比对期望输出

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::Config;
use crate::core::error::{PatrolError, PatrolResult};
use crate::services::realm::Realm;

pub mod parser;
pub mod report;

pub use parser::{parse_network, NetworkParser};
pub use report::{equivalent, render};

/// 解析、求解并渲染一份输入
pub fn solve(input: &str, config: &Config) -> PatrolResult<String> {
    let parser = NetworkParser::new().with_default_weight(config.parser.default_weight)?;
    let graph = parser.parse(input)?;
    info!(
        "道路网络: {} 个节点, {} 条道路",
        graph.len(),
        graph.edge_count()
    );

    let mut realm = Realm::new(graph);
    let survey = realm.survey()?.clone();
    render(realm.graph(), &survey)
}

pub fn solve_file<P: AsRef<Path>>(path: P, config: &Config) -> PatrolResult<String> {
    let input = fs::read_to_string(path)?;
    solve(&input, config)
}

/// 单个比对用例的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub input: PathBuf,
    pub passed: bool,
    /// 求解失败或缺少期望输出时的原因
    pub error: Option<String>,
}

/// 对 `inputs` 目录中的每个文件求解，并与 `outputs` 中同名文件比对
///
/// 用例按文件名排序
pub fn check_cases<P: AsRef<Path>, Q: AsRef<Path>>(
    inputs: P,
    outputs: Q,
    config: &Config,
) -> PatrolResult<Vec<CaseOutcome>> {
    let mut files: Vec<PathBuf> = fs::read_dir(inputs.as_ref())?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut outcomes = Vec::with_capacity(files.len());
    for input in files {
        let outcome = match input.file_name() {
            Some(name) => check_case(&input, &outputs.as_ref().join(name), config),
            None => continue,
        };
        if !outcome.passed {
            warn!("用例失败: {}", input.display());
        }
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn check_case(input: &Path, expected: &Path, config: &Config) -> CaseOutcome {
    let result = fs::read_to_string(expected)
        .map_err(PatrolError::from)
        .and_then(|expected| {
            solve_file(input, config).map(|actual| equivalent(&expected, &actual))
        });

    match result {
        Ok(passed) => CaseOutcome {
            input: input.to_path_buf(),
            passed,
            error: None,
        },
        Err(e) => CaseOutcome {
            input: input.to_path_buf(),
            passed: false,
            error: Some(e.to_string()),
        },
    }
}
