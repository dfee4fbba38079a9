//! patrolgraph - 道路网络的首都选址、营地驻扎与巡逻路线规划
//!
//! 读取有向道路网络，选出能以最少总跳数到达所有城市的首都，
//! 按强连通分量驻扎营地，并为每个分量生成闭合巡逻路线。

pub mod api;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;
