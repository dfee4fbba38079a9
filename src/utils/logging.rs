// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::Config;
use crate::core::error::PatrolResult;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 默认输出到标准错误；`log.to_file` 为 `true` 时写入按大小轮转的日志文件。
/// 标准输出保留给求解报告。
///
/// # Examples
/// ```
/// use patrolgraph::config::Config;
/// use patrolgraph::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config).expect("日志初始化失败");
/// logging::shutdown();
/// ```
pub fn init(config: &Config) -> PatrolResult<()> {
    let logger = Logger::try_with_str(&config.log.level)?;

    let handle = if config.log.to_file {
        let handle = logger
            .log_to_file(
                FileSpec::default()
                    .basename(&config.log.file)
                    .directory(&config.log.dir),
            )
            .rotate(
                Criterion::Size(config.log.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.log.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()?;
        log::info!("日志系统初始化完成: {}/{}", config.log.dir, config.log.file);
        handle
    } else {
        logger.log_to_stderr().start()?
    };

    // 保存句柄供后续 flush 使用
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 在程序退出前调用，确保所有异步日志都已写入文件
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
            // handle 在这里被 drop，会等待异步线程完成
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
