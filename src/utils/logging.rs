// 日志初始化
//
// 基于 flexi_logger 的文件日志。异步写入，退出前调用 shutdown 刷新缓冲。

use std::sync::Mutex;

use flexi_logger::{
    detailed_format, Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming, WriteMode,
};

use crate::config::LogConfig;

static HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 环境变量 `RUST_LOG` 存在时优先于配置中的级别。
///
/// # Examples
/// ```no_run
/// use plan_fingerprint::config::Config;
/// use plan_fingerprint::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config.log).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> Result<(), FlexiLoggerError> {
    let file_spec = FileSpec::default()
        .directory(&config.dir)
        .basename(&config.file)
        .suppress_timestamp();

    let duplicate = if config.console {
        Duplicate::Warn
    } else {
        Duplicate::None
    };

    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(file_spec)
        .format_for_files(detailed_format)
        .duplicate_to_stderr(duplicate)
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;

    if let Ok(mut slot) = HANDLE.lock() {
        *slot = Some(handle);
    }
    log::debug!("日志写入 {}/{}", config.dir, config.file);
    Ok(())
}

/// 刷新异步缓冲并释放日志句柄
pub fn shutdown() {
    let handle = HANDLE.lock().ok().and_then(|mut slot| slot.take());
    if let Some(handle) = handle {
        handle.flush();
        handle.shutdown();
    }
}

/// 日志系统是否已初始化
pub fn is_initialized() -> bool {
    HANDLE.lock().is_ok_and(|slot| slot.is_some())
}
