//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on `cb-platform` and `cb-app` together.
//! It assembles; it does not decide. Configuration arrives already loaded
//! from [`config`](super::config).
//! 这里只负责组装，不做决策。

use std::sync::Arc;

use cb_app::{PushSnippetToClipboard, ReadSnippetFromClipboard};
use cb_core::ClipboardPort;
use cb_platform::{ClipboardCapability, PlatformClipboard};
use tracing::info;

use super::config::AppConfig;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（剪贴板初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Use cases bound to one clipboard port.
pub struct UseCases {
    pub read_snippet: ReadSnippetFromClipboard,
    pub push_snippet: PushSnippetToClipboard,
}

impl UseCases {
    pub fn new(clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self {
            read_snippet: ReadSnippetFromClipboard::new(clipboard.clone()),
            push_snippet: PushSnippetToClipboard::new(clipboard),
        }
    }
}

/// Everything a front end needs, wired against the platform clipboard.
pub struct AppDeps {
    /// Concrete adapter, kept for diagnostics such as format dumps.
    pub platform: Arc<PlatformClipboard>,
    pub usecases: UseCases,
}

impl AppDeps {
    pub fn capability(&self) -> ClipboardCapability {
        self.platform.capability()
    }
}

/// Build the platform clipboard adapter for this OS and bind the use cases to it.
/// 为当前平台创建剪贴板适配器并注入用例。
///
/// # Errors / 错误
///
/// Returns [`WiringError::ClipboardInit`] when the clipboard backend cannot be created.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let platform = PlatformClipboard::new(config.acquisition.clone())
        .map_err(|e| WiringError::ClipboardInit(e.to_string()))?;
    info!(capability = ?platform.capability(), "Clipboard adapter wired");

    let platform = Arc::new(platform);
    let port: Arc<dyn ClipboardPort> = platform.clone();
    Ok(AppDeps {
        platform,
        usecases: UseCases::new(port),
    })
}
