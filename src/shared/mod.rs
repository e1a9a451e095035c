/// 共有エラー型とエラーハンドリング
pub mod errors;

/// 共有設定管理
pub mod config;

/// リモートバックエンドコラボレーター
pub mod backend;

/// 画面遷移コラボレーター
pub mod navigation;

// 便利な再エクスポート
pub use backend::BillsBackend;
pub use config::{
    get_environment, initialize_logging_system, load_environment_variables, Environment,
    EnvironmentConfig,
};
pub use errors::{AppError, AppResult, ErrorSeverity};
pub use navigation::{Navigator, ROUTE_BILLS, ROUTE_NEW_BILL};
