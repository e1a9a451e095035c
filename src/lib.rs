//! 社員経費精算のコアワークフロー
//!
//! 経費請求の一覧表示（取得・反時系列ソート・領収書プレビュー）と、
//! 新規請求の提出（ファイルバリデーション・アップロード・永続化・遷移）を
//! 扱う状態機械群。DOMやHTTPには依存せず、バックエンドと画面遷移は
//! トレイト経由で注入される。

pub mod features;
pub mod shared;

// よく使う型の再エクスポート
pub use features::bills::{BillRecord, BillStatus, BillsListController, PageState};
pub use features::new_bill::{FormValues, NewBillForm};
pub use features::receipts::{UploadCandidate, UploadedReceipt};
pub use features::session::{SessionStore, User, UserType};
pub use shared::backend::BillsBackend;
pub use shared::errors::{AppError, AppResult, ErrorSeverity};
pub use shared::navigation::Navigator;
