/// 請求一覧機能モジュール
///
/// このモジュールは経費請求の一覧表示に関連する機能を提供します：
/// - 請求レコードのデータモデルと検証付きコンストラクタ
/// - 一覧の表示モデル構築（ローディング／エラー／反時系列ソート）
/// - 一覧コントローラー（取得、遷移、領収書プレビュー）
pub mod controller;
pub mod models;
pub mod view;

// 公開インターフェース

// モデル
pub use models::{BillDraft, BillRecord, BillStatus, DATE_FORMAT, EXPENSE_TYPES};

// ビュー
pub use view::{is_display_date, render, BillRow, BillsViewInput, BillsViewModel};

// コントローラー
pub use controller::{BillsListController, PageState, ReceiptPreview};
