/// 機能別モジュール
///
/// このモジュールは、アプリケーションの機能を機能別に整理したモジュール群を
/// 提供します。各機能モジュールは、その機能に関連するコード（モデル、
/// コントローラー、ビュー）を含む自己完結型のユニットです。
// 機能モジュールの宣言
pub mod bills;
pub mod new_bill;
pub mod receipts;
pub mod session;
