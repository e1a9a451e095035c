/// 新規請求機能モジュール
///
/// 新規請求フォームのコントローラーを提供する。ファイル選択のバリデーション
/// とアップロード、送信時の請求レコード構築・永続化・一覧への遷移を担う。
pub mod form;

// 公開インターフェース
pub use form::{FormValues, NewBillForm};
