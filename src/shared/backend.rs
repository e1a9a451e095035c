use crate::features::bills::models::BillRecord;
use crate::features::receipts::models::{UploadCandidate, UploadedReceipt};
use crate::shared::errors::AppResult;

/// リモートデータバックエンドのコラボレーター
///
/// 請求データの取得・領収書のアップロード・請求の永続化を担う外部サービス
/// との契約。トランスポートはここでは規定しない（HTTP実装・テスト用の
/// インメモリ実装のいずれも、このトレイトの実装として注入される）。
///
/// 取得失敗時のエラーメッセージ（"Erreur 404" / "Erreur 500" など）は
/// 改変せずUIへ露出されるため、実装側はユーザーに見せられる文字列を返すこと。
#[allow(async_fn_in_trait)]
pub trait BillsBackend {
    /// 請求レコードの一覧を取得する
    async fn list_bills(&self) -> AppResult<Vec<BillRecord>>;

    /// 領収書ファイルをアップロードする
    ///
    /// # 引数
    /// * `candidate` - バリデーション済みのアップロード候補
    ///
    /// # 戻り値
    /// 成功時はアップロード済み領収書の参照（fileUrl / fileName）
    async fn upload_receipt(&self, candidate: &UploadCandidate) -> AppResult<UploadedReceipt>;

    /// 請求レコードを永続化する
    ///
    /// # 引数
    /// * `bill` - 構築済みの請求レコード
    ///
    /// # 戻り値
    /// 永続化された請求レコード
    async fn create_bill(&self, bill: &BillRecord) -> AppResult<BillRecord>;
}
