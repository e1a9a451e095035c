use crate::features::bills::models::{BillDraft, BillRecord};
use crate::features::receipts::models::UploadCandidate;
use crate::features::receipts::validator;
use crate::features::session::User;
use crate::shared::backend::BillsBackend;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::navigation::{Navigator, ROUTE_BILLS};
use log::{info, warn};

/// 新規請求フォームのUIテスト識別子
pub const TEST_ID_FORM_NEW_BILL: &str = "form-new-bill";
/// ファイル入力のUIテスト識別子
pub const TEST_ID_FILE_INPUT: &str = "file";
/// ファイル形式エラーインジケーターのUIテスト識別子（表示/非表示で切り替え）
pub const TEST_ID_ERROR_IMG: &str = "error-img";
/// 経費名入力のUIテスト識別子
pub const TEST_ID_EXPENSE_NAME: &str = "expense-name";
/// 日付入力のUIテスト識別子
pub const TEST_ID_DATEPICKER: &str = "datepicker";
/// カテゴリ選択のUIテスト識別子
pub const TEST_ID_EXPENSE_TYPE: &str = "expense-type";
/// 金額入力のUIテスト識別子
pub const TEST_ID_AMOUNT: &str = "amount";
/// VAT入力のUIテスト識別子
pub const TEST_ID_VAT: &str = "vat";
/// 税率入力のUIテスト識別子
pub const TEST_ID_PCT: &str = "pct";
/// 備考入力のUIテスト識別子
pub const TEST_ID_COMMENTARY: &str = "commentary";

/// 送信時点のフォーム入力値
#[derive(Debug, Clone)]
pub struct FormValues {
    pub name: String,
    pub date: String,
    pub bill_type: String,
    pub amount: f64,
    pub vat: f64,
    pub pct: u8,
    pub commentary: Option<String>,
}

/// 新規請求フォームのコントローラー
///
/// ファイル選択とフォーム送信を処理する状態機械。送信イベントの既定動作
/// （ページ再読み込み）はUIバインディング層で抑止される前提で、
/// `handle_submit` が送信の効果のすべてを担う。
pub struct NewBillForm<B, N> {
    backend: B,
    navigator: N,
    user: User,
    /// 直近の成功アップロードで得た領収書URL
    file_url: Option<String>,
    /// 直近の成功アップロードで得たファイル名
    file_name: Option<String>,
    /// ファイル形式エラーインジケーター（error-img）の表示状態
    file_error_visible: bool,
    /// 送信が進行中かどうか（二重送信ガード）
    submitting: bool,
}

impl<B: BillsBackend, N: Navigator> NewBillForm<B, N> {
    /// 新しいフォームコントローラーを作成する
    ///
    /// # 引数
    /// * `backend` - リモートデータバックエンド
    /// * `navigator` - 画面遷移コラボレーター
    /// * `user` - セッションから解決済みのユーザー
    pub fn new(backend: B, navigator: N, user: User) -> Self {
        Self {
            backend,
            navigator,
            user,
            file_url: None,
            file_name: None,
            file_error_visible: false,
            submitting: false,
        }
    }

    /// ファイル形式エラーインジケーターの表示状態を取得する
    pub fn file_error_visible(&self) -> bool {
        self.file_error_visible
    }

    /// アップロード済み領収書のURLを取得する
    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    /// アップロード済み領収書のファイル名を取得する
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// 送信が進行中かどうかを取得する
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// ファイル選択（changeイベント）を処理する
    ///
    /// # 引数
    /// * `candidate` - 選択されたファイルのアップロード候補
    ///
    /// # 処理内容
    /// 1. 宣言されたメディアタイプをバリデーション
    /// 2. 拒否 → エラーインジケーターを表示して候補を破棄（アップロードしない）
    /// 3. 受理 → インジケーターを消してアップロードし、成功時に
    ///    fileUrl / fileName を保持
    ///
    /// アップロード失敗時は fileUrl を更新しない（以前の成功分があれば維持）。
    pub async fn handle_change_file(&mut self, candidate: UploadCandidate) -> AppResult<()> {
        if !validator::validate(&candidate.media_type).is_accepted() {
            warn!(
                "拒否されたファイル形式です: file={}, media_type={}",
                candidate.file_name, candidate.media_type
            );
            self.file_error_visible = true;
            return Err(AppError::validation(
                "サポートされていないファイル形式です（PNG、JPG、JPEGのみ対応）",
            ));
        }

        self.file_error_visible = false;

        let receipt = self.backend.upload_receipt(&candidate).await.map_err(|e| {
            warn!("領収書のアップロードに失敗しました: {}", e.details());
            e
        })?;

        info!(
            "領収書をアップロードしました: user={}, url={}",
            self.user.email, receipt.file_url
        );
        self.file_url = Some(receipt.file_url);
        self.file_name = Some(receipt.file_name);
        Ok(())
    }

    /// フォーム送信（submitイベント）を処理する
    ///
    /// `begin_submit` と `apply_submit_result` の合成。バインディング層が
    /// 送信イベントと永続化応答を別々に受け取る場合は、それぞれを直接呼ぶ。
    ///
    /// # 引数
    /// * `values` - 送信時点のフォーム入力値
    ///
    /// # 戻り値
    /// 永続化された請求レコード
    ///
    /// # 前提条件
    /// 事前に成功したアップロードの fileUrl が必要。欠けている場合は
    /// バリデーションエラーとなり、`create_bill` は呼ばれない。
    ///
    /// # 失敗時の動作
    /// アップロード・永続化いずれの失敗もその送信試行で終端する
    /// （自動リトライなし）。フォーム状態は保持され、手動で再送信できる。
    pub async fn handle_submit(&mut self, values: FormValues) -> AppResult<BillRecord> {
        let bill = self.begin_submit(values)?;
        let result = self.backend.create_bill(&bill).await;
        self.apply_submit_result(result)
    }

    /// 送信を開始し、永続化する請求レコードを構築する
    ///
    /// 送信の開始と結果の適用を分離しているのは、進行中の送信がある間に
    /// 発火した二重の送信イベントを拒否できるようにするため
    /// （`BillsListController` の `begin_load` / `apply_load_result` と
    /// 同じ構成）。
    ///
    /// # 戻り値
    /// `create_bill` へ渡す請求レコード。進行中の送信がある場合と
    /// バリデーション失敗時はエラー（送信中フラグは立てない）。
    pub fn begin_submit(&mut self, values: FormValues) -> AppResult<BillRecord> {
        if self.submitting {
            warn!("進行中の送信があるため再送信を拒否しました");
            return Err(AppError::validation("送信処理が既に進行中です"));
        }

        // 事前アップロード成功の証跡がなければ送信しない
        let file_url = self.file_url.clone().ok_or_else(|| {
            warn!("領収書のアップロードなしで送信が試行されました");
            AppError::validation("領収書がアップロードされていません")
        })?;
        let file_name = self.file_name.clone().unwrap_or_default();

        let bill = BillRecord::new(
            BillDraft {
                name: values.name,
                date: values.date,
                bill_type: values.bill_type,
                amount: values.amount,
                vat: values.vat,
                pct: values.pct,
                commentary: values.commentary,
                file_name,
                file_url,
            },
            &self.user.email,
        )?;

        self.submitting = true;
        Ok(bill)
    }

    /// 永続化の結果を適用する
    ///
    /// # 引数
    /// * `result` - `create_bill` の結果
    ///
    /// 送信中フラグを解除し、永続化が確認できた場合のみ一覧へ遷移する。
    pub fn apply_submit_result(&mut self, result: AppResult<BillRecord>) -> AppResult<BillRecord> {
        self.submitting = false;

        let created = result.map_err(|e| {
            warn!("請求レコードの永続化に失敗しました: {}", e.details());
            e
        })?;

        info!(
            "請求レコードを作成しました: id={}, user={}",
            created.id, self.user.email
        );

        self.navigator.navigate(ROUTE_BILLS);
        Ok(created)
    }
}
