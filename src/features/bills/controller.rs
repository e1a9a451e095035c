use crate::features::bills::models::BillRecord;
use crate::features::bills::view::{self, BillRow};
use crate::features::session::User;
use crate::shared::backend::BillsBackend;
use crate::shared::errors::AppError;
use crate::shared::navigation::{Navigator, ROUTE_NEW_BILL};
use log::{debug, info, warn};

/// 請求一覧ページの状態機械
///
/// Loading → (Loaded | Errored)。新たに `load()` を呼ばない限り
/// Loadingへは戻らない。
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// 取得リクエストが未解決
    Loading,
    /// ソート済みの一覧を保持
    Loaded(Vec<BillRow>),
    /// エラーメッセージを保持（一覧は持たない）
    Errored(String),
}

/// 領収書プレビューモーダル（読み取り専用のオーバーレイ）
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptPreview {
    /// 表示する領収書のURL
    pub file_url: String,
}

/// 請求一覧コントローラー
///
/// バックエンドから請求を取得してBillsViewで整形し、行単位の操作
/// （新規請求への遷移、領収書プレビュー）を処理する。
pub struct BillsListController<B, N> {
    backend: B,
    navigator: N,
    user: User,
    state: PageState,
    modal: Option<ReceiptPreview>,
    /// 取得リクエストの世代番号（遅延応答を破棄するためのガード）
    load_generation: u64,
}

impl<B: BillsBackend, N: Navigator> BillsListController<B, N> {
    /// 新しい一覧コントローラーを作成する
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
            state: PageState::Loading,
            modal: None,
            load_generation: 0,
        }
    }

    /// 現在のページ状態を取得する
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// 請求一覧を取得して状態を更新する
    pub async fn load(&mut self) -> &PageState {
        let ticket = self.begin_load();
        let result = self.backend.list_bills().await;
        self.apply_load_result(ticket, result);
        &self.state
    }

    /// 取得を開始し、世代チケットを発行する
    ///
    /// 取得の開始と結果の適用を分離しているのは、画面遷移後に解決した
    /// 古い応答を無効化できるようにするため。
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.state = PageState::Loading;
        debug!(
            "請求一覧の取得を開始: user={}, generation={}",
            self.user.email, self.load_generation
        );
        self.load_generation
    }

    /// 取得結果を状態へ適用する
    ///
    /// # 引数
    /// * `ticket` - `begin_load()` が発行した世代チケット
    /// * `result` - バックエンドからの取得結果
    ///
    /// チケットが現在の世代と一致しない場合、その応答は古いものとして
    /// 破棄される（no-op）。
    pub fn apply_load_result(&mut self, ticket: u64, result: Result<Vec<BillRecord>, AppError>) {
        if ticket != self.load_generation {
            debug!(
                "古い取得応答を破棄: ticket={}, current={}",
                ticket, self.load_generation
            );
            return;
        }

        match result {
            Ok(bills) => {
                info!("請求一覧を取得しました: count={}", bills.len());
                self.state = PageState::Loaded(view::sorted_rows(bills));
            }
            Err(e) => {
                // メッセージ（"Erreur 404" / "Erreur 500" など）はそのまま表示する
                let message = e.user_message();
                warn!("請求一覧の取得に失敗しました: {}", e.details());
                self.state = PageState::Errored(message);
            }
        }
    }

    /// 新規請求ボタンのクリックを処理する
    ///
    /// 新規請求フォームへ遷移するだけで、他の状態は変更しない。
    pub fn handle_click_new_bill(&self) {
        info!("新規請求フォームへ遷移します: user={}", self.user.email);
        self.navigator.navigate(ROUTE_NEW_BILL);
    }

    /// 領収書プレビューアイコンのクリックを処理する
    ///
    /// # 引数
    /// * `file_url` - クリックされた行の領収書URL
    ///
    /// 読み取り専用の操作であり、請求レコードは一切変更しない。
    /// モーダルは常に1つ（再クリックは置き換え）。
    pub fn handle_click_icon_eye(&mut self, file_url: &str) {
        debug!("領収書プレビューを開きます: url={file_url}");
        self.modal = Some(ReceiptPreview {
            file_url: file_url.to_string(),
        });
    }

    /// 開いているプレビューモーダルを取得する
    pub fn modal(&self) -> Option<&ReceiptPreview> {
        self.modal.as_ref()
    }

    /// プレビューモーダルを閉じる
    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::bills::models::BillStatus;
    use crate::features::receipts::models::{UploadCandidate, UploadedReceipt};
    use crate::shared::errors::AppResult;
    use std::sync::Mutex;

    /// テスト用のインメモリバックエンド
    struct FakeBackend {
        bills: Vec<BillRecord>,
        failure: Option<String>,
    }

    impl FakeBackend {
        fn with_bills(bills: Vec<BillRecord>) -> Self {
            Self {
                bills,
                failure: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                bills: vec![],
                failure: Some(message.to_string()),
            }
        }
    }

    impl BillsBackend for FakeBackend {
        async fn list_bills(&self) -> AppResult<Vec<BillRecord>> {
            match &self.failure {
                Some(message) => Err(AppError::fetch(message.clone())),
                None => Ok(self.bills.clone()),
            }
        }

        async fn upload_receipt(&self, _: &UploadCandidate) -> AppResult<UploadedReceipt> {
            Err(AppError::upload("一覧テストでは使用しない"))
        }

        async fn create_bill(&self, _: &BillRecord) -> AppResult<BillRecord> {
            Err(AppError::persistence("一覧テストでは使用しない"))
        }
    }

    /// 遷移要求を記録するテスト用Navigator
    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl Navigator for &RecordingNavigator {
        fn navigate(&self, pathname: &str) {
            self.visited.lock().unwrap().push(pathname.to_string());
        }
    }

    fn fixture(id: &str, name: &str, date: &str) -> BillRecord {
        BillRecord {
            id: id.to_string(),
            email: "cedric.hiely@billed.com".to_string(),
            name: name.to_string(),
            date: date.to_string(),
            bill_type: "Transports".to_string(),
            amount: 100.0,
            vat: 20.0,
            pct: 20,
            commentary: None,
            file_name: format!("{id}.png"),
            file_url: format!("https://example.com/{id}.png"),
            status: BillStatus::Pending,
            created_at: "2021-07-14T10:00:00+02:00".to_string(),
        }
    }

    fn fixture_bills() -> Vec<BillRecord> {
        vec![
            fixture("b1", "test1", "2001-01-01"),
            fixture("b2", "encore", "2004-04-04"),
            fixture("b3", "test2", "2002-02-02"),
            fixture("b4", "test3", "2003-03-03"),
        ]
    }

    fn employee() -> User {
        User::employee("cedric.hiely@billed.com")
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let navigator = RecordingNavigator::default();
        let controller =
            BillsListController::new(FakeBackend::with_bills(vec![]), &navigator, employee());

        assert_eq!(controller.state(), &PageState::Loading);
    }

    #[tokio::test]
    async fn test_load_success_sorts_anti_chronologically() {
        let navigator = RecordingNavigator::default();
        let mut controller = BillsListController::new(
            FakeBackend::with_bills(fixture_bills()),
            &navigator,
            employee(),
        );

        controller.load().await;

        let rows = match controller.state() {
            PageState::Loaded(rows) => rows,
            other => panic!("Loadedを期待したが {other:?} だった"),
        };

        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(
            dates,
            ["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]
        );
    }

    #[tokio::test]
    async fn test_load_failure_erreur_404() {
        let navigator = RecordingNavigator::default();
        let mut controller =
            BillsListController::new(FakeBackend::failing("Erreur 404"), &navigator, employee());

        controller.load().await;

        match controller.state() {
            PageState::Errored(message) => assert!(message.contains("Erreur 404")),
            other => panic!("Erroredを期待したが {other:?} だった"),
        }
    }

    #[tokio::test]
    async fn test_load_failure_erreur_500() {
        let navigator = RecordingNavigator::default();
        let mut controller =
            BillsListController::new(FakeBackend::failing("Erreur 500"), &navigator, employee());

        controller.load().await;

        match controller.state() {
            PageState::Errored(message) => assert!(message.contains("Erreur 500")),
            other => panic!("Erroredを期待したが {other:?} だった"),
        }
    }

    #[tokio::test]
    async fn test_load_failure_passthrough_message() {
        // 既知の2種以外のメッセージも改変せずそのまま表示する
        let navigator = RecordingNavigator::default();
        let mut controller = BillsListController::new(
            FakeBackend::failing("oops an error"),
            &navigator,
            employee(),
        );

        controller.load().await;

        assert_eq!(
            controller.state(),
            &PageState::Errored("oops an error".to_string())
        );
    }

    #[tokio::test]
    async fn test_click_new_bill_navigates_only() {
        let navigator = RecordingNavigator::default();
        let mut controller = BillsListController::new(
            FakeBackend::with_bills(fixture_bills()),
            &navigator,
            employee(),
        );
        controller.load().await;
        let state_before = controller.state().clone();

        controller.handle_click_new_bill();

        // 遷移要求は1回だけ、状態は変化しない
        assert_eq!(
            navigator.visited.lock().unwrap().as_slice(),
            [ROUTE_NEW_BILL]
        );
        assert_eq!(controller.state(), &state_before);
    }

    #[tokio::test]
    async fn test_click_icon_eye_opens_single_modal() {
        let navigator = RecordingNavigator::default();
        let mut controller = BillsListController::new(
            FakeBackend::with_bills(fixture_bills()),
            &navigator,
            employee(),
        );
        controller.load().await;
        let state_before = controller.state().clone();

        controller.handle_click_icon_eye("https://example.com/b2.png");

        // モーダルは1つだけ開き、レコードは変更されない
        assert_eq!(
            controller.modal(),
            Some(&ReceiptPreview {
                file_url: "https://example.com/b2.png".to_string()
            })
        );
        assert_eq!(controller.state(), &state_before);

        // 再クリックは置き換え（常に1つ）
        controller.handle_click_icon_eye("https://example.com/b3.png");
        assert_eq!(
            controller.modal().map(|m| m.file_url.as_str()),
            Some("https://example.com/b3.png")
        );

        controller.close_modal();
        assert_eq!(controller.modal(), None);
    }

    #[tokio::test]
    async fn test_stale_load_response_is_discarded() {
        let navigator = RecordingNavigator::default();
        let mut controller =
            BillsListController::new(FakeBackend::with_bills(vec![]), &navigator, employee());

        // 1回目の取得中に2回目の取得が始まったケース
        let stale_ticket = controller.begin_load();
        let fresh_ticket = controller.begin_load();

        // 古いチケットの応答は破棄され、Loadingのまま
        controller.apply_load_result(stale_ticket, Ok(fixture_bills()));
        assert_eq!(controller.state(), &PageState::Loading);

        // 新しいチケットの応答だけが適用される
        controller.apply_load_result(fresh_ticket, Err(AppError::fetch("Erreur 500")));
        assert_eq!(
            controller.state(),
            &PageState::Errored("Erreur 500".to_string())
        );
    }

    #[tokio::test]
    async fn test_reload_requires_fresh_load_call() {
        // Errored後、明示的なload()なしにLoadingへ戻らないこと
        let navigator = RecordingNavigator::default();
        let mut controller =
            BillsListController::new(FakeBackend::failing("Erreur 500"), &navigator, employee());

        controller.load().await;
        assert!(matches!(controller.state(), PageState::Errored(_)));

        controller.handle_click_icon_eye("https://example.com/x.png");
        controller.close_modal();
        assert!(matches!(controller.state(), PageState::Errored(_)));

        // 新たなload()でのみLoadingを経由して再取得される
        controller.load().await;
        assert!(matches!(controller.state(), PageState::Errored(_)));
    }
}
