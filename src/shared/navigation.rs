/// 画面遷移コラボレーター
///
/// コントローラーはこのトレイト経由でのみ画面遷移を要求する。
/// 戻り値もエラー経路もない（遷移は常に成功するものとして扱う）。
pub trait Navigator {
    /// 指定されたパスへ現在のビューを置き換える
    fn navigate(&self, pathname: &str);
}

/// 請求一覧画面のルート
pub const ROUTE_BILLS: &str = "#employee/bills";

/// 新規請求フォーム画面のルート
pub const ROUTE_NEW_BILL: &str = "#employee/bill/new";
