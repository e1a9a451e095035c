use crate::features::bills::models::BillRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// 新規請求ボタンのUIテスト識別子
pub const TEST_ID_BTN_NEW_BILL: &str = "btn-new-bill";
/// 領収書プレビューアイコンのUIテスト識別子（各行に1つ）
pub const TEST_ID_ICON_EYE: &str = "icon-eye";
/// 請求一覧テーブル本体のUIテスト識別子
pub const TEST_ID_TBODY: &str = "tbody";
/// 領収書プレビューモーダルのUIテスト識別子
pub const TEST_ID_MODAL_FILE: &str = "modaleFile";

/// 表示用日付の形式（ゼロ埋め固定幅）
///
/// ゼロ埋め固定幅であることが、辞書順比較＝時系列比較の前提になっている。
pub static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(19|20)\d\d[-/.](0[1-9]|1[012])[-/.](0[1-9]|[12]\d|3[01])$")
        .expect("日付パターンの正規表現が不正")
});

/// 表示用日付として妥当かどうかを判定する
pub fn is_display_date(date: &str) -> bool {
    DATE_PATTERN.is_match(date)
}

/// ビューへの入力（取得結果・ローディング・エラーの組）
#[derive(Debug, Default)]
pub struct BillsViewInput {
    /// 取得済みの請求レコード
    pub data: Option<Vec<BillRecord>>,
    /// 取得処理が未完了かどうか
    pub loading: bool,
    /// 取得エラーのメッセージ
    pub error: Option<String>,
}

/// 一覧の1行分の表示モデル
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    /// レコードID
    pub id: String,
    /// 経費名
    pub name: String,
    /// 発生日（YYYY-MM-DD）
    pub date: String,
    /// 経費カテゴリ
    pub bill_type: String,
    /// 表示用金額
    pub amount_label: String,
    /// 表示用ステータス
    pub status_label: String,
    /// プレビュー対象の領収書URL
    pub file_url: String,
}

/// 請求一覧ページの表示モデル
#[derive(Debug, Clone, PartialEq)]
pub enum BillsViewModel {
    /// ローディングインジケーターのみを表示
    Loading,
    /// エラーバナーのみを表示
    Errored {
        /// 表示するエラーメッセージ（バックエンド由来の文字列をそのまま）
        message: String,
    },
    /// ソート済みの請求行を表示
    Loaded {
        /// 反時系列（新しい日付が先頭）の行
        rows: Vec<BillRow>,
    },
}

/// 入力から表示モデルを構築する（純粋関数）
///
/// # 優先順位
/// 1. `loading` が真なら Loading（data / error は無視）
/// 2. `error` が設定されていれば Errored（data は無視）
/// 3. それ以外は Loaded（行は反時系列にソート）
pub fn render(input: BillsViewInput) -> BillsViewModel {
    if input.loading {
        return BillsViewModel::Loading;
    }

    if let Some(message) = input.error {
        return BillsViewModel::Errored { message };
    }

    BillsViewModel::Loaded {
        rows: sorted_rows(input.data.unwrap_or_default()),
    }
}

/// 請求レコードを反時系列の表示行へ変換する
///
/// sort_byは安定ソートなので、同一日付は入力順を保つ。
/// 日付はゼロ埋め固定幅のため文字列比較で時系列比較になる。
pub fn sorted_rows(mut bills: Vec<BillRecord>) -> Vec<BillRow> {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
    bills.into_iter().map(to_row).collect()
}

/// 請求レコードを表示用の行へ変換する
fn to_row(bill: BillRecord) -> BillRow {
    if !is_display_date(&bill.date) {
        log::warn!(
            "表示形式に合わない日付を含む請求レコードです: id={}, date={}",
            bill.id,
            bill.date
        );
    }

    BillRow {
        id: bill.id,
        name: bill.name,
        date: bill.date,
        bill_type: bill.bill_type,
        amount_label: format!("{} €", bill.amount),
        status_label: bill.status.label().to_string(),
        file_url: bill.file_url,
    }
}
