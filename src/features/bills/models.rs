use crate::shared::errors::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use chrono_tz::Europe::Paris;
use serde::{Deserialize, Serialize};

/// 請求日付の保存形式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 経費カテゴリの許可リスト
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Équipement et matériel",
    "Fournitures de bureau",
];

/// 請求レコードのライフサイクル状態
///
/// 承認・却下はバックエンド側（管理者）が設定する。このコアが設定するのは
/// 初期値のPendingのみ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// 承認待ち
    Pending,
    /// 承認済み
    Accepted,
    /// 却下
    Refused,
}

impl BillStatus {
    /// UI表示用のラベル（フランス語）を取得
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }
}

/// 経費請求レコード
///
/// 提出時にNewBillFormが一度だけ構築し、以降はバックエンドが所有する。
/// 一覧コントローラーが保持するのは表示用の読み取り専用コピーのみ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    /// レコードID
    pub id: String,
    /// 申請者のメールアドレス（セッションユーザー由来）
    pub email: String,
    /// 経費名
    pub name: String,
    /// 発生日（YYYY-MM-DD）
    pub date: String,
    /// 経費カテゴリ
    #[serde(rename = "type")]
    pub bill_type: String,
    /// 金額
    pub amount: f64,
    /// 付加価値税
    pub vat: f64,
    /// 税率（0〜100）
    pub pct: u8,
    /// 備考
    pub commentary: Option<String>,
    /// 領収書ファイル名（アップロード成功後のみ設定される）
    pub file_name: String,
    /// 領収書URL（アップロード成功後のみ設定される）
    pub file_url: String,
    /// ライフサイクル状態
    pub status: BillStatus,
    /// 作成日時（RFC3339、パリ時間）
    pub created_at: String,
}

/// 請求レコード作成用DTO
///
/// フォームの入力値と、事前アップロードで得た領収書の参照を束ねる。
#[derive(Debug, Clone, Deserialize)]
pub struct BillDraft {
    pub name: String,
    pub date: String,
    pub bill_type: String,
    pub amount: f64,
    pub vat: f64,
    pub pct: u8,
    pub commentary: Option<String>,
    pub file_name: String,
    pub file_url: String,
}

impl BillRecord {
    /// DTOから請求レコードを構築する
    ///
    /// # 引数
    /// * `draft` - フォーム入力と領収書参照
    /// * `email` - セッションユーザーのメールアドレス
    ///
    /// # 戻り値
    /// 検証済みの請求レコード、不変条件を破る入力はバリデーションエラー
    ///
    /// # 不変条件
    /// - `name` は空でない
    /// - `date` はYYYY-MM-DD形式の実在する日付
    /// - `bill_type` はカテゴリ許可リストに含まれる
    /// - `amount` と `vat` は0以上
    /// - `pct` は100以下
    /// - `file_url` は空でない（アップロード成功の証跡）
    pub fn new(draft: BillDraft, email: &str) -> AppResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(AppError::validation("経費名は必須です"));
        }

        if NaiveDate::parse_from_str(&draft.date, DATE_FORMAT).is_err() {
            return Err(AppError::validation(format!(
                "日付の形式が不正です: {}",
                draft.date
            )));
        }

        if !EXPENSE_TYPES.contains(&draft.bill_type.as_str()) {
            return Err(AppError::validation(format!(
                "未知の経費カテゴリです: {}",
                draft.bill_type
            )));
        }

        if draft.amount < 0.0 {
            return Err(AppError::validation("金額は0以上である必要があります"));
        }

        if draft.vat < 0.0 {
            return Err(AppError::validation("VATは0以上である必要があります"));
        }

        if draft.pct > 100 {
            return Err(AppError::validation(
                "税率は0〜100の範囲である必要があります",
            ));
        }

        if draft.file_url.trim().is_empty() {
            return Err(AppError::validation(
                "領収書がアップロードされていません",
            ));
        }

        // パリ時間で作成日時を記録
        let created_at = Utc::now().with_timezone(&Paris).to_rfc3339();

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: draft.name,
            date: draft.date,
            bill_type: draft.bill_type,
            amount: draft.amount,
            vat: draft.vat,
            pct: draft.pct,
            commentary: draft.commentary,
            file_name: draft.file_name,
            file_url: draft.file_url,
            status: BillStatus::Pending,
            created_at,
        })
    }
}
