use thiserror::Error;

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// バリデーション関連のエラー（ファイル形式不正、必須項目欠落など）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 領収書アップロードでのエラー
    #[error("アップロードエラー: {0}")]
    Upload(String),

    /// 請求レコード永続化でのエラー
    #[error("永続化エラー: {0}")]
    Persistence(String),

    /// 請求一覧取得でのエラー（メッセージはそのままUIへ露出する）
    #[error("取得エラー: {0}")]
    Fetch(String),

    /// セッション関連のエラー
    #[error("セッションエラー: {0}")]
    Session(String),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど、画面内で回復する）
    Low,
    /// 中重要度（外部コラボレーターの一時的エラーなど）
    Medium,
    /// 高重要度（セッション破損、データ形式不正など）
    High,
}

impl AppError {
    /// ユーザーに表示するためのメッセージを取得
    ///
    /// バックエンド由来のメッセージ（"Erreur 404" / "Erreur 500" など）は
    /// 改変せずそのまま返す。
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Upload(msg) => msg.clone(),
            AppError::Persistence(msg) => msg.clone(),
            AppError::Fetch(msg) => msg.clone(),
            AppError::Session(_) => "セッションが無効です".to_string(),
            AppError::Json(_) => "データ形式の解析でエラーが発生しました".to_string(),
        }
    }

    /// エラーの詳細情報を取得（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::Upload(_) => ErrorSeverity::Medium,
            AppError::Persistence(_) => ErrorSeverity::Medium,
            AppError::Fetch(_) => ErrorSeverity::Medium,
            AppError::Session(_) => ErrorSeverity::High,
            AppError::Json(_) => ErrorSeverity::High,
        }
    }

    /// バリデーションエラーを作成するヘルパー関数
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// アップロードエラーを作成するヘルパー関数
    pub fn upload<S: Into<String>>(message: S) -> Self {
        AppError::Upload(message.into())
    }

    /// 永続化エラーを作成するヘルパー関数
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        AppError::Persistence(message.into())
    }

    /// 取得エラーを作成するヘルパー関数
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        AppError::Fetch(message.into())
    }

    /// セッションエラーを作成するヘルパー関数
    pub fn session<S: Into<String>>(message: S) -> Self {
        AppError::Session(message.into())
    }
}

/// AppErrorからStringへの変換（UIバインディング層での使用のため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message()
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
