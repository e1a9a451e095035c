//! 領収書ファイルのバリデーション
//!
//! 純粋関数のみ。I/Oを行わないため、テーブル駆動で網羅的にテストできる。

/// 受理可能な画像形式の拡張子
const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// ファイルバリデーションの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileValidation {
    /// 受理（アップロードへ進む）
    Accepted,
    /// 拒否（候補は破棄され、UI側でエラー表示される）
    Rejected,
}

impl FileValidation {
    /// 受理されたかどうか
    pub fn is_accepted(&self) -> bool {
        matches!(self, FileValidation::Accepted)
    }
}

/// 宣言されたメディアタイプを検証する
///
/// MIMEタイプ（`image/png` など）と拡張子付きファイル名（`recu.JPG` など）の
/// どちらでも判定できる。比較は大文字小文字を区別しない。
///
/// # 引数
/// * `media_type` - 宣言されたメディアタイプ
///
/// # 戻り値
/// 許可リスト（PNG、JPG、JPEG）に一致すればAccepted、それ以外はRejected
pub fn validate(media_type: &str) -> FileValidation {
    let normalized = media_type.trim().to_ascii_lowercase();

    if normalized.is_empty() {
        return FileValidation::Rejected;
    }

    // MIMEタイプの場合はサブタイプ、ファイル名の場合は最後の拡張子で判定
    let suffix = match normalized.strip_prefix("image/") {
        Some(subtype) => subtype,
        None => normalized.rsplit('.').next().unwrap_or(&normalized),
    };

    if ALLOWED_EXTENSIONS.contains(&suffix) {
        FileValidation::Accepted
    } else {
        FileValidation::Rejected
    }
}
