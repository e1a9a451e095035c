use serde::{Deserialize, Serialize};

/// アップロード候補（バリデーション待ちの一時データ）
///
/// ファイル名と宣言されたメディアタイプの組。バリデーション直後に破棄され、
/// 受理された場合のみアップロードへ進む。
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate {
    /// 選択されたファイル名
    pub file_name: String,
    /// 宣言されたメディアタイプ（MIMEまたは拡張子付きファイル名）
    pub media_type: String,
}

impl UploadCandidate {
    /// アップロード候補を作成する
    pub fn new<N: Into<String>, M: Into<String>>(file_name: N, media_type: M) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
        }
    }
}

/// アップロード成功時にバックエンドが返す領収書の参照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedReceipt {
    /// 保存先URL
    pub file_url: String,
    /// 保存されたファイル名
    pub file_name: String,
}
