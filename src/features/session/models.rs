use serde::{Deserialize, Serialize};

/// ユーザーの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    /// 一般社員（経費を申請する側）
    #[serde(rename = "Employee")]
    Employee,
    /// 管理者（経費を承認・却下する側）
    #[serde(rename = "Admin")]
    Admin,
}

/// ログイン中のユーザー情報
///
/// セッションストアにJSONとして保存される形のままのレコード。
/// このコアからは読み取り専用。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// ユーザーの役割
    #[serde(rename = "type")]
    pub user_type: UserType,
    /// メールアドレス
    pub email: String,
}

impl User {
    /// 社員ユーザーを作成する
    pub fn employee<S: Into<String>>(email: S) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }
}
