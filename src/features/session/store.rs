use crate::features::session::models::User;
use crate::shared::errors::{AppError, AppResult};
use std::collections::HashMap;

/// セッションストアでユーザーレコードを保持するキー
const USER_KEY: &str = "user";

/// キー・バリュー型のセッションストア
///
/// ブラウザのlocalStorage相当の単純な文字列ストア。ユーザーレコードは
/// `user` キーの下にJSONドキュメントとして保持される。コントローラーは
/// 環境のグローバル状態を読む代わりに、ここから解決した [`User`] を
/// コンストラクタで受け取る。
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    /// 空のセッションストアを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を保存する
    pub fn set_item<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// 値を取得する
    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// ユーザーレコードをJSONとして保存する
    ///
    /// # 引数
    /// * `user` - 保存するユーザー情報
    pub fn set_user(&mut self, user: &User) -> AppResult<()> {
        let json = serde_json::to_string(user)?;
        self.set_item(USER_KEY, json);
        Ok(())
    }

    /// ログイン中のユーザーレコードを取得する
    ///
    /// # 戻り値
    /// ユーザー情報、未ログインまたはレコード破損時はエラー
    pub fn get_user(&self) -> AppResult<User> {
        let raw = self
            .get_item(USER_KEY)
            .ok_or_else(|| AppError::session("ユーザーがログインしていません"))?;

        let user: User = serde_json::from_str(raw)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::models::UserType;

    #[test]
    fn test_set_and_get_user() {
        let mut store = SessionStore::new();
        let user = User::employee("cedric.hiely@billed.com");

        store.set_user(&user).unwrap();
        let loaded = store.get_user().unwrap();

        assert_eq!(loaded, user);
        assert_eq!(loaded.user_type, UserType::Employee);
    }

    #[test]
    fn test_get_user_without_login() {
        let store = SessionStore::new();

        let result = store.get_user();

        assert!(matches!(result, Err(AppError::Session(_))));
    }

    #[test]
    fn test_get_user_with_corrupt_record() {
        let mut store = SessionStore::new();
        store.set_item("user", "not a json document");

        let result = store.get_user();

        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn test_plain_item_access() {
        let mut store = SessionStore::new();
        store.set_item("jwt", "abc123");

        assert_eq!(store.get_item("jwt"), Some("abc123"));
        assert_eq!(store.get_item("missing"), None);
    }
}
