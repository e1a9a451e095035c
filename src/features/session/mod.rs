/// セッション機能モジュール
///
/// localStorage相当のキー・バリューストアと、そこに保持される
/// ログイン中ユーザーのレコードを提供する。このコアからは読み取り専用。
pub mod models;
pub mod store;

// 公開インターフェース
pub use models::{User, UserType};
pub use store::SessionStore;
