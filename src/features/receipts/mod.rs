/// 領収書機能モジュール
///
/// アップロード候補のバリデーションと、アップロード済み領収書の参照モデルを
/// 提供する。実際の転送はバックエンドコラボレーターが担う。
pub mod models;
pub mod validator;

// 公開インターフェース
pub use models::{UploadCandidate, UploadedReceipt};
pub use validator::{validate, FileValidation};
