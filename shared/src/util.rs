use rand::Rng;

/// Id token prefix shared by menu items and gallery images
pub const ID_PREFIX: &str = "id_";

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque id token: `id_` followed by 7 random base-36 chars.
///
/// Tokens are random, not sequential. Callers that need uniqueness within a
/// document must probe for collisions (see `StoreDocument::contains_id`).
pub fn gen_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..7)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{ID_PREFIX}{suffix}")
}
