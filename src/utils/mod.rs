//! Short code generation
//!
//! Codes are drawn from `rand`'s thread-local generator, a ChaCha-based CSPRNG
//! seeded from the operating system, so they cannot be predicted from request
//! order or timing.

/// 短码字符表（62 个字符）
pub const CODE_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 短码长度
pub const CODE_LENGTH: usize = 6;

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
        .take(length)
        .collect()
}

/// 生成一个标准长度的短码
pub fn generate_code() -> String {
    generate_random_code(CODE_LENGTH)
}

/// 检查字符串是否具备合法短码的形状（长度 + 字符表）
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}

/// Source of candidate short codes.
///
/// Generators are pure: they never look at the store, uniqueness is the
/// store's job.
pub trait CodeGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Default generator backed by the thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}
