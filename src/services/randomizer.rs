//! 打乱服务 - 业务能力层
//!
//! 只负责"把名单打乱"，不关心考场和文档

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::models::Student;

/// 连续打乱的次数
pub const SHUFFLE_PASSES: usize = 10;

/// 名单打乱器
///
/// 给定种子时结果可复现，否则使用系统熵初始化。
pub struct Randomizer {
    rng: ChaCha8Rng,
}

impl Randomizer {
    /// 按可选种子创建
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                debug!("使用固定随机种子: {}", seed);
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }

    /// 返回打乱后的名单副本
    pub fn shuffle(&mut self, students: &[Student]) -> Vec<Student> {
        shuffle_students(students.to_vec(), &mut self.rng)
    }
}

/// 对名单做 `SHUFFLE_PASSES` 次完整的均匀打乱
///
/// 只改变顺序，不增删、不修改任何记录；空名单原样返回。
pub fn shuffle_students<R: Rng + ?Sized>(mut students: Vec<Student>, rng: &mut R) -> Vec<Student> {
    for _ in 0..SHUFFLE_PASSES {
        students.shuffle(rng);
    }
    debug!("名单已打乱 {} 次，共 {} 人", SHUFFLE_PASSES, students.len());
    students
}
