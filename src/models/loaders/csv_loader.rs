use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::error::{AppResult, InputError};
use crate::models::{Room, Student};

/// 学生表格必需列
pub const STUDENT_COLUMNS: [&str; 3] = ["ID", "Name", "Section"];

/// 考场表格必需列
pub const ROOM_COLUMNS: [&str; 1] = ["Rooms"];

/// 从 CSV 加载学生名单
pub fn load_students(path: &Path) -> AppResult<Vec<Student>> {
    let students: Vec<Student> = load_records(path, &STUDENT_COLUMNS)?;
    tracing::info!("成功加载 {} 名学生: {}", students.len(), path.display());
    Ok(students)
}

/// 从 CSV 加载考场列表
pub fn load_rooms(path: &Path) -> AppResult<Vec<Room>> {
    let rooms: Vec<Room> = load_records(path, &ROOM_COLUMNS)?;
    tracing::info!("成功加载 {} 个考场: {}", rooms.len(), path.display());
    Ok(rooms)
}

/// 读取表格并反序列化每一行
///
/// 先检查表头是否包含 `required` 中的所有列，缺列时立即报错，
/// 不会等到某一行反序列化失败才发现。多余的列会被忽略。
pub fn load_records<T: DeserializeOwned>(path: &Path, required: &[&str]) -> AppResult<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| InputError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader.headers().map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(missing) = required
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(InputError::MissingColumn {
            path: path.to_path_buf(),
            column: missing.to_string(),
        }
        .into());
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: T = row.map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    tracing::debug!("{}: 读取 {} 行", path.display(), records.len());
    Ok(records)
}
