use crate::error::{AppError, AppResult, FileError};
use crate::models::question::QuestionRecord;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// 从 JSON 文件加载全部题目
pub fn load_questions(json_file_path: &Path) -> AppResult<Vec<QuestionRecord>> {
    if !json_file_path.exists() {
        return Err(AppError::file_not_found(json_file_path));
    }

    let content = fs::read_to_string(json_file_path)
        .map_err(|e| AppError::file_read_failed(json_file_path, e))?;

    let questions: Vec<QuestionRecord> =
        serde_json::from_str(&content).map_err(|source| FileError::JsonParseFailed {
            path: json_file_path.display().to_string(),
            source,
        })?;

    tracing::debug!(
        "从 {} 加载了 {} 道题目",
        json_file_path.display(),
        questions.len()
    );

    Ok(questions)
}

/// 将题目列表写入 JSON 文件
///
/// 4 空格缩进，非 ASCII 字符原样输出；父目录不存在时自动创建。
/// 先写入同目录下的临时文件再整体替换目标，写入中途失败时原文件保持不变。
pub fn save_questions(json_file_path: &Path, questions: &[QuestionRecord]) -> AppResult<()> {
    let bytes = to_pretty_json(questions)?;

    let dir = match json_file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| FileError::CreateDirFailed {
            path: dir.display().to_string(),
            source,
        })?;
    }

    let write_failed = |e: std::io::Error| AppError::file_write_failed(json_file_path, e);
    let mut temp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    temp.write_all(&bytes).map_err(write_failed)?;
    temp.as_file().sync_all().map_err(write_failed)?;
    // 失败时 PersistError 携带的临时文件随之删除
    temp.persist(json_file_path).map_err(|e| write_failed(e.error))?;

    tracing::debug!(
        "已写入 {} 道题目到 {}",
        questions.len(),
        json_file_path.display()
    );

    Ok(())
}

fn to_pretty_json(questions: &[QuestionRecord]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    questions
        .serialize(&mut serializer)
        .map_err(FileError::JsonSerializeFailed)?;
    Ok(buf)
}
