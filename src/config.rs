//! 程序配置
//!
//! 从 YAML / TOML 文件加载考试信息和输入路径，再用环境变量覆盖可选项。

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::{AppResult, ConfigError};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// 默认输出目录
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// PDF 转换后端
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConverterKind {
    /// LibreOffice 无头模式直接转换 docx
    #[default]
    Office,
    /// 无头 Chromium 打印同一份文档的 HTML 版本
    Chromium,
}

impl FromStr for ConverterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "office" => Ok(ConverterKind::Office),
            "chromium" => Ok(ConverterKind::Chromium),
            other => Err(format!("未知的转换后端: {}", other)),
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConverterKind::Office => write!(f, "office"),
            ConverterKind::Chromium => write!(f, "chromium"),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// 考场表格路径（需要 `Rooms` 列）
    pub rooms_file_path: PathBuf,
    /// 学生表格路径（需要 `ID` / `Name` / `Section` 列）
    pub students_file_path: PathBuf,
    /// 课程代码
    #[serde(deserialize_with = "deserialize_label")]
    pub course_code: String,
    /// 考试类型，如 Midterm / Final
    #[serde(deserialize_with = "deserialize_label")]
    pub exam_type: String,
    /// 学期
    #[serde(deserialize_with = "deserialize_label")]
    pub semester: String,
    /// 年份，可以写成字符串或整数
    #[serde(deserialize_with = "deserialize_label")]
    pub year: String,

    // --- 可选项 ---
    /// 输出目录
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// 随机种子，设置后分配结果可复现
    #[serde(default)]
    pub seed: Option<u64>,
    /// PDF 转换后端
    #[serde(default)]
    pub converter: ConverterKind,
    /// soffice 可执行文件
    #[serde(default = "default_soffice_path")]
    pub soffice_path: String,
    /// Chromium 可执行文件，不填则自动查找
    #[serde(default)]
    pub chrome_executable: Option<PathBuf>,
    /// 转换超时（秒），不填则一直等待
    #[serde(default)]
    pub conversion_timeout_secs: Option<u64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_soffice_path() -> String {
    "soffice".to_string()
}

impl Config {
    /// 从文件加载配置，并应用环境变量覆盖
    ///
    /// # 参数
    /// - `path`: 配置文件路径，按扩展名选择 YAML 或 TOML
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(path, &content)?;
        config.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// 按扩展名解析配置内容
    pub fn parse(path: &Path, content: &str) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let config: Config = match ext.as_deref() {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(content).map_err(|source| ConfigError::YamlParseFailed {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Some("toml") => toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.to_path_buf(),
                source,
            })?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                }
                .into())
            }
        };

        Ok(config)
    }

    /// 应用环境变量覆盖
    ///
    /// 支持 `SEATPLAN_OUTPUT_DIR` / `SEATPLAN_SEED` / `SEATPLAN_CONVERTER`。
    /// `lookup` 便于测试时注入变量表。
    pub fn with_env_overrides<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("SEATPLAN_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup("SEATPLAN_SEED") {
            self.seed = Some(parse_env("SEATPLAN_SEED", &seed, "u64")?);
        }
        if let Some(kind) = lookup("SEATPLAN_CONVERTER") {
            self.converter = parse_env("SEATPLAN_CONVERTER", &kind, "office|chromium")?;
        }
        Ok(self)
    }

    /// 考试元信息，用于页眉和文件名
    pub fn exam_meta(&self) -> crate::models::ExamMeta {
        crate::models::ExamMeta {
            course_code: self.course_code.clone(),
            exam_type: self.exam_type.clone(),
            semester: self.semester.clone(),
            year: self.year.clone(),
        }
    }
}

fn parse_env<T: FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        }
        .into()
    })
}

// 考试信息只用于显示，字符串和整数都接受
fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Visitor;

    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(YearVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    const YAML: &str = r#"
rooms_file_path: data/rooms.csv
students_file_path: data/students.csv
course_code: CSE101
exam_type: Midterm
semester: Spring
year: 2024
"#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_yaml_with_defaults() {
        let config = Config::parse(Path::new("config.yaml"), YAML).unwrap();
        assert_eq!(config.course_code, "CSE101");
        assert_eq!(config.year, "2024");
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.converter, ConverterKind::Office);
        assert_eq!(config.soffice_path, "soffice");
        assert!(config.seed.is_none());
        assert!(config.conversion_timeout_secs.is_none());
    }

    #[test]
    fn test_parse_toml_with_string_year() {
        let toml = r#"
rooms_file_path = "rooms.csv"
students_file_path = "students.csv"
course_code = "EEE205"
exam_type = "Final"
semester = "Fall"
year = "2023"
converter = "chromium"
seed = 7
"#;
        let config = Config::parse(Path::new("exam.toml"), toml).unwrap();
        assert_eq!(config.year, "2023");
        assert_eq!(config.converter, ConverterKind::Chromium);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let yaml = YAML.replace("semester: Spring\n", "");
        let err = Config::parse(Path::new("config.yaml"), &yaml).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::YamlParseFailed { .. })));
        assert!(err.to_string().contains("semester"));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Config::parse(Path::new("config.json"), "{}").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::parse(Path::new("config.yaml"), YAML)
            .unwrap()
            .with_env_overrides(|name| match name {
                "SEATPLAN_OUTPUT_DIR" => Some("out".to_string()),
                "SEATPLAN_SEED" => Some("42".to_string()),
                "SEATPLAN_CONVERTER" => Some("Chromium".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.converter, ConverterKind::Chromium);

        let untouched = Config::parse(Path::new("config.yaml"), YAML)
            .unwrap()
            .with_env_overrides(no_env)
            .unwrap();
        assert_eq!(untouched.output_dir, PathBuf::from("results"));
    }

    #[test]
    fn test_invalid_env_seed() {
        let err = Config::parse(Path::new("config.yaml"), YAML)
            .unwrap()
            .with_env_overrides(|name| (name == "SEATPLAN_SEED").then(|| "abc".to_string()))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::EnvVarParseFailed { .. })));
    }
}
