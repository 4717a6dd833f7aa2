use std::path::PathBuf;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 输入表格错误
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 考场分配错误
    #[error("分配错误: {0}")]
    Allocation(#[from] AllocationError),
    /// 文档输出错误
    #[error("输出错误: {0}")]
    Output(#[from] OutputError),
    /// PDF 转换错误
    #[error("转换错误: {0}")]
    Convert(#[from] ConvertError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("无法读取配置文件 {}: {}", .path.display(), .source)]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// YAML 解析失败（缺少必填键也会落到这里）
    #[error("YAML解析失败 ({}): {}", .path.display(), .source)]
    YamlParseFailed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {}", .path.display(), .source)]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// 不支持的配置文件格式
    #[error("不支持的配置文件格式: {} (仅支持 .yaml / .yml / .toml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 输入表格错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 无法打开表格文件
    #[error("无法打开表格 {}: {}", .path.display(), .source)]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// 表头缺少必需列
    #[error("表格 {} 缺少必需列 '{}'", .path.display(), .column)]
    MissingColumn { path: PathBuf, column: String },
    /// 行解析失败
    #[error("表格 {} 解析失败: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// 考场分配错误
#[derive(Debug, Error)]
pub enum AllocationError {
    /// 考场列表为空，无法分配
    #[error("考场列表为空，无法分配 {students} 名学生")]
    NoRooms { students: usize },
}

/// 文档输出错误
#[derive(Debug, Error)]
pub enum OutputError {
    /// 创建输出目录失败
    #[error("创建输出目录失败 ({}): {}", .path.display(), .source)]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {}", .path.display(), .source)]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// PDF 转换错误
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 无法启动外部转换程序
    #[error("无法启动转换程序 {program}: {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// 转换程序返回非零退出码
    #[error("转换程序 {program} 执行失败 (退出码: {code:?}): {stderr}")]
    ProcessFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    /// 转换超时
    #[error("转换 {} 超时 ({} 秒)", .path.display(), .secs)]
    TimedOut { path: PathBuf, secs: u64 },
    /// 转换完成但没有生成 PDF
    #[error("转换完成但未找到输出文件: {}", .path.display())]
    MissingOutput { path: PathBuf },
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
    /// 无头浏览器配置失败
    #[error("无头浏览器配置失败: {0}")]
    BrowserConfig(String),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件写入错误
    pub fn write_failed(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Output(OutputError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Convert(ConvertError::Browser(err))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
