use crate::core::ConfigProvider;
use crate::domain::model::{ElementId, ReportKey, Widget, WidgetHandles, WidgetKind};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // ${VAR_NAME}
    Regex::new(r"\$\{([^}]+)\}").unwrap()
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub dashboard: DashboardSection,
    pub source: SourceConfig,
    pub behavior: Option<BehaviorConfig>,
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    pub report_transport_errors: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub kind: WidgetKind,
    pub report_type: String,
    pub report_period: String,
    /// 覆寫預設的掛載點 id (`{type}_{period}`)
    pub mount: Option<String>,
    /// 覆寫預設的錯誤面板 id (`{type}_{period}_error_info`)
    pub error_info: Option<String>,
}

impl WidgetConfig {
    pub fn to_widget(&self) -> Result<Widget> {
        let key = ReportKey::new(&self.report_type, &self.report_period)?;
        let defaults = WidgetHandles::for_key(&key);
        let handles = WidgetHandles::new(
            self.mount.clone().map(ElementId::new).unwrap_or(defaults.mount),
            self.error_info
                .clone()
                .map(ElementId::new)
                .unwrap_or(defaults.error_info),
        );
        Ok(Widget::new(self.kind, key).with_handles(handles))
    }
}

impl DashboardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORTS_URL})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("dashboard.name", &self.dashboard.name)?;

        let base_url = validate_required_field("source.base_url", &self.source.base_url)?;
        validate_url("source.base_url", base_url)?;

        if self.widgets.is_empty() {
            return Err(ReportError::MissingConfig {
                field: "widgets".to_string(),
            });
        }

        for widget in &self.widgets {
            widget.to_widget()?;
            if let Some(mount) = &widget.mount {
                validate_non_empty_string("widgets.mount", mount)?;
            }
            if let Some(error_info) = &widget.error_info {
                validate_non_empty_string("widgets.error_info", error_info)?;
            }
        }

        Ok(())
    }

    /// 命令列覆寫 base_url
    pub fn override_base_url(&mut self, base_url: String) {
        self.source.base_url = Some(base_url);
    }
}

impl ConfigProvider for DashboardConfig {
    fn base_url(&self) -> &str {
        self.source.base_url.as_deref().unwrap_or_default()
    }

    fn widgets(&self) -> Result<Vec<Widget>> {
        self.widgets.iter().map(WidgetConfig::to_widget).collect()
    }

    fn report_transport_errors(&self) -> bool {
        self.behavior
            .as_ref()
            .and_then(|b| b.report_transport_errors)
            .unwrap_or(false)
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
