use crate::core::ConfigProvider;
use crate::domain::model::Widget;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "report-widgets")]
#[command(about = "Render dashboard report widgets from a reporting API")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Widgets as `line:<type>/<period>` or `compare:<type>/<period>`
    #[arg(required = true)]
    pub widgets: Vec<Widget>,

    #[arg(long, help = "Log reports the API could not be reached for")]
    pub report_transport_errors: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn widgets(&self) -> Result<Vec<Widget>> {
        Ok(self.widgets.clone())
    }

    fn report_transport_errors(&self) -> bool {
        self.report_transport_errors
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if self.widgets.is_empty() {
            return Err(ReportError::MissingConfig {
                field: "widgets".to_string(),
            });
        }
        Ok(())
    }
}
