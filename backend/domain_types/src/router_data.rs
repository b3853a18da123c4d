use common_utils::ValidationError;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

/// Persisted gateway settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    pub project_id: String,
    pub project_password: Secret<String>,
    /// `"true"` or `"false"`; anything other than `"false"`, including an absent
    /// value, keeps the processor in test mode.
    #[serde(default)]
    pub sandbox: Option<String>,
}

impl GatewaySettings {
    pub fn is_sandbox(&self) -> bool {
        self.sandbox.as_deref() != Some("false")
    }
}

/// Settings exactly as submitted from a settings form. The password is read
/// but never written back out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewaySettingsInput {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub project_password: Option<Secret<String>>,
    #[serde(default)]
    pub sandbox: Option<String>,
}

impl GatewaySettingsInput {
    pub fn project_id(&self) -> &str {
        self.project_id.as_deref().unwrap_or_default()
    }

    pub fn project_password(&self) -> &str {
        self.project_password
            .as_ref()
            .map(|password| password.peek().as_str())
            .unwrap_or_default()
    }
}

/// Result of evaluating the settings rules: the submitted input, echoed back
/// default filled and without the password, alongside the first failed rule
/// of each field.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsValidation {
    pub meta: GatewaySettingsInput,
    pub errors: Vec<ValidationError>,
}

impl SettingsValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_settings(self) -> Result<GatewaySettings, Vec<ValidationError>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        let GatewaySettingsInput {
            project_id,
            project_password,
            sandbox,
        } = self.meta;
        match (project_id, project_password) {
            (Some(project_id), Some(project_password)) => Ok(GatewaySettings {
                project_id,
                project_password,
                sandbox,
            }),
            _ => Err(vec![ValidationError::new(
                "project_id",
                "required",
                "Project ID and Project Password are required.",
            )]),
        }
    }
}
