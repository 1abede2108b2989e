use anyhow::{Context, Result};
use log::{debug, info};
use theme_switch::{ApplyReport, LinkOptions, ThemeError, ThemeRegistry, apply_theme, theme};

use crate::settings::ResolvedConfig;

/// Coordinates loading the themes document and running a command against it.
pub(crate) struct ThemeWorkflow {
    registry: ThemeRegistry,
    link: LinkOptions,
}

impl ThemeWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig { themes_file, link } = config;
        debug!("reading themes from {}", themes_file.display());
        let registry = theme::load(&themes_file)
            .with_context(|| format!("cannot load themes from {}", themes_file.display()))?;
        Ok(Self::new(registry, link))
    }

    pub(crate) fn new(registry: ThemeRegistry, link: LinkOptions) -> Self {
        Self { registry, link }
    }

    pub(crate) fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Apply the named theme. An unknown name touches nothing.
    pub(crate) fn set(&self, name: &str) -> Result<ApplyReport, ThemeError> {
        let theme = self
            .registry
            .find_by_name(name)
            .ok_or_else(|| ThemeError::not_found(name))?;
        info!(
            "applying theme '{}' ({} app(s), {})",
            theme.name(),
            theme.len(),
            self.link.kind
        );
        apply_theme(theme, &self.link)
    }
}
