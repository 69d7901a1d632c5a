//! Implementation of the `discovery-lastfm info` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::{output, yes_no, CommandOutput, DetailView};
use crate::domain::models::config::{Config, ContainerInfo};
use crate::infrastructure::config::ConfigLoader;

/// Output of `info`, serialized as the bare snapshot
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct InfoOutput {
    /// Snapshot with a real validation marker
    pub info: ContainerInfo,
    /// Validation messages, listed in the human view only
    #[serde(skip)]
    pub problems: Vec<String>,
}

impl CommandOutput for InfoOutput {
    fn to_human(&self) -> String {
        let mut view = container_detail(&self.info);
        if !self.problems.is_empty() {
            view = self
                .problems
                .iter()
                .fold(view.section("Problems"), |view, problem| view.item(problem));
        }
        view.render()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.info).unwrap_or_default()
    }
}

/// Key/value rendering of the diagnostic snapshot
pub fn container_view(info: &ContainerInfo) -> String {
    container_detail(info).render()
}

fn container_detail(info: &ContainerInfo) -> DetailView {
    DetailView::new("Container configuration")
        .field("music_service", &info.music_service)
        .field("container_mode", &info.container_mode)
        .field("dry_run", &yes_no(info.dry_run))
        .field("debug", &yes_no(info.debug))
        .field("log_path", &info.log_path.display().to_string())
        .field("cache_path", &info.cache_path.display().to_string())
        .field("redis_enabled", &yes_no(info.redis_enabled))
        .field("auto_update_enabled", &yes_no(info.auto_update_enabled))
        .field(
            "update_check_interval",
            &format!("{}h", info.update_check_interval),
        )
        .field("backup_retention", &format!("{}d", info.backup_retention))
        .field("allow_prerelease", &yes_no(info.allow_prerelease))
        .field("validation_passed", &yes_no(info.validation_passed))
}

/// Print the diagnostic snapshot; the marker reflects a real validation run
/// but a failing configuration does not fail the command.
pub fn execute(config: &Config, json_mode: bool) -> Result<bool> {
    let problems: Vec<String> = ConfigLoader::validate(config)
        .err()
        .map(|err| err.issues().iter().map(ToString::to_string).collect())
        .unwrap_or_default();

    let mut info = config.container_info();
    info.validation_passed = problems.is_empty();

    output(&InfoOutput { info, problems }, json_mode);
    Ok(true)
}
