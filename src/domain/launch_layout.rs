use std::path::Path;

use super::AppError;

/// Per-install directories handed to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchLayout {
    pub data: String,
    pub cache: String,
    pub user: String,
    pub logs: String,
}

impl LaunchLayout {
    /// Build the layout under an already-normalized base path.
    pub fn under(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            data: format!("{}/Data", base),
            cache: format!("{}/Cache", base),
            user: format!("{}/User", base),
            logs: format!("{}/Logs", base),
        }
    }

    /// Build the layout under `root`, made absolute and slash-normalized.
    pub fn resolve(root: &Path) -> Result<Self, AppError> {
        let absolute = std::path::absolute(root)
            .map_err(|e| AppError::PathResolution(format!("{}: {}", root.display(), e)))?;
        let base = to_slash(&absolute)?;
        Ok(Self::under(&base))
    }

    /// Application arguments in their fixed order.
    pub fn app_args(&self, app_id: &str) -> Vec<String> {
        vec![
            "-DataPath".to_string(),
            self.data.clone(),
            "-CachePath".to_string(),
            self.cache.clone(),
            "--UserPath".to_string(),
            self.user.clone(),
            "--LogPath".to_string(),
            self.logs.clone(),
            "--AppID".to_string(),
            app_id.to_string(),
        ]
    }
}

fn to_slash(path: &Path) -> Result<String, AppError> {
    let text = path.to_str().ok_or_else(|| {
        AppError::PathResolution(format!("{} is not valid UTF-8", path.display()))
    })?;
    Ok(text.replace('\\', "/"))
}
