use serde::Serialize;
use soundbrowser_runtime::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    /// False when the defaults are shown because no file exists yet.
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub created: bool,
}
