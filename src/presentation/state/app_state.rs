use std::sync::Arc;

use crate::application::tools::SarvamToolset;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub toolset: Arc<SarvamToolset>,
    pub settings: Settings,
}
