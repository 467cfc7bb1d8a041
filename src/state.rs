use crate::domain::traits::DatasetSource;
use crate::infrastructure::config::Config;
use crate::infrastructure::dataset::select_source;
use crate::presentation::theme::Theme;

pub struct AppState {
    pub source: Box<dyn DatasetSource>,
    pub config: Config,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let source = select_source(&config);
        let theme = Theme::from_name(&config.theme);

        Self {
            source,
            config,
            theme,
        }
    }
}
