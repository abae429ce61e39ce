use std::sync::Arc;
use textscan::app::App;
use textscan::dictionary::{Dictionary, JsonDictionary, MemoryDictionary};
use textscan::engine::{logging, Config};
use textscan::ui::{ClipboardTarget, Theme, TuiManager};
use textscan::Session;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args(std::env::args().skip(1))?;
    logging::init(&config.log)?;

    let dictionary: Arc<dyn Dictionary> = match &config.dictionary.path {
        Some(path) => Arc::new(JsonDictionary::load(path)?),
        None => Arc::new(MemoryDictionary::sample()),
    };
    info!("Using dictionary {}", dictionary.name());

    // lookups run on the runtime, the UI loop stays on the main thread
    let runtime = tokio::runtime::Runtime::new()?;
    let session = Session::new(dictionary, config.resolver.clone(), runtime.handle().clone());
    let mut app = App::new(session, Box::new(ClipboardTarget::new()));

    let mut tui = TuiManager::new(Theme::from_config(&config.theme))?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
