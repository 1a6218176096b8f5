use std::rc::Rc;
use std::sync::Arc;

use begreb_config::ui::UiConfig;
use begreb_core::TextField;
use slint::{ComponentHandle, ModelRc, Timer, TimerMode, VecModel};

pub mod bridge;
pub mod container;
pub mod events;

pub use bridge::UiBridge;
pub use container::ChannelContainer;

slint::include_modules!();

/// Run the search window on the current thread until it is closed
pub fn ui_loop(config: &UiConfig, field: Arc<TextField>, bridge: UiBridge) -> anyhow::Result<()> {
    let window = SearchWindow::new()?;
    window.set_window_title(config.title.clone().into());

    let model = Rc::new(VecModel::<ResultRow>::default());
    window.set_results(ModelRc::from(model.clone()));

    let bridge = Rc::new(bridge);

    // Mirror the field before notifying so the backend reads the fresh value
    {
        let bridge = bridge.clone();
        window.on_edited(move |text| {
            field.set(text.as_str());
            bridge.notify_input();
        });
    }

    let drain_timer = Timer::default();
    {
        let window_weak = window.as_weak();
        let model = model.clone();
        drain_timer.start(TimerMode::Repeated, config.tick(), move || {
            bridge.drain(|event| events::handle_events(event, &window_weak, &model));
        });
    }

    window.show()?;
    slint::run_event_loop()?;
    window.hide()?;

    tracing::info!("[SLINT] Event loop finished");
    Ok(())
}
