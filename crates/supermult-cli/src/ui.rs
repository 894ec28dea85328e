use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use supermultiplet::engine::progress::{Progress, ProgressCallback};
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

struct BarState {
    pb: ProgressBar,
    base_message: String,
}

/// Bridges the core's progress events to an indicatif spinner on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<BarState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner()
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.disable_steady_tick();
        pb.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(BarState {
                pb,
                base_message: String::new(),
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut state) = state.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    state.pb.reset();
                    state.pb.set_style(Self::spinner_style());
                    state.pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    state.pb.set_message(name.to_string());
                    state.base_message = name.to_string();
                }
                Progress::PhaseFinish => {
                    state.pb.disable_steady_tick();
                    let done = format!("✓ {}", state.base_message);
                    state.pb.finish_with_message(done);
                }
                Progress::StatusUpdate { text } => {
                    let status = format!("{} ({})", state.base_message, text);
                    state.pb.set_message(status);
                }
                Progress::Message(msg) => {
                    if !state.pb.is_finished() {
                        state.pb.println(format!("  {}", msg));
                    } else {
                        state.pb.set_message(msg);
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let state = handler.state.lock().unwrap();
        assert!(state.pb.is_finished());
        assert!(state.base_message.is_empty());
    }

    #[test]
    fn callback_tracks_phase_lifecycle() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart { name: "Test Phase" });
        {
            let state = handler.state.lock().unwrap();
            assert_eq!(state.pb.message(), "Test Phase");
            assert!(!state.pb.is_finished());
        }

        callback(Progress::StatusUpdate {
            text: "42 distinct weights".to_string(),
        });
        {
            let state = handler.state.lock().unwrap();
            assert_eq!(state.pb.message(), "Test Phase (42 distinct weights)");
        }

        callback(Progress::PhaseFinish);
        {
            let state = handler.state.lock().unwrap();
            assert!(state.pb.is_finished());
            assert_eq!(state.pb.message(), "✓ Test Phase");
        }
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart {
                name: "Thread Test",
            });
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        let state = handler.state.lock().unwrap();
        assert!(state.pb.is_finished());
        assert_eq!(state.pb.message(), "✓ Thread Test");
    }
}
