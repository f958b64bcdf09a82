//! The player window.

use crate::dialogs;
use crate::input::InputTranslator;
use crate::render::{self, Scene};
use crossbeam_channel::Receiver;
use std::path::Path;
use std::sync::Arc;
use wavamp_core::{Action, BackgroundPulse, ControlLayout, Rect, dispatch};
use wavamp_io::{AudioBackend, PlaybackMode, Player, PlayerSettings};

/// Result of applying one [`Action`].
#[derive(Debug)]
pub enum Outcome {
    /// Keep running.
    Continue,
    /// Close the window.
    Quit,
    /// A dropped file could not be played; nothing is loaded now.
    LoadFailed(wavamp_io::Error),
}

/// Window state: the player plus everything drawn around it.
pub struct AmpApp {
    player: Player,
    layout: ControlLayout,
    input: InputTranslator,
    pulse: BackgroundPulse,
    stream_errors: Receiver<String>,
    last_error: Option<String>,
}

impl AmpApp {
    /// Create the app for a window of `width` x `height` points.
    ///
    /// The volume slider is only laid out in converted mode.
    pub fn new(
        backend: Arc<dyn AudioBackend>,
        settings: PlayerSettings,
        width: i32,
        height: i32,
    ) -> Self {
        let (tx, stream_errors) = crossbeam_channel::bounded::<String>(16);
        let mut layout = ControlLayout::for_window(width, height);
        if settings.mode == PlaybackMode::Direct {
            layout.volume = Rect::default();
        }
        let player = Player::new(backend, settings).with_stream_error_handler(Arc::new(
            move |msg: &str| {
                let _ = tx.try_send(msg.to_string());
            },
        ));

        Self {
            player,
            layout,
            input: InputTranslator::new(),
            pulse: BackgroundPulse::new(),
            stream_errors,
            last_error: None,
        }
    }

    /// The player driven by this window.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Control rectangles in use.
    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Load `path`, showing a message box on failure.
    pub fn open(&mut self, path: &Path) {
        if let Outcome::LoadFailed(err) = self.apply(Action::Load(path.to_path_buf())) {
            dialogs::show_error(dialogs::load_error_title(&err), &err.to_string());
        }
    }

    /// Apply one action to the player.
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Quit => return Outcome::Quit,
            Action::Rewind => self.player.rewind(),
            Action::TogglePause => {
                self.player.toggle_pause();
            }
            Action::SetVolume(volume) => self.player.set_volume(volume),
            Action::Load(path) => {
                self.last_error = None;
                if let Err(err) = self.player.load(&path) {
                    tracing::warn!(path = %path.display(), error = %err, "couldn't play dropped file");
                    return Outcome::LoadFailed(err);
                }
            }
        }
        Outcome::Continue
    }

    /// Move stream errors from the audio thread into the status line.
    fn drain_stream_errors(&mut self) {
        while let Ok(msg) = self.stream_errors.try_recv() {
            tracing::warn!(error = %msg, "output stream error");
            self.last_error = Some(msg);
        }
    }

    fn status(&self) -> String {
        let name = self
            .player
            .loaded_path()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());
        render::status_text(
            name.as_deref(),
            self.player.is_paused(),
            self.last_error.as_deref(),
        )
    }
}

impl eframe::App for AmpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.input.collect(ctx) {
            let Some(action) = dispatch(&self.layout, event) else {
                continue;
            };
            match self.apply(action) {
                Outcome::Continue => {}
                Outcome::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                Outcome::LoadFailed(err) => {
                    dialogs::show_error(dialogs::load_error_title(&err), &err.to_string());
                }
            }
        }

        self.drain_stream_errors();
        self.player.pump();

        let status = self.status();
        let scene = Scene {
            green: self.pulse.advance(),
            layout: &self.layout,
            volume: (!self.layout.volume.is_empty()).then(|| self.player.volume()),
            status: &status,
        };
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| render::draw(ui.painter(), &scene));

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wavamp_core::Volume;
    use wavamp_io::{
        AudioDevice, BackendStreamConfig, ErrorCallback, OutputCallback, StreamHandle, WavSpec,
        write_wav_interleaved,
    };

    struct NullBackend;

    impl AudioBackend for NullBackend {
        fn name(&self) -> &'static str {
            "null"
        }

        fn list_devices(&self) -> wavamp_io::Result<Vec<AudioDevice>> {
            Ok(Vec::new())
        }

        fn default_output_device(&self) -> wavamp_io::Result<Option<AudioDevice>> {
            Ok(None)
        }

        fn build_output_stream(
            &self,
            _config: &BackendStreamConfig,
            callback: OutputCallback,
            error_callback: ErrorCallback,
        ) -> wavamp_io::Result<StreamHandle> {
            Ok(StreamHandle::new((callback, error_callback)))
        }
    }

    fn app(mode: PlaybackMode) -> AmpApp {
        let settings = PlayerSettings {
            mode,
            ..PlayerSettings::default()
        };
        AmpApp::new(Arc::new(NullBackend), settings, 640, 480)
    }

    fn write_tone(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("tone.wav");
        let samples: Vec<f32> = (0..4800).map(|i| (i as f32 * 0.05).sin() * 0.5).collect();
        write_wav_interleaved(&path, &samples, WavSpec::default()).unwrap();
        path
    }

    #[test]
    fn direct_mode_has_no_slider() {
        assert!(app(PlaybackMode::Direct).layout().volume.is_empty());
        assert!(!app(PlaybackMode::Converted).layout().volume.is_empty());
    }

    #[test]
    fn quit_action_closes() {
        assert!(matches!(app(PlaybackMode::Converted).apply(Action::Quit), Outcome::Quit));
    }

    #[test]
    fn controls_drive_the_player() {
        let dir = TempDir::new().unwrap();
        let path = write_tone(&dir);
        let mut app = app(PlaybackMode::Converted);

        assert!(matches!(app.apply(Action::Load(path.clone())), Outcome::Continue));
        assert_eq!(app.player().loaded_path(), Some(path.as_path()));
        assert!(app.player().is_paused());

        app.apply(Action::TogglePause);
        assert!(!app.player().is_paused());

        app.apply(Action::SetVolume(Volume::new(0.5)));
        assert_eq!(app.player().volume().get(), 0.5);
        assert_eq!(app.status(), "tone.wav [playing]");
    }

    #[test]
    fn failed_load_is_reported_and_unloads() {
        let dir = TempDir::new().unwrap();
        let path = write_tone(&dir);
        let mut app = app(PlaybackMode::Direct);
        app.apply(Action::Load(path));

        let outcome = app.apply(Action::Load(dir.path().join("missing.wav")));
        match outcome {
            Outcome::LoadFailed(err) => {
                assert_eq!(dialogs::load_error_title(&err), dialogs::LOAD_FAILED);
            }
            other => panic!("expected load failure, got {other:?}"),
        }
        assert!(!app.player().is_loaded());
    }

    #[test]
    fn file_without_channels_gets_load_title() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.wav");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&36u32.to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes()); // channels
        bytes.extend_from_slice(&8000u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&0u32.to_le_bytes());
        std::fs::write(&path, bytes).unwrap();

        let mut app = app(PlaybackMode::Direct);
        match app.apply(Action::Load(path)) {
            Outcome::LoadFailed(err) => {
                assert_eq!(dialogs::load_error_title(&err), dialogs::LOAD_FAILED);
            }
            other => panic!("expected load failure, got {other:?}"),
        }
    }

    #[test]
    fn stream_errors_reach_the_status_line() {
        let mut app = app(PlaybackMode::Converted);
        let (tx, rx) = crossbeam_channel::bounded(1);
        app.stream_errors = rx;
        tx.send("device unplugged".to_string()).unwrap();
        app.drain_stream_errors();
        assert_eq!(app.status(), "Drop a .wav file here | device unplugged");
    }
}
