//! Error message boxes.

use wavamp_io::Error;

/// Title shown when a dropped file cannot be decoded.
pub const LOAD_FAILED: &str = "Couldn't load wav file!";
/// Title shown when the output device cannot be opened.
pub const DEVICE_FAILED: &str = "Couldn't open audio device!";

/// Message box title for a failed [`Player::load`](wavamp_io::Player::load).
pub fn load_error_title(err: &Error) -> &'static str {
    match err {
        Error::Wav(_) => LOAD_FAILED,
        Error::Stream(_)
        | Error::NoDevice
        | Error::UnsupportedFormat(_)
        | Error::DeviceNotFound(_) => DEVICE_FAILED,
    }
}

/// Show a modal error message box. Blocks until dismissed.
pub fn show_error(title: &str, text: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(text)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Report a fatal error and exit with status 1.
///
/// Prints `PANIC: title ... text` to stderr, logs it, then shows a message
/// box before exiting.
pub fn panic_and_abort(title: &str, text: &str) -> ! {
    eprintln!("{}", panic_line(title, text));
    tracing::error!(title, text, "fatal error");
    show_error(title, text);
    std::process::exit(1);
}

fn panic_line(title: &str, text: &str) -> String {
    format!("PANIC: {title} ... {text}")
}
