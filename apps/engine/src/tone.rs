//! Last-resort audible acknowledgement tone.

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use std::time::Duration;

pub const TONE_FREQUENCY_HZ: f32 = 800.0;
pub const TONE_DURATION_MS: u64 = 200;

/// Something that can emit the fallback tone.
///
/// Trait seam so the resolver can be exercised without an audio device.
pub trait ToneGenerator: Send + Sync {
    /// Fire-and-forget; implementations must never surface an error.
    fn play(&self);
}

/// Plays the tone through the default audio output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RodioTone;

impl ToneGenerator for RodioTone {
    fn play(&self) {
        // The tone blocks for its duration; keep it off the async runtime.
        std::thread::spawn(play_acknowledgement_tone);
    }
}

/// Emit a short fixed-frequency tone acknowledging that the request was
/// heard even though no pronunciation audio could be obtained.
///
/// This is already the last-resort path, so every internal failure is
/// swallowed; the worst outcome is silence.
pub fn play_acknowledgement_tone() {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(out) => out,
        Err(e) => {
            tracing::debug!("No audio output for acknowledgement tone: {}", e);
            return;
        }
    };

    let sink = match Sink::try_new(&handle) {
        Ok(sink) => sink,
        Err(e) => {
            tracing::debug!("Cannot open audio sink for acknowledgement tone: {}", e);
            return;
        }
    };

    let source = SineWave::new(TONE_FREQUENCY_HZ)
        .take_duration(Duration::from_millis(TONE_DURATION_MS))
        .amplify(0.25);

    sink.append(source);
    sink.sleep_until_end();
}
