//! Text-to-speech
//!
//! Speech is a collaborator of the slides, never a requirement: a missing
//! speech program turns the speaker into a no-op.

use std::process::{Child, Command, Stdio};

use tracing::{debug, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;

/// Rate used when reading vocabulary words
pub const VOCAB_RATE: f32 = 0.8;

/// Rate used when reading an MFP target phrase
pub const TARGET_RATE: f32 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    /// Relative speed, 1.0 is the configured words per minute
    pub rate: f32,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, rate: f32) -> Self {
        Self {
            text: text.into(),
            rate,
        }
    }
}

/// Something that can read text aloud
///
/// At most one utterance is audible: a new request cancels the current one.
pub trait Speaker: Send {
    fn speak(&mut self, request: &SpeechRequest) -> Result<(), SpeechError>;

    fn cancel(&mut self);

    fn is_available(&self) -> bool {
        true
    }
}

/// Speaks through an external program such as `espeak-ng`
pub struct CommandSpeaker {
    program: String,
    voice: String,
    words_per_minute: u32,
    current: Option<Child>,
    disabled: bool,
}

impl CommandSpeaker {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            program: config.program.clone(),
            voice: config.voice.clone(),
            words_per_minute: config.words_per_minute,
            current: None,
            disabled: false,
        }
    }

    /// Words per minute for a relative rate, never below 1
    pub fn words_per_minute_for(&self, rate: f32) -> u32 {
        ((self.words_per_minute as f32 * rate).round() as u32).max(1)
    }

    fn command(&self, request: &SpeechRequest) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-v")
            .arg(&self.voice)
            .arg("-s")
            .arg(self.words_per_minute_for(request.rate).to_string())
            .arg("--")
            .arg(&request.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Speaker for CommandSpeaker {
    /// Returns an error only on the spawn failure that disables the speaker
    fn speak(&mut self, request: &SpeechRequest) -> Result<(), SpeechError> {
        if self.disabled {
            return Ok(());
        }

        self.cancel();

        match self.command(request).spawn() {
            Ok(child) => {
                debug!(text = %request.text, rate = request.rate, "Speaking");
                self.current = Some(child);
                Ok(())
            }
            Err(e) => {
                warn!(program = %self.program, error = %e, "Speech disabled");
                self.disabled = true;
                Err(SpeechError::Spawn(e))
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn is_available(&self) -> bool {
        !self.disabled
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Used when speech is turned off
#[derive(Debug, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&mut self, _request: &SpeechRequest) -> Result<(), SpeechError> {
        Ok(())
    }

    fn cancel(&mut self) {}

    fn is_available(&self) -> bool {
        false
    }
}

/// Records requests instead of speaking; for tests
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    pub spoken: Vec<SpeechRequest>,
    pub cancelled: usize,
}

impl Speaker for RecordingSpeaker {
    fn speak(&mut self, request: &SpeechRequest) -> Result<(), SpeechError> {
        self.cancel();
        self.spoken.push(request.clone());
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancelled += 1;
    }
}

/// Speaker for a configuration: silent when disabled
pub fn speaker_from_config(config: &SpeechConfig) -> Box<dyn Speaker> {
    if config.enabled {
        Box::new(CommandSpeaker::new(config))
    } else {
        Box::new(SilentSpeaker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_program() -> SpeechConfig {
        SpeechConfig {
            program: "lessondeck-no-such-speech-program".to_string(),
            ..SpeechConfig::default()
        }
    }

    #[test]
    fn test_rate_scales_words_per_minute() {
        let speaker = CommandSpeaker::new(&SpeechConfig::default());
        assert_eq!(speaker.words_per_minute_for(1.0), 175);
        assert_eq!(speaker.words_per_minute_for(VOCAB_RATE), 140);
        assert_eq!(speaker.words_per_minute_for(0.0), 1);
    }

    #[test]
    fn test_text_follows_end_of_options() {
        let speaker = CommandSpeaker::new(&SpeechConfig::default());
        let command = speaker.command(&SpeechRequest::new("-s 999", 1.0));
        let args: Vec<_> = command.get_args().collect();

        assert_eq!(command.get_program(), "espeak-ng");
        assert_eq!(args, ["-v", "en-gb", "-s", "175", "--", "-s 999"]);
    }

    #[test]
    fn test_missing_program_disables_speaker() {
        let mut speaker = CommandSpeaker::new(&missing_program());
        let request = SpeechRequest::new("adapt", VOCAB_RATE);

        assert!(matches!(speaker.speak(&request), Err(SpeechError::Spawn(_))));
        assert!(!speaker.is_available());

        // Later requests are silent no-ops
        assert!(speaker.speak(&request).is_ok());
    }

    #[test]
    fn test_disabled_config_gives_silent_speaker() {
        let config = SpeechConfig {
            enabled: false,
            ..SpeechConfig::default()
        };
        let mut speaker = speaker_from_config(&config);
        assert!(!speaker.is_available());
        assert!(speaker.speak(&SpeechRequest::new("hello", 1.0)).is_ok());
    }

    #[test]
    fn test_recording_speaker_cancels_before_speaking() {
        let mut speaker = RecordingSpeaker::default();
        speaker.speak(&SpeechRequest::new("one", 1.0)).unwrap();
        speaker.speak(&SpeechRequest::new("two", 1.0)).unwrap();
        assert_eq!(speaker.spoken.len(), 2);
        assert_eq!(speaker.cancelled, 2);
    }
}
