//! Platform capabilities the translator delegates to.
//!
//! Implementations wrap whatever the host platform offers (a browser's speech
//! synthesis and clipboard, a desktop TTS engine). The translator keeps no
//! state for either.

use crate::error::ClientError;

/// Text-to-speech output
pub trait SpeechSynthesizer {
    /// Read `text` aloud in language `lang`
    fn speak(&self, text: &str, lang: &str) -> Result<(), ClientError>;
}

/// System clipboard
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    fn write_text(&self, text: &str) -> Result<(), ClientError>;
}
