//! Deterministic WAV encoder.
//!
//! Writes canonical 44-byte-header 16-bit PCM WAV files with no timestamps or
//! variable metadata, so identical samples always give identical bytes. The
//! hash of the PCM payload identifies a rendering independently of the
//! container.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::{WavFormat, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, wav_header, write_wav, write_wav_to_vec};
