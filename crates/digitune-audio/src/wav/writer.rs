//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_LEN};
use crate::error::{AudioError, AudioResult};

/// Builds the RIFF/WAVE header for `data_len` bytes of PCM.
///
/// Fails when the data size, RIFF size or byte rate cannot be stored in
/// the 32-bit header fields.
pub fn wav_header(format: &WavFormat, data_len: usize) -> AudioResult<[u8; HEADER_LEN]> {
    let data_size = u32::try_from(data_len).map_err(|_| AudioError::WavOverflow {
        field: "data size",
        value: data_len as u64,
    })?;
    // Total file size minus 8 bytes for RIFF header
    let file_size = data_size.checked_add(36).ok_or(AudioError::WavOverflow {
        field: "RIFF size",
        value: u64::from(data_size) + 36,
    })?;
    let byte_rate = format.byte_rate().ok_or(AudioError::WavOverflow {
        field: "byte rate",
        value: u64::from(format.sample_rate) * u64::from(format.block_align()),
    })?;
    let mut header = [0u8; HEADER_LEN];

    // RIFF header
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&file_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    Ok(header)
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let header = wav_header(format, pcm_data.len())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    writer.write_all(&header)?;
    writer.write_all(pcm_data)
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> AudioResult<Vec<u8>> {
    let header = wav_header(format, pcm_data.len())?;
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header);
    buffer.extend_from_slice(pcm_data);
    Ok(buffer)
}

/// Converts f64 samples to little-endian 16-bit PCM bytes.
///
/// Values outside [-1.0, 1.0] are clipped before scaling by 32767.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}
