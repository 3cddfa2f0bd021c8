//! wavhead CLI - print the header of a WAV file

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wavhead::{decode, Inconsistency, WavHeader};

#[derive(Parser)]
#[command(name = "wavhead")]
#[command(about = "Print the 44 byte header of a WAV file", long_about = None)]
#[command(version)]
struct Cli {
    /// WAV file to read
    #[arg(value_name = "WAV_FILE")]
    input: PathBuf,

    /// Print the header as JSON
    #[arg(long)]
    json: bool,

    /// Report fields that disagree with each other, exit with status 2 if any do
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let header = read_header(&cli.input)?;
    let problems = header.check();

    for problem in &problems {
        warn!(path = %cli.input.display(), "{}", problem);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        write_json(&mut out, &header, cli.check.then(|| problems.as_slice()))?;
    } else {
        write_report(&mut out, &header)?;
        if cli.check {
            write_problems(&mut out, &problems)?;
        }
    }

    if cli.check && !problems.is_empty() {
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}

fn read_header(path: &Path) -> Result<WavHeader> {
    debug!(path = %path.display(), "opening");

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let header = decode(file).with_context(|| format!("failed to decode {}", path.display()))?;

    debug!(
        sample_rate = header.sample_rate(),
        num_channels = header.num_channels(),
        bits_per_sample = header.bits_per_sample(),
        "decoded header"
    );

    Ok(header)
}

fn write_report<W: Write>(out: &mut W, header: &WavHeader) -> io::Result<()> {
    writeln!(out, "ChunkID: {}", header.chunk_id())?;
    writeln!(out, "ChunkSize: {}", header.chunk_size())?;
    writeln!(out, "Format: {}", header.format())?;
    writeln!(out, "SubChunk1ID: {}", header.subchunk1_id())?;
    writeln!(out, "SubChunk1Size: {}", header.subchunk1_size())?;
    writeln!(out, "AudioFormat: {}", header.audio_format())?;
    writeln!(out, "NumChannels: {}", header.num_channels())?;
    writeln!(out, "SampleRate: {}", header.sample_rate())?;
    writeln!(out, "ByteRate: {}", header.byte_rate())?;
    writeln!(out, "BlockAlign: {}", header.block_align())?;
    writeln!(out, "BitsPerSample: {}", header.bits_per_sample())?;
    writeln!(out, "SubChunk2ID: {}", header.subchunk2_id())?;
    writeln!(out, "SubChunk2Size: {}", header.subchunk2_size())?;
    Ok(())
}

fn write_problems<W: Write>(out: &mut W, problems: &[Inconsistency]) -> io::Result<()> {
    for problem in problems {
        writeln!(out, "warning: {}", problem)?;
    }
    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    header: &WavHeader,
    problems: Option<&[Inconsistency]>,
) -> Result<()> {
    let value = match problems {
        Some(problems) => json!({
            "header": header,
            "inconsistencies": problems.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
        }),
        None => serde_json::to_value(header)?,
    };

    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavhead::{DataChunk, FmtChunk, RiffChunk};

    #[test]
    fn report_uses_field_labels() {
        let header = WavHeader::pcm(1, 44_100, 16, 176_400).unwrap();
        let mut out = Vec::new();

        write_report(&mut out, &header).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ChunkID: RIFF\n\
             ChunkSize: 176436\n\
             Format: WAVE\n\
             SubChunk1ID: fmt \n\
             SubChunk1Size: 16\n\
             AudioFormat: 1\n\
             NumChannels: 1\n\
             SampleRate: 44100\n\
             ByteRate: 88200\n\
             BlockAlign: 2\n\
             BitsPerSample: 16\n\
             SubChunk2ID: data\n\
             SubChunk2Size: 176400\n"
        );
    }

    #[test]
    fn json_with_problems() {
        let mut fmt = FmtChunk::pcm(2, 48_000, 16).unwrap();
        fmt.block_align = 2;
        let header = WavHeader::new(RiffChunk::wave(8), fmt, DataChunk::new(8));
        let mut out = Vec::new();

        write_json(&mut out, &header, Some(header.check().as_slice())).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["header"]["block_align"], 2);
        assert_eq!(
            value["inconsistencies"][0],
            "block align is 2, expected 4"
        );
    }

    #[test]
    fn missing_file_has_context() {
        let err = read_header(Path::new("/nonexistent/definitely.wav")).unwrap_err();

        assert!(format!("{:#}", err).starts_with("failed to open /nonexistent/definitely.wav"));
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::parse_from(["wavhead", "--json", "--check", "-v", "a.wav"]);

        assert!(cli.json && cli.check && cli.verbose);
        assert_eq!(cli.input, PathBuf::from("a.wav"));
    }
}
