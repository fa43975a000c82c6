mod config;

use anyhow::Context;
use clap::Parser;
use config::HostConfig;
use env_logger::Env;
use swiftboy_core::memory::address;
use swiftboy_core::{Button, Console};

#[derive(Parser)]
struct Cli {
    #[arg(short = 'f', long = "gb_file_path")]
    gb_file_path: String,
    /// Number of frames to run [default: 60]
    #[arg(short = 'n', long = "frames")]
    frames: Option<u32>,
    /// Raw button mask, decimal or 0x-prefixed hex
    #[arg(short = 'i', long = "inputs", value_parser = parse_byte)]
    inputs: Option<u8>,
    /// Comma-separated button names, OR'd into the input mask; replaces any buttons from the config
    #[arg(short = 'b', long = "buttons", value_delimiter = ',')]
    buttons: Vec<Button>,
    /// Optional TOML config file; command-line flags take precedence
    #[arg(short = 'c', long = "config")]
    config: Option<String>,
}

fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|err| format!("invalid byte value '{s}': {err}"))
}

fn resolve_config(args: &Cli) -> anyhow::Result<HostConfig> {
    let mut config = match &args.config {
        Some(path) => HostConfig::from_toml_file(path)?,
        None => HostConfig::default(),
    };

    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(inputs) = args.inputs {
        config.inputs = inputs;
    }

    Ok(config)
}

fn input_mask(config: &HostConfig, args: &Cli) -> anyhow::Result<u8> {
    let buttons = if !args.buttons.is_empty() {
        args.buttons.clone()
    } else {
        config
            .buttons
            .iter()
            .map(|name| name.parse::<Button>())
            .collect::<Result<Vec<_>, _>>()
            .context("error parsing buttons from config")?
    };

    Ok(config.inputs | Button::mask(buttons))
}

fn run(console: &mut Console, frames: u32) {
    for _ in 0..frames {
        console.advance_frame();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let config = resolve_config(&args)?;
    let mask = input_mask(&config, &args)?;

    let mut console = swiftboy_core::init_console(&args.gb_file_path)?;
    console.set_inputs(mask);

    log::info!("running {} frames", config.frames);
    run(&mut console, config.frames);

    log::info!("{}", summary(&console, config.frames));

    Ok(())
}

fn summary(console: &Console, frames: u32) -> String {
    let (_, audio_samples) = console.audio_samples();
    format!(
        "ran {frames} frames: rom_len={}, entry_point={:02X}, inputs={:02X}, audio_samples={audio_samples}, frame_bytes={}",
        console.address_space().loaded_rom_len(),
        console.address_space().read_address_u8(address::ENTRY_POINT),
        console.inputs().get(),
        console.video_frame().len()
    )
}
