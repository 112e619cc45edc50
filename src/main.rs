use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Error};
use log::{error, info};
use structopt::StructOpt;

use bltrip::directive::parse_number;
use bltrip::output::PendingOutput;
use bltrip::render::Format;
use bltrip::{IoMap, Options};

/// Exit code for failures that carry no `bltrip::Error`.
const EXIT_OTHER: i32 = 15;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "bltrip",
    about = "Serial flash boot loader triplet generator",
    after_help = "Takes the name of the boot loader source without its extension and \
                  expects both the .c file and the compiled .bin file to exist.\n\
                  Example: bltrip BOOTLOAD serial_flash_boot_loader.lib"
)]
struct Cmd {
    /// Boot loader source name, without extension
    #[structopt(parse(from_os_str))]
    basename: PathBuf,
    /// Output file
    #[structopt(parse(from_os_str))]
    output: PathBuf,
    /// Extension of the directive source
    #[structopt(long, default_value = "c")]
    directive_ext: String,
    /// Extension of the compiled image
    #[structopt(long, default_value = "bin")]
    image_ext: String,
    /// Marker introducing a directive
    #[structopt(long, default_value = "//@")]
    marker: String,
    /// Byte which, repeated four times, ends the image
    #[structopt(long, default_value = "0x76", parse(try_from_str = parse_byte))]
    sentinel: u8,
    /// Maximum table size in bytes
    #[structopt(long, default_value = "512")]
    capacity: usize,
    /// Name of the macro defined by the text output
    #[structopt(long, default_value = "SERIAL_FLASH_BOOT_LOADER")]
    macro_name: String,
    /// Output format
    #[structopt(long, default_value = "text", possible_values = &["text", "binary"])]
    format: Format,
}

fn parse_byte(s: &str) -> Result<u8, String> {
    parse_number(s).ok_or_else(|| format!("`{}` is not a byte value", s))
}

/// Appends `.ext` to `basename`, keeping any dots already in it.
fn source_path(basename: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(basename.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn run(cmd: Cmd) -> Result<(), Error> {
    let directive_path = source_path(&cmd.basename, &cmd.directive_ext);
    let image_path = source_path(&cmd.basename, &cmd.image_ext);

    let directives = File::open(&directive_path).map_err(|source| {
        bltrip::Error::OpenDirectives {
            path: directive_path.clone(),
            source,
        }
    })?;
    let image = File::open(&image_path).map_err(|source| bltrip::Error::OpenImage {
        path: image_path.clone(),
        source,
    })?;
    let output = PendingOutput::create(&cmd.output)?;

    let options = Options {
        marker: cmd.marker,
        sentinel: cmd.sentinel,
        capacity: cmd.capacity,
        macro_name: cmd.macro_name,
    };
    let io_map = IoMap::new();
    let generated = bltrip::generate(
        &io_map,
        &options,
        BufReader::new(directives),
        BufReader::new(image),
    )
    .with_context(|| {
        format!(
            "while processing {} and {}",
            directive_path.display(),
            image_path.display()
        )
    })?;

    let contents = cmd.format.render(&generated.buffer, &options.macro_name);
    output
        .commit(&contents)
        .map_err(bltrip::Error::Io)
        .with_context(|| format!("while writing {}", cmd.output.display()))?;
    info!(
        "wrote {} triplets ({} of {} bytes) to {}",
        generated.buffer.len(),
        generated.buffer.as_bytes().len(),
        options.capacity,
        cmd.output.display()
    );
    Ok(())
}

fn exit_code(e: &Error) -> i32 {
    e.downcast_ref::<bltrip::Error>()
        .map_or(EXIT_OTHER, bltrip::Error::exit_code)
}

fn main() {
    env_logger::init();

    // Argument errors exit with status 1.
    let cmd = Cmd::from_args();
    if let Err(e) = run(cmd) {
        error!("{:#}", e);
        process::exit(exit_code(&e));
    }
}
