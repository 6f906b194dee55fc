use std::{any::type_name, fmt, process::ExitCode};

use bcdpack::{
    binary_to_text,
    decode,
    encode,
    print_binary,
    Bcd,
    Binary,
    Error,
    Integer,
    Unsigned,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn, Level};

#[derive(Parser)]
#[command(version)]
#[command(name = "bcdpack")]
#[command(about = "Pack integers into two-digit BCD bit fields", long_about = None)]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    #[clap(long, short, global = true)]
    verbose: bool,
}

/// Packed layouts available from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// u8 into u8, 4 + 4 bits
    Nibble,
    /// i16 into u16, 8 + 8 bits
    Byte,
    /// i32 into u32, 16 + 16 bits
    Word,
    /// u8 into u8, 2 + 3 bits
    Tiny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Width {
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the tens and units digits of a value
    #[command(arg_required_else_help = true)]
    Encode {
        #[arg(allow_negative_numbers = true)]
        value: i128,

        #[arg(long, value_enum, default_value_t = Layout::Byte)]
        layout: Layout,
    },
    /// Rebuild a value from its packed form (decimal, 0x or 0b)
    #[command(arg_required_else_help = true)]
    Decode {
        packed: String,

        #[arg(long, value_enum, default_value_t = Layout::Byte)]
        layout: Layout,
    },
    /// Print the bits of a value
    #[command(arg_required_else_help = true)]
    Bits {
        #[arg(allow_negative_numbers = true)]
        value: i128,

        #[arg(long, value_enum, default_value_t = Width::W32)]
        width: Width,

        #[arg(long)]
        lsb_first: bool,
    },
    /// Walk through encoding, decoding and printing a few values
    Demo,
}

macro_rules! with_layout {
    ($layout:expr, $run:ident($($arg:expr),*)) => {
        match $layout {
            Layout::Nibble => $run::<u8, u8, 4, 4>($($arg),*),
            Layout::Byte => $run::<i16, u16, 8, 8>($($arg),*),
            Layout::Word => $run::<i32, u32, 16, 16>($($arg),*),
            Layout::Tiny => $run::<u8, u8, 2, 3>($($arg),*),
        }
    };
}

fn narrow<I: TryFrom<i128>>(value: i128) -> Result<I, Error> {
    I::try_from(value).map_err(|_| Error::OutOfRange {
        value,
        target: type_name::<I>(),
    })
}

/// Parses a decimal, `0x` hexadecimal or `0b` binary number. Underscores are
/// ignored.
fn parse_packed(input: &str) -> Result<i128, Error> {
    let (digits, radix) = if let Some(hex) = input.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(bin) = input.strip_prefix("0b") {
        (bin, 2)
    } else {
        (input, 10)
    };

    Ok(i128::from_str_radix(&digits.replace('_', ""), radix)?)
}

fn run_encode<I, B, const T_BITS: u32, const U_BITS: u32>(value: i128) -> Result<String, Error>
where
    I: Integer + TryFrom<i128>,
    B: Unsigned + fmt::LowerHex,
{
    let num = narrow::<I>(value)?;
    let digits = Bcd::<I, B, T_BITS, U_BITS>::split(num);
    debug!(
        ?num,
        tens = ?digits.tens,
        units = ?digits.units,
        t_bits = T_BITS,
        u_bits = U_BITS,
        "encoding"
    );

    if let Err(e) = Bcd::<I, B, T_BITS, U_BITS>::encode_checked(num) {
        warn!(error = %e, "encoded value will not decode to {value}");
    }

    let packed = encode::<I, B, T_BITS, U_BITS>(num);
    Ok(format!("{packed:#x} {}", Binary::<B>(packed)))
}

fn run_decode<I, B, const T_BITS: u32, const U_BITS: u32>(packed: &str) -> Result<String, Error>
where
    I: Integer + fmt::Display,
    B: Unsigned + TryFrom<i128>,
{
    let bin = narrow::<B>(parse_packed(packed)?)?;
    let (tens, units) = Bcd::<I, B, T_BITS, U_BITS>::fields(bin);
    debug!(?bin, ?tens, ?units, t_bits = T_BITS, u_bits = U_BITS, "decoding");

    Ok(decode::<I, B, T_BITS, U_BITS>(bin).to_string())
}

fn render<I: Integer>(value: I, lsb_first: bool) -> String {
    if lsb_first {
        binary_to_text::<false, _>(value)
    } else {
        binary_to_text::<true, _>(value)
    }
}

/// Negative values are shown as two's complement of the signed type `S`, all
/// others as the unsigned type `U` of the same width.
fn run_bits<S, U>(value: i128, lsb_first: bool) -> Result<String, Error>
where
    S: Integer + TryFrom<i128>,
    U: Integer + TryFrom<i128>,
{
    if value < 0 {
        Ok(render(narrow::<S>(value)?, lsb_first))
    } else {
        Ok(render(narrow::<U>(value)?, lsb_first))
    }
}

fn run_demo() {
    let packed = encode::<i16, u16, 8, 8>(-17);
    print_binary::<false, _>(packed);
    println!();
    println!("{}", binary_to_text::<true, u32>(1 << 30));
    print_binary::<true, _>(decode::<i16, u16, 8, 8>(packed));
    println!();
    println!("{}", decode::<u8, u8, 2, 3>(0b01001));
}

fn run(command: Commands) -> Result<(), Error> {
    let output = match command {
        Commands::Encode { value, layout } => with_layout!(layout, run_encode(value))?,
        Commands::Decode { packed, layout } => with_layout!(layout, run_decode(&packed))?,
        Commands::Bits {
            value,
            width,
            lsb_first,
        } => match width {
            Width::W8 => run_bits::<i8, u8>(value, lsb_first)?,
            Width::W16 => run_bits::<i16, u16>(value, lsb_first)?,
            Width::W32 => run_bits::<i32, u32>(value, lsb_first)?,
            Width::W64 => run_bits::<i64, u64>(value, lsb_first)?,
        },
        Commands::Demo => {
            run_demo();
            return Ok(());
        }
    };

    println!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.global_opts.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
