use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hamming_code::ecc::bits::{parse_bits, to_bit_string};
use hamming_code::report::Session;
use hamming_code::{HammingCode, Result};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hamming code encoder/decoder",
    long_about = "Encodes data words, checks and corrects single-bit errors with a binary Hamming code"
)]
struct Args {
    /// Number of parity bits (m); the code is (2^m - 1, 2^m - 1 - m)
    #[arg(short = 'm', long, default_value_t = 3)]
    parity_bits: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parity-check and generator matrices
    Matrices,
    /// Encode a data word
    Encode {
        /// Data word of 2^m - 1 - m bits, e.g. 1011
        data: String,
    },
    /// Decode a codeword, correcting a single flipped bit
    Decode {
        /// Codeword of 2^m - 1 bits
        codeword: String,
    },
    /// Check whether a codeword has a zero syndrome
    Check {
        /// Codeword of 2^m - 1 bits
        codeword: String,
    },
    /// Encode, optionally corrupt one bit, then check and decode
    Demo {
        /// Data word of 2^m - 1 - m bits
        data: String,
        /// 0-indexed bit of the codeword to flip before decoding
        #[arg(long)]
        flip: Option<usize>,
    },
}

fn print_matrices(code: &HammingCode) {
    println!("Check matrix:");
    print!("{}", code.check_matrix());
    println!("Generator matrix:");
    print!("{}", code.generator_matrix());
}

fn run(args: Args) -> Result<()> {
    let code = HammingCode::new(args.parity_bits)?;

    match args.command {
        Command::Matrices => print_matrices(&code),
        Command::Encode { data } => println!("{}", code.encode_str(&data)?),
        Command::Decode { codeword } => {
            let decoded = code.decode_str(&codeword)?;
            println!("codeword: {}", to_bit_string(&decoded.codeword));
            println!("data:     {}", to_bit_string(&decoded.data));
            match decoded.error_position {
                Some(index) => println!("error:    {}", index),
                None => println!("error:    none"),
            }
        }
        Command::Check { codeword } => println!("{}", code.check_str(&codeword)?),
        Command::Demo { data, flip } => {
            let session = Session::run(&code, &parse_bits(&data)?, flip)?;
            print_matrices(&code);
            print!("{}", session);
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
