// Command Line Interface
// Feeds text into the RSA core and prints keys, ciphertext and plaintext

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::rsa::{
    decrypt, decrypt_to_string, encrypt_str, is_probable_prime, Key, KeyPair, KeyPairGenerator,
    PrimeGenerator, RsaBigInt, RsaConfig, DEFAULT_PRIME_BITS, DEFAULT_PUBLIC_EXPONENT,
    DEFAULT_ROUNDS,
};
use crate::util::{format_biguint, from_units, parse_biguint, to_units, Radix, SecureRandom};

#[derive(Parser, Debug)]
#[command(name = "textbook-rsa")]
#[command(version, about = "Textbook RSA key generation and encryption")]
pub struct Cli {
    /// How big integers are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Decimal, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Decimal,
    Hex,
}

impl From<OutputFormat> for Radix {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Decimal => Radix::Decimal,
            OutputFormat::Hex => Radix::Hex,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct KeyParams {
    /// Bit length of each prime
    #[arg(long, default_value_t = DEFAULT_PRIME_BITS)]
    pub bits: u64,

    /// Miller-Rabin rounds per candidate
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: u32,

    /// Public exponent to try first
    #[arg(long, default_value_t = DEFAULT_PUBLIC_EXPONENT.to_string())]
    pub exponent: String,

    /// Give up a search loop after this many candidates
    #[arg(long)]
    pub max_attempts: Option<u64>,

    /// Search for p and q concurrently
    #[arg(long)]
    pub parallel: bool,
}

impl KeyParams {
    fn config(&self) -> Result<RsaConfig> {
        let exponent = parse_biguint(&self.exponent).context("parsing --exponent")?;
        Ok(RsaConfig::default()
            .with_prime_bits(self.bits)
            .with_rounds(self.rounds)
            .with_public_exponent(exponent)
            .with_max_attempts(self.max_attempts))
    }

    fn generate(&self) -> Result<KeyPair> {
        let generator = KeyPairGenerator::new(self.config()?);

        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return generator.generate_parallel().context("generating key pair");
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            if self.parallel {
                log::warn!("built without the parallel feature, generating sequentially");
            }
        }

        generator.generate().context("generating key pair")
    }
}

#[derive(Args, Clone, Debug)]
pub struct KeyArgs {
    /// Key modulus n (decimal or 0x-prefixed hex)
    #[arg(long)]
    pub modulus: String,

    /// Key exponent (decimal or 0x-prefixed hex)
    #[arg(long)]
    pub exponent: String,
}

impl KeyArgs {
    fn key(&self) -> Result<Key> {
        let modulus = parse_biguint(&self.modulus).context("parsing --modulus")?;
        let exponent = parse_biguint(&self.exponent).context("parsing --exponent")?;
        Ok(Key::new(modulus, exponent)?)
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Generate and print a key pair
    Keygen {
        #[command(flatten)]
        params: KeyParams,
    },

    /// Generate keys, then encrypt and decrypt a message byte by byte
    Demo {
        message: String,

        #[command(flatten)]
        params: KeyParams,
    },

    /// Encrypt a message with a public key
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,

        message: String,
    },

    /// Decrypt ciphertext units with a private key
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,

        #[arg(required = true)]
        units: Vec<String>,
    },

    /// Print a random probable prime
    Prime {
        #[arg(long, default_value_t = DEFAULT_PRIME_BITS)]
        bits: u64,

        #[arg(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: u32,
    },

    /// Test a number for primality
    Check {
        number: String,

        #[arg(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: u32,
    },
}

/// Parse the command line and execute it
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let radix = Radix::from(cli.format);
    for line in execute(&cli.command, radix)? {
        println!("{line}");
    }
    Ok(())
}

/// Execute a command, returning the lines to print
pub fn execute(command: &Commands, radix: Radix) -> Result<Vec<String>> {
    let fmt = |n: &RsaBigInt| format_biguint(n, radix);
    let fmt_all = |units: &[RsaBigInt]| units.iter().map(fmt).collect::<Vec<_>>().join(" ");

    let lines = match command {
        Commands::Keygen { params } => {
            let keypair = params.generate()?;
            key_lines(&keypair, radix)
        }
        Commands::Demo { message, params } => {
            let keypair = params.generate()?;
            let plaintext = to_units(message);
            let ciphertext = keypair.encrypt(&plaintext);
            let decrypted = keypair.decrypt(&ciphertext);
            let recovered = from_units(&decrypted).context("rebuilding message")?;

            let mut lines = key_lines(&keypair, radix);
            lines.push(format!("plaintext units:  {}", fmt_all(&plaintext)));
            lines.push(format!("ciphertext units: {}", fmt_all(&ciphertext)));
            lines.push(format!("decrypted units:  {}", fmt_all(&decrypted)));
            lines.push(format!("recovered text:   {recovered}"));
            lines
        }
        Commands::Encrypt { key, message } => {
            let key = key.key()?;
            vec![fmt_all(&encrypt_str(message, &key))]
        }
        Commands::Decrypt { key, units } => {
            let key = key.key()?;
            let units = units
                .iter()
                .map(|u| parse_biguint(u))
                .collect::<Result<Vec<_>, _>>()
                .context("parsing ciphertext units")?;
            match decrypt_to_string(&units, &key) {
                Ok(text) => vec![text],
                // not text: show the raw units instead
                Err(e) => {
                    log::debug!("decrypted units are not text: {e}");
                    vec![fmt_all(&decrypt(&units, &key))]
                }
            }
        }
        Commands::Prime { bits, rounds } => {
            let generator = PrimeGenerator::new(*bits)?.with_rounds(*rounds);
            let mut rng = SecureRandom::acquire()?;
            vec![fmt(&generator.generate(&mut rng)?)]
        }
        Commands::Check { number, rounds } => {
            let n = parse_biguint(number).context("parsing number")?;
            let mut rng = SecureRandom::acquire()?;
            let verdict = if is_probable_prime(&n, *rounds, &mut rng) {
                "probably prime"
            } else {
                "composite"
            };
            vec![format!("{}: {verdict}", fmt(&n))]
        }
    };

    Ok(lines)
}

fn key_lines(keypair: &KeyPair, radix: Radix) -> Vec<String> {
    let public = keypair.public_key();
    let private = keypair.private_key();
    vec![
        format!("modulus bits: {}", keypair.bit_length()),
        format!("n: {}", format_biguint(public.modulus(), radix)),
        format!("e: {}", format_biguint(public.exponent(), radix)),
        format!("d: {}", format_biguint(private.exponent(), radix)),
    ]
}
