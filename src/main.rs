use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use curve_registry::{catalog, to_hex, CurveId, CurveParameters};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "curve-registry",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect and validate standardized elliptic curve domain parameters"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every curve in the catalog.
    List,
    /// Print p, a and b of one curve.
    Show {
        /// Curve name or alias, e.g. secp256r1 or P-256.
        name: String,
    },
    /// Validate one curve, or the whole catalog when no name is given.
    Check { name: Option<String> },
    /// Find the standard curve matching the given parameters.
    Identify {
        #[arg(long, value_name = "HEX")]
        p: String,
        #[arg(long, value_name = "HEX")]
        a: String,
        #[arg(long, value_name = "HEX")]
        b: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::List => {
            for id in CurveId::ALL {
                println!("{}", list_line(id));
            }
        }
        Command::Show { name } => {
            let id: CurveId = name.parse()?;
            print!("{}", describe(id.parameters()));
        }
        Command::Check { name } => {
            let curves: Vec<&CurveParameters> = match name {
                Some(name) => vec![name.parse::<CurveId>()?.parameters()],
                None => catalog().collect(),
            };
            let (lines, failures) = check_report(&curves);
            for line in lines {
                println!("{line}");
            }
            if failures > 0 {
                bail!("{failures} curve(s) failed validation");
            }
        }
        Command::Identify { p, a, b } => {
            let curve = CurveParameters::from_hex(&a, &b, &p, "")?;
            match curve.identify() {
                Some(id) => {
                    info!(%id, "parameters identified");
                    println!("{id}");
                }
                None => bail!("parameters do not match any standard curve"),
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn list_line(id: CurveId) -> String {
    let curve = id.parameters();
    format!("{:<16} {:>4} bits  {}", curve.name(), curve.field_bits(), id.oid())
}

/// One line per curve and the number that failed validation.
fn check_report(curves: &[&CurveParameters]) -> (Vec<String>, usize) {
    let mut failures = 0usize;
    let lines = curves
        .iter()
        .map(|curve| match curve.validate() {
            Ok(()) => format!("{curve}: ok"),
            Err(err) => {
                failures += 1;
                format!("{curve}: {err}")
            }
        })
        .collect();
    (lines, failures)
}

fn describe(curve: &CurveParameters) -> String {
    format!(
        "name: {}\nbits: {}\np: 0x{}\na: 0x{}\nb: 0x{}\n",
        curve.name(),
        curve.field_bits(),
        to_hex(curve.p()),
        to_hex(curve.a()),
        to_hex(curve.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_identify_arguments() {
        let cli = Cli::parse_from(["curve-registry", "identify", "--p", "17", "--a", "2", "--b", "3"]);
        match cli.command {
            Command::Identify { p, a, b } => assert_eq!((p, a, b), ("17".into(), "2".into(), "3".into())),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn list_line_includes_oid() {
        let line = list_line(CurveId::Secp384r1);
        assert!(line.starts_with("secp384r1"));
        assert!(line.contains(" 384 bits"));
        assert!(line.ends_with("1.3.132.0.34"));
    }

    #[test]
    fn list_covers_every_catalog_entry_in_order() {
        let lines: Vec<String> = CurveId::ALL.into_iter().map(list_line).collect();
        assert_eq!(lines.len(), catalog().count());
        for (line, curve) in lines.iter().zip(catalog()) {
            assert!(line.starts_with(curve.name()), "{line}");
        }
        assert!(lines[5].starts_with("brainpoolP192r1 "));
        assert!(lines[5].ends_with("1.3.36.3.3.2.8.1.1.3"));
    }

    #[test]
    fn check_report_lists_each_failure_once() {
        let singular = CurveParameters::new(0u32.into(), 0u32.into(), 97u32.into(), "cusp");
        let (lines, failures) = check_report(&[CurveId::Secp256r1.parameters(), &singular]);
        assert_eq!(failures, 1);
        assert_eq!(
            lines,
            vec![
                "secp256r1 (256-bit): ok".to_string(),
                "cusp (7-bit): curve is singular: 4a^3 + 27b^2 = 0 mod p".to_string(),
            ]
        );
    }

    #[test]
    fn describe_prints_upper_hex() {
        let text = describe(&CurveParameters::brainpool_p160r1());
        assert!(text.contains("p: 0xE95E4A5F737059DC60DFC7AD95B3D8139515620F\n"));
        assert!(text.contains("a: 0x340E7BE2A280EB74E2BE61BADA745D97E8F7C300\n"));
        assert!(text.contains("bits: 160\n"));
    }

    #[test]
    fn describe_drops_leading_zero_nibbles() {
        let text = describe(&CurveParameters::secp521r1());
        assert!(text.contains("p: 0x1FFF"));
        assert!(text.contains("b: 0x51953EB9"));
    }
}
