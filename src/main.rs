use std::env;
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use webprobe::redirect;
use webprobe::report::{Findings, Report};
use webprobe::{Connector, Target, Timeouts};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let input = match (args.next(), args.next()) {
        (Some(input), None) => input,
        _ => {
            eprintln!("Usage: webprobe <website_url>");
            return ExitCode::FAILURE;
        }
    };

    let target = match Target::parse(&input) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: webprobe <website_url>   (e.g. uvic.ca, https://example.com/path)");
            return ExitCode::FAILURE;
        }
    };

    run(&target);
    // Probe and fetch failures were reported above; only usage errors are
    // fatal to the process.
    ExitCode::SUCCESS
}

fn run(target: &Target) {
    let connector = Connector::new(Timeouts::probe_defaults());

    // ALPN is a TLS extension; plaintext targets cannot support h2 here.
    let supports_http2 = if target.tls {
        connector
            .probe_http2(&target.host, target.port)
            .unwrap_or_else(|e| {
                eprintln!("Error checking HTTP/2 support: {e}");
                false
            })
    } else {
        false
    };

    let findings = match redirect::fetch(&connector, target) {
        Ok(fetched) => Some(Findings::from_response_text(fetched.response.text())),
        Err(e) => {
            eprintln!("Error fetching response: {e}");
            None
        }
    };

    let report = Report {
        host: target.host.clone(),
        supports_http2,
        findings,
    };
    if let Err(e) = report.print() {
        warn!(error = %e, "failed to write report");
    }
}
