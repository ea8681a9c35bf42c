use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use flagscan::{telemetry, Parser};

fn main() -> anyhow::Result<ExitCode> {
    telemetry::init_tracing();

    let mut parser = Parser::new("flagscan");
    let help = parser.bool(('h', "help"), false, "Show this help and exit");
    let verbose = parser.bool(('v', "verbose"), false, "Print every declared flag and its value");
    let limit = parser.int(
        ('l', "limit"),
        0,
        "Echo at most this many positional arguments (0 echoes all of them)",
    );
    let timeout = parser.duration(
        ('t', "timeout"),
        Duration::from_secs(30),
        "How long a real program would wait, e.g. 2m or 1h30m",
    );
    let name = parser.string("name", String::from("world"), "Name to greet");

    if let Err(err) = parser.parse_env() {
        eprintln!("Error: {}", err);
        eprint!("{}", parser.usage());
        return Ok(ExitCode::from(2));
    }

    let mut stdout = io::stdout().lock();

    if help.get() {
        write!(stdout, "{}", parser.usage())?;
        return Ok(ExitCode::SUCCESS);
    }

    writeln!(stdout, "hello, {}", name.get())?;

    if verbose.get() {
        writeln!(stdout, "limit={}", limit.get())?;
        writeln!(stdout, "timeout={}", humantime::format_duration(timeout.get()))?;
        writeln!(stdout, "flags consumed: {}", parser.nflag())?;
    }

    let take = match usize::try_from(limit.get()) {
        Ok(0) | Err(_) => parser.narg(),
        Ok(n) => n,
    };
    for arg in parser.args().iter().take(take) {
        writeln!(stdout, "{}", arg)?;
    }

    Ok(ExitCode::SUCCESS)
}
