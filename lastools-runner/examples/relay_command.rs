use lastools_command::{CommandLine, Tool};
use lastools_runner::{ensure_success, ConsoleSink, ProcessRunner, Runner as _};

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(program) = args.next() else {
        eprintln!("usage: relay_command <PROGRAM> [ARGS...]");
        std::process::exit(2);
    };

    let command = CommandLine::new(Tool::LasView, program).args(args);
    println!("{}", command);

    let code = match ProcessRunner.run(&command, &mut ConsoleSink) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = ensure_success(command.tool, code) {
        eprintln!("{}", e);
        std::process::exit(code);
    }
}
