use std::env;
use std::process::ExitCode;

use argslot::Registry;

fn declare<'r, 'v>(
    registry: &mut Registry<'r, 'v>,
    verbose: &'r mut bool,
    output: &'r mut Option<&'v str>,
    input: &'r mut Option<&'v str>,
) -> Result<(), argslot::Error<'v>> {
    registry.flag(Some("-v"), Some("--verbose"), verbose, "Enable verbose output")?;
    registry.option(Some("-o"), Some("--output"), output, "Output file name")?;
    registry.positional(input, "Input file")?;
    Ok(())
}

fn main() -> ExitCode {
    let owned: Vec<String> = env::args().collect();
    let argv: Vec<&str> = owned.iter().map(String::as_str).collect();
    let program = argv.first().copied().unwrap_or("basic");

    let mut verbose = false;
    let mut output = None;
    let mut input = None;

    let mut registry = Registry::new();
    if let Err(err) = declare(&mut registry, &mut verbose, &mut output, &mut input) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    if argslot::parse(&mut registry, &argv) != argslot::STATUS_SUCCESS {
        argslot::print_help(&registry, program);
        return ExitCode::FAILURE;
    }

    let usage = registry.help(program).to_string();
    drop(registry);

    println!("verbose: {}", if verbose { "on" } else { "off" });
    match output {
        Some(output) => println!("output file: {output}"),
        None => println!("output file not specified"),
    }

    // Positionals are optional to the parser.
    let Some(input) = input else {
        eprintln!("input file is required");
        print!("{usage}");
        return ExitCode::FAILURE;
    };
    println!("input file: {input}");

    ExitCode::SUCCESS
}
