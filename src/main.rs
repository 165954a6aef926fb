use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use log::info;

use interpretador::{Config, Interpreter};

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.default_log_filter()),
    )
    .init();
}

/// Bucle interactivo: una frase por línea, respuesta tal cual
fn run_interactive(interpreter: &Interpreter) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let phrase = line.trim();
        if matches!(phrase, "sair" | "exit" | "quit") {
            break;
        }
        if !phrase.is_empty() {
            writeln!(stdout, "{}", interpreter.interpret(phrase))?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    init_logging(&config);
    let interpreter = Interpreter::with_options(config.interpreter_options());

    // Obtener frases a interpretar
    let phrases: Vec<String> = if let Some(ref input_file) = config.input_file {
        match fs::read_to_string(input_file) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) => {
                eprintln!("Error leyendo archivo '{}': {}", input_file, e);
                process::exit(1);
            }
        }
    } else if let Some(ref text) = config.text {
        vec![text.clone()]
    } else {
        info!("sin frase ni archivo de entrada: modo interactivo");
        if let Err(e) = run_interactive(&interpreter) {
            eprintln!("Error de entrada/salida: {}", e);
            process::exit(1);
        }
        return;
    };

    info!("interpretando {} frase(s)", phrases.len());
    let results: Vec<String> = phrases
        .iter()
        .map(|phrase| interpreter.interpret(phrase))
        .collect();
    let output = results.join("\n");

    // Escribir resultado
    if let Some(ref output_file) = config.output_file {
        if let Err(e) = fs::write(output_file, format!("{}\n", output)) {
            eprintln!("Error escribiendo archivo '{}': {}", output_file, e);
            process::exit(1);
        }
    } else {
        println!("{}", output);
    }
}
