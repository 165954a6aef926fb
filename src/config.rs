//! Configuración y argumentos CLI

use crate::interpreter::InterpreterOptions;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Archivo de entrada, una frase por línea
    pub input_file: Option<String>,
    /// Archivo de salida
    pub output_file: Option<String>,
    /// Frase a interpretar (argumento posicional)
    pub text: Option<String>,
    /// Evaluar la frase tal cual, sin traducirla
    pub no_translate: bool,
    /// Logs de depuración
    pub verbose: bool,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: None,
            output_file: None,
            text: None,
            no_translate: false,
            verbose: false,
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut words: Vec<String> = Vec::new();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-i" | "--input" => {
                    config.input_file = Some(args_iter.next().ok_or("--input requiere un valor")?);
                }
                "-o" | "--output" => {
                    config.output_file =
                        Some(args_iter.next().ok_or("--output requiere un valor")?);
                }
                "-v" | "--verbose" => config.verbose = true,
                "--no-translate" => config.no_translate = true,
                // "-" o "-2" son parte de la expresión, no opciones
                _ if arg.starts_with("--")
                    || (arg.starts_with('-') && arg[1..].starts_with(char::is_alphabetic)) =>
                {
                    return Err(format!("Opción desconocida: {}", arg));
                }
                _ => words.push(arg),
            }
        }

        if !words.is_empty() {
            config.text = Some(words.join(" "));
        }
        if config.text.is_some() && config.input_file.is_some() {
            return Err("Usa una frase o --input, no ambos".to_string());
        }
        Ok(config)
    }

    /// Opciones del intérprete derivadas de la línea de comandos
    pub fn interpreter_options(&self) -> InterpreterOptions {
        InterpreterOptions {
            translate: !self.no_translate,
            ..InterpreterOptions::default()
        }
    }

    /// Filtro de log por defecto si RUST_LOG no está definido
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    pub fn print_help() {
        println!(
            r#"Interpretador - Expresiones aritméticas en portugués

USO:
    interpretador [OPCIONES] [FRASE]

ARGUMENTOS:
    [FRASE]    Frase a interpretar (sin frase ni --input: modo interactivo)

OPCIONES:
    -h, --help                  Muestra esta ayuda
    -i, --input <ARCHIVO>       Archivo de entrada, una frase por línea
    -o, --output <ARCHIVO>      Archivo de salida
    -v, --verbose               Muestra cada fase del proceso (RUST_LOG tiene prioridad)
    --no-translate              Evalúa la frase tal cual, sin traducirla

EJEMPLOS:
    interpretador "um mais cinco menos dois"
    interpretador dez vezes dez
    interpretador --input frases.txt --output resultados.txt
    interpretador "(2.5 + 1) * 4""#
        );
    }
}
