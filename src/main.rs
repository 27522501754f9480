use std::{env, fs::read_to_string, process::exit};

use tinyc::{
    errors::{
        diagnostics::{ConsoleDiagnostic, Diagnostic},
        errors::ErrorTip,
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: tinyc <file>");
        exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("failed to read {}: {}", file_path, error);
            exit(2);
        }
    };

    let mut diagnostic = ConsoleDiagnostic::new(source.clone());

    let tokens = match tokenize(source, Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            let rendered = match error.get_tip() {
                ErrorTip::Suggestion(tip) => format!("{} ({})", error.message(), tip),
                ErrorTip::None => error.message(),
            };
            diagnostic.print_error(error.get_position(), &rendered);
            exit(1);
        }
    };

    let (unit, result) = parse(tokens, &mut diagnostic);

    for item in &unit.items {
        println!("{}", item);
    }

    if result.is_err() || diagnostic.has_errors() {
        exit(1);
    }
}
