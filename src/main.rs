use std::io::{self, BufRead, Write};

use clap::Parser;
use simplecount::{evaluate, BinaryOp, FunctionKind, Session};

/// simplecount is a small keypad-style arithmetic evaluator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Starts an interactive keypad session instead of evaluating a single
    /// expression.
    #[arg(short, long)]
    interactive: bool,

    /// The expression to evaluate, e.g. "1+2*3".
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.interactive {
        run_session();
        return;
    }

    let Some(expression) = args.expression else {
        eprintln!("No expression given. Pass one as an argument, or use --interactive.");
        std::process::exit(1);
    };

    match evaluate(&expression) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Runs the interactive keypad loop over stdin.
///
/// Each line is fed to the session one key at a time, so operator editing
/// and the clear-on-result behavior work exactly as they do with buttons. A
/// function name on its own line presses that function key.
fn run_session() {
    let mut session = Session::new();
    println!("Keys are digits, '.', '+', '-', '*', '/', '%' and '='.");
    println!("Lines 'log', 'exp', 'cos', 'tan', 'sin', 'sqrt', 'square' apply a function;");
    println!("'back' erases, 'clear' resets the display, 'quit' leaves.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = stdin.lock().lines().next() else {
            break;
        };
        let input = line.trim();

        match input {
            "quit" | "exit" => break,
            "clear" => session.press_clear(),
            "back" => session.press_backspace(),
            _ => {
                if let Some(kind) = FunctionKind::from_name(input) {
                    if let Err(e) = session.press_function(kind) {
                        eprintln!("{e}");
                    }
                } else {
                    feed_keys(&mut session, input);
                }
            },
        }

        if session.last_equation().is_empty() {
            println!("{}", session.display());
        } else {
            println!("{}  [{}]", session.display(), session.last_equation());
        }
    }
}

/// Presses one key per character of the line.
fn feed_keys(session: &mut Session, keys: &str) {
    for key in keys.chars() {
        if key == '=' {
            if let Err(e) = session.press_equals() {
                eprintln!("{e}");
            }
        } else if BinaryOp::from_char(key).is_some() {
            session.press_operator(key);
        } else {
            session.press_digit(key);
        }
    }
}
