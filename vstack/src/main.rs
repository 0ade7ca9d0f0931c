use clap::Parser as ClapParser;
use std::{io, process};

use vstack::{
    ExecutionResult, Interpreter, InterpreterSettings, OpCode, Value,
};

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the stack to stderr after every step
    #[arg(long, help = "Print the stack after every push, pop and token")]
    trace: bool,

    /// Raise the default log level to debug
    #[arg(short, long)]
    verbose: bool,
}

enum Step {
    Push(Value),
    Token(OpCode),
    /// Pop the result and print it using the label.
    Report(&'static str),
}

fn demo_program() -> Vec<Step> {
    vec![
        Step::Push(Value::integer(1)),
        Step::Push(Value::integer(2)),
        Step::Push(Value::integer(3)),
        Step::Token(OpCode::ADD),
        Step::Token(OpCode::SUB),
        Step::Report("1 - (2 + 3)"),
        Step::Push(Value::string_from("Hello ")),
        Step::Push(Value::string_from("World")),
        Step::Token(OpCode::ADD),
        Step::Report("str"),
        Step::Push(Value::string_from("2")),
        Step::Token(OpCode::TO_INT),
        Step::Report("\"2\""),
    ]
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .init();

    let settings = InterpreterSettings::new().with_trace_stack(cli.verbose);
    let mut interpreter = Interpreter::new(settings);

    if cli.trace {
        print_stack(&interpreter);
    }

    for step in demo_program() {
        match step {
            Step::Push(value) => interpreter.push(value),
            Step::Token(code) => interpreter.process(code),
            Step::Report(label) => match interpreter.pop() {
                ExecutionResult::Value(value) => println!("{label} = {value}"),
                ExecutionResult::Error(err) => {
                    eprintln!("Error: {label}: {err}");
                    process::exit(1);
                }
                ExecutionResult::Void => {
                    eprintln!("Error: {label}: no value produced");
                    process::exit(1);
                }
            },
        }
        if cli.trace {
            print_stack(&interpreter);
        }
    }
}

fn print_stack(interpreter: &Interpreter) {
    if let Err(err) = interpreter.stack().print(&mut io::stderr()) {
        eprintln!("Error writing stack: {err}");
        process::exit(1);
    }
}
