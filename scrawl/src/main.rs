use rustyline::{error::ReadlineError, DefaultEditor};
use scrawl_parser::split::EquationCount;
use scrawl_solve::{analyze, solve::{DiscriminantPolicy, SolveOptions}};
use std::{fs::File, io::{self, BufReader, IsTerminal, Read}};

/// Analyzes the given equation text and prints the result as JSON, or renders the failure as a
/// report on stderr.
///
/// A degenerate solve is still a success here: it serializes as an explicit
/// `{"kind": "degenerate"}` value rather than crashing or printing nothing.
fn analyze_and_print(input: &str, hint: Option<EquationCount>, opts: SolveOptions) {
    match analyze(input, hint, opts) {
        Ok(analysis) => println!("{}", serde_json::to_string_pretty(&analysis).unwrap()),
        Err(err) => err.report_to_stderr("input").unwrap(),
    }
}

fn main() {
    let mut opts = SolveOptions::default();
    let mut hint = None;
    let mut filename = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--exact-roots" => opts.discriminant = DiscriminantPolicy::Exact,
            "--single" => hint = Some(EquationCount::One),
            "--pair" => hint = Some(EquationCount::Two),
            _ => filename = Some(arg),
        }
    }

    if let Some(filename) = filename {
        // analyze the contents of a file
        let mut file = BufReader::new(File::open(filename).unwrap());
        let mut input = String::new();
        file.read_to_string(&mut input).unwrap();

        analyze_and_print(&input, hint, opts);
    } else if !io::stdin().is_terminal() {
        // read equation text from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        analyze_and_print(&input, hint, opts);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new().unwrap();

        fn process_line(rl: &mut DefaultEditor, hint: Option<EquationCount>, opts: SolveOptions) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            // a simultaneous pair is entered on one prompt line with an escaped newline
            let input = input.replace("\\n", "\n");
            analyze_and_print(&input, hint, opts);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, hint, opts) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
