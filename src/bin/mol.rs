use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use molcalc::{solver, TripleInput};
use rustyline::DefaultEditor;

fn main() {
    println!("Supply exactly two quantities and leave the third blank to compute it.");
    let mut rl = DefaultEditor::new().unwrap();
    loop {
        let Ok(moles) = rl.readline("Mol (n): ") else {
            break;
        };
        let Ok(mass) = rl.readline("Massa (g): ") else {
            break;
        };
        let Ok(molar_mass) = rl.readline("Mr (g/mol): ") else {
            break;
        };

        let input = TripleInput::from_raw(&moles, &mass, &molar_mass);
        match solver::solve(&input) {
            Ok(solution) => println!("{solution}\n"),
            Err(diagnostic) => render_error(*diagnostic),
        }
    }
}

fn render_error(diagnostic: impl Into<Box<dyn Diagnostic + 'static>>) {
    let mut buf = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic.into().as_ref())
        .unwrap();
    println!("{buf}");
}
