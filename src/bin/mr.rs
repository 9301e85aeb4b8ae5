use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use molcalc::{AtomicDatabase, ChemicalFormula, Result};
use rustyline::DefaultEditor;
use std::{fmt::Write, sync::LazyLock};

static DB: LazyLock<AtomicDatabase> = LazyLock::new(AtomicDatabase::default);

fn main() {
    let mut rl = DefaultEditor::new().unwrap();
    while let Ok(formula) = rl.readline("Formula: ") {
        rl.add_history_entry(&formula).unwrap();
        match formula_info(&formula) {
            Ok(info) => print!("{info}"),
            Err(diagnostic) => render_error(*diagnostic),
        }
    }
}

fn formula_info(formula: &str) -> Result<String> {
    let mut buf = String::new();
    let formula = ChemicalFormula::new(&DB, formula)?;
    let result = formula.molar_mass()?;

    writeln!(buf, "{result}").unwrap();
    writeln!(buf).unwrap();

    Ok(buf)
}

fn render_error(diagnostic: impl Into<Box<dyn Diagnostic + 'static>>) {
    let mut buf = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic.into().as_ref())
        .unwrap();
    println!("{buf}");
}
