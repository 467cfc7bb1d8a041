use crate::domain::model::{LookupResult, Outcome, VerbRecord};
use crate::presentation::theme::Theme;
use std::fmt::Write;

const SEPARATOR: &str = "--------------------";

/// Everything printed for one invocation: matched records, then one summary
pub fn format_output(
    result: &LookupResult,
    query: &str,
    dataset_len: usize,
    dataset_name: &str,
    theme: &Theme,
) -> String {
    let mut output = String::new();
    for record in &result.matches {
        output.push_str(&format_record(record, theme));
    }

    let outcome = Outcome::classify(query, result.found, dataset_len);
    output.push_str(&format_summary(outcome, dataset_name, theme));
    output
}

pub fn format_record(record: &VerbRecord, theme: &Theme) -> String {
    let mut output = String::new();

    writeln!(output).ok();
    writeln!(
        output,
        "{} {}",
        (theme.label)("Verbo (Italiano):"),
        (theme.verb)(&record.verb)
    )
    .ok();

    writeln!(output).ok();
    writeln!(output, "{}", (theme.header)("Coniugazioni Tedesche:")).ok();
    for form in &record.german_forms {
        writeln!(output, "{}", (theme.para)(form)).ok();
    }

    writeln!(output).ok();
    writeln!(output, "{}", (theme.header)("Coniugazioni Italiane:")).ok();
    for form in &record.italian_forms {
        writeln!(output, "{}", (theme.para)(form)).ok();
    }

    writeln!(output, "{}", (theme.line)(SEPARATOR)).ok();
    output
}

pub fn format_summary(outcome: Outcome, dataset_name: &str, theme: &Theme) -> String {
    let mut output = String::new();
    writeln!(output).ok();

    match outcome {
        Outcome::NotFound(query) => {
            let msg = format!("Verbo '{}' non trovato nel file {}.", query, dataset_name);
            writeln!(output, "{}", (theme.summary)(&msg)).ok();
        }
        Outcome::EmptyDataset => {
            let msg = format!("Nessun verbo trovato nel file {}.", dataset_name);
            writeln!(output, "{}", (theme.summary)(&msg)).ok();
        }
        Outcome::FullListing => {
            let msg = format!("Elenco di tutti i verbi nel file {} mostrato.", dataset_name);
            writeln!(output, "{}", (theme.summary)(&msg)).ok();
            writeln!(
                output,
                "Per visualizzare un verbo specifico, usa il flag: --verb <nome_verbo> oppure -v <nome_verbo>"
            )
            .ok();
        }
        Outcome::Shown(query) => {
            let msg = format!("Informazioni per il verbo '{}' mostrate.", query);
            writeln!(output, "{}", (theme.summary)(&msg)).ok();
        }
    }

    output
}
