use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "verbi")]
#[command(about = "Coniugazioni dei verbi italiani con il confronto in tedesco.")]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Verbo italiano da cercare (es. Essere)
    #[arg(long = "verb", value_name = "VERBO")]
    pub verb: Option<String>,

    /// Verbo italiano da cercare (abbreviazione di --verb)
    #[arg(short = 'v', value_name = "VERBO")]
    pub short_verb: Option<String>,
}

impl Cli {
    /// The verb to look up; empty means "list everything"
    pub fn query(&self) -> String {
        resolve_query(self.verb.as_deref(), self.short_verb.as_deref())
    }
}

/// `--verb` wins when it carries a value, otherwise `-v` is used
pub fn resolve_query(long: Option<&str>, short: Option<&str>) -> String {
    match long {
        Some(verb) if !verb.is_empty() => verb.to_string(),
        _ => short.unwrap_or_default().to_string(),
    }
}
